use pgr_core::model::{Credentials, PgrStatus};

use super::test_harness::{ViewKind, setup_view_harness};
use super::{DashboardIntent, LoginIntent};
use crate::routes::Route;
use crate::vm::{ExportOutcome, ExportPhase, LoginError, LoginPhase};

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Login);
    harness.rebuild();
    let html = harness.render();

    for expected in ["Sistema PGR", "Usuário", "Senha", "Entrar", "Digite sua senha"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("error-message"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_identity_and_defaults() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    assert!(harness.session_store.sign_in(&Credentials::demo()));
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "👤 admin",
        "Ativo",
        "PGR está em conformidade",
        "Mudar para Pendente",
        "Exportar Relatório PDF",
        "Riscos Identificados:",
        "Inspeção de EPIs - 20/11/2025",
        "Versão: 1.0.0",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Relatório salvo"), "unexpected notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_without_session_redirects_to_login() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();
    harness.settle();

    assert_eq!(harness.current_route(), Route::Login {}.to_string());
    let html = harness.render();
    assert!(html.contains("Entrar"), "login form missing in {html}");
    assert!(!html.contains("Status do PGR"), "dashboard leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_submit_with_demo_credentials_opens_dashboard() {
    let mut harness = setup_view_harness(ViewKind::Login);
    harness.rebuild();

    let dispatch = harness.login_handles.dispatch();
    harness.dom.in_runtime(|| {
        dispatch.call(LoginIntent::SetUsername("admin".to_string()));
        dispatch.call(LoginIntent::SetPassword("admin123".to_string()));
        dispatch.call(LoginIntent::Submit);
    });
    harness.settle();

    assert!(harness.session_store.is_signed_in());
    assert_eq!(
        harness.session_store.current_user().map(|id| id.to_string()),
        Some("admin".to_string())
    );
    assert_eq!(harness.current_route(), Route::Dashboard {}.to_string());
    let html = harness.render();
    assert!(html.contains("👤 admin"), "dashboard missing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_submit_with_wrong_password_stays_on_login() {
    let mut harness = setup_view_harness(ViewKind::Login);
    harness.rebuild();

    let dispatch = harness.login_handles.dispatch();
    harness.dom.in_runtime(|| {
        dispatch.call(LoginIntent::SetUsername("admin".to_string()));
        dispatch.call(LoginIntent::SetPassword("Admin123".to_string()));
        dispatch.call(LoginIntent::Submit);
    });
    harness.settle();

    assert!(!harness.session_store.is_signed_in());
    assert_eq!(harness.current_route(), Route::Login {}.to_string());
    let form = harness.login_handles.form();
    assert_eq!(
        harness.dom.in_runtime(|| form.peek().phase()),
        LoginPhase::Error(LoginError::InvalidCredentials)
    );
    let html = harness.render();
    assert!(html.contains("Usuário ou senha inválidos"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_sign_out_clears_session() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    assert!(harness.session_store.sign_in(&Credentials::demo()));
    harness.rebuild();

    let dispatch = harness.dashboard_handles.dispatch();
    harness.dom.in_runtime(|| dispatch.call(DashboardIntent::SignOut));
    harness.settle();

    assert!(!harness.session_store.is_signed_in());
    assert_eq!(harness.session_store.current_user(), None);
    assert_eq!(harness.current_route(), Route::Login {}.to_string());
    let html = harness.render();
    assert!(html.contains("Entrar"), "login form missing in {html}");
    assert!(!html.contains("Sessão ativa"), "stale session in {html}");
    assert!(!html.contains("Status do PGR"), "dashboard leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_status_selection_keeps_only_last_choice() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    assert!(harness.session_store.sign_in(&Credentials::demo()));
    harness.rebuild();

    let dispatch = harness.dashboard_handles.dispatch();
    for status in [PgrStatus::Active, PgrStatus::Pending, PgrStatus::InProgress] {
        harness
            .dom
            .in_runtime(|| dispatch.call(DashboardIntent::SelectStatus(status)));
        harness.drive();
    }

    let board = harness.dashboard_handles.board();
    assert_eq!(harness.dom.in_runtime(|| board.peek().current()), PgrStatus::InProgress);

    let html = harness.render();
    assert!(html.contains("Revisão em processo"), "missing description in {html}");
    assert!(!html.contains("Requer atenção imediata"), "stale pending in {html}");
    assert!(!html.contains("PGR está em conformidade"), "stale active in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_export_twice_produces_one_report() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    assert!(harness.session_store.sign_in(&Credentials::demo()));
    harness.rebuild();

    let dispatch = harness.dashboard_handles.dispatch();
    harness.dom.in_runtime(|| {
        dispatch.call(DashboardIntent::SelectStatus(PgrStatus::Pending));
        dispatch.call(DashboardIntent::Export);
        dispatch.call(DashboardIntent::Export);
    });
    harness.drive();
    for _ in 0..5 {
        harness.drive_async().await;
    }

    assert_eq!(harness.sink.len(), 1);
    let delivered = harness.sink.delivered();
    assert_eq!(delivered[0].file_name, "relatorio-pgr-1700000000000.pdf");

    let export = harness.dashboard_handles.export();
    let phase = harness.dom.in_runtime(|| export.peek().phase().clone());
    assert_eq!(
        phase,
        ExportPhase::Done(ExportOutcome::Saved {
            file_name: "relatorio-pgr-1700000000000.pdf".to_string(),
            location: "relatorio-pgr-1700000000000.pdf".to_string(),
        })
    );

    let html = harness.render();
    assert!(html.contains("Relatório salvo em"), "missing notice in {html}");
}
