use dioxus::prelude::*;
use dioxus_router::use_navigator;
use pgr_core::model::PgrStatus;
use tracing::debug;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{
    APP_VERSION, COMPANY_NAME, ExportVm, INDICATORS, StatusBadgeVm, StatusBoard, StatusOptionVm,
    SYSTEM_TAGLINE, UPCOMING_ACTIONS, format_today, user_badge,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardIntent {
    SelectStatus(PgrStatus),
    Export,
    SignOut,
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let session_store = ctx.session_store();
    let export_service = ctx.export_service();
    let identity = session_store.current_user();

    let board = use_signal(StatusBoard::default);
    let export = use_signal(ExportVm::default);

    let signed_out = identity.is_none();
    use_effect(move || {
        if signed_out {
            let _ = navigator.replace(Route::Login {});
        }
    });

    let dispatch_intent = {
        let session_store = session_store.clone();
        let identity = identity.clone();
        use_callback(move |intent: DashboardIntent| {
            let mut board = board;
            let mut export = export;

            match intent {
                DashboardIntent::SelectStatus(next) => {
                    // Peek first so reselecting the current status does not re-render.
                    if board.peek().current() != next {
                        board.write().select(next);
                    }
                }
                DashboardIntent::Export => {
                    if !export.write().begin() {
                        debug!(event = "ui.dashboard.export_ignored");
                        return;
                    }
                    let export_service = export_service.clone();
                    let identity = identity.clone();
                    let status = board.peek().current();
                    // Scoped to this component: leaving the dashboard cancels a pending export.
                    spawn(async move {
                        let result = export_service.export(identity, status).await;
                        export.write().finish(result);
                    });
                }
                DashboardIntent::SignOut => {
                    session_store.sign_out();
                    let _ = navigator.push(Route::Login {});
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DashboardTestHandles>() {
                handles.register(dispatch_intent, board, export);
            }
        }
    }

    let Some(identity) = identity else {
        return rsx! {
            div { class: "page",
                p { "Sessão encerrada. Redirecionando para o login..." }
            }
        };
    };

    let badge = board.read().badge();
    let options = board.read().options();
    let export_vm = export.read().clone();
    let today = format_today(&ctx.clock());
    let user_label = user_badge(Some(&identity));

    rsx! {
        div { class: "dashboard-container",
            header { class: "dashboard-header",
                div { class: "header-content",
                    div { class: "header-left",
                        h1 { "{COMPANY_NAME}" }
                        p { "{SYSTEM_TAGLINE}" }
                    }
                    div { class: "header-right",
                        span { class: "user-info", "{user_label}" }
                        button {
                            class: "btn-logout",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(DashboardIntent::SignOut),
                            "Sair"
                        }
                    }
                }
            }

            main { class: "dashboard-main",
                div { class: "dashboard-content",
                    h2 { class: "page-title", "Dashboard" }

                    div { class: "cards-grid",
                        StatusCard { badge, options, today, on_intent: dispatch_intent }
                        ActionsCard { export: export_vm, on_intent: dispatch_intent }
                    }

                    InfoSection {}
                }
            }
        }
    }
}

#[component]
fn StatusCard(
    badge: StatusBadgeVm,
    options: Vec<StatusOptionVm>,
    today: String,
    on_intent: EventHandler<DashboardIntent>,
) -> Element {
    rsx! {
        div { class: "card status-card",
            div { class: "card-header",
                h3 { "Status do PGR" }
                div { class: "status-selector",
                    for option in options {
                        button {
                            key: "{option.status.slug()}",
                            class: "{option.css_class()}",
                            id: "status-{option.status.slug()}",
                            r#type: "button",
                            title: "{option.title}",
                            onclick: move |_| on_intent.call(DashboardIntent::SelectStatus(option.status)),
                            "{option.icon}"
                        }
                    }
                }
            }
            div { class: "status-content",
                div {
                    class: "status-indicator",
                    style: "background-color: {badge.color}",
                    span { class: "status-icon", "{badge.icon}" }
                }
                div { class: "status-info",
                    h4 { style: "color: {badge.color}", "{badge.label}" }
                    p { "{badge.description}" }
                }
            }
            div { class: "status-date", "Última atualização: {today}" }
        }
    }
}

#[component]
fn ActionsCard(export: ExportVm, on_intent: EventHandler<DashboardIntent>) -> Element {
    let exporting = export.is_exporting();
    let label = export.button_label();
    let notice = export.notice();

    rsx! {
        div { class: "card actions-card",
            div { class: "card-header",
                h3 { "Ações Rápidas" }
            }
            div { class: "actions-content",
                button {
                    class: "btn-action btn-export",
                    id: "export-pdf",
                    r#type: "button",
                    disabled: exporting,
                    onclick: move |_| on_intent.call(DashboardIntent::Export),
                    if exporting {
                        span { class: "spinner" }
                    }
                    "{label}"
                }
                button { class: "btn-action btn-secondary", r#type: "button", disabled: true,
                    "📊 Análise de Riscos"
                }
                button { class: "btn-action btn-secondary", r#type: "button", disabled: true,
                    "📋 Checklist de Segurança"
                }
            }
            if let Some(notice) = notice {
                p { class: "export-notice", role: "status", "{notice}" }
            }
            div { class: "card-footer",
                small { "💡 Clique em \"Exportar Relatório\" para gerar o PDF" }
            }
        }
    }
}

#[component]
fn InfoSection() -> Element {
    rsx! {
        div { class: "info-section",
            div { class: "info-card",
                h4 { "📈 Indicadores" }
                for indicator in INDICATORS {
                    div { key: "{indicator.label}", class: "metric",
                        span { "{indicator.label}" }
                        strong { "{indicator.value}" }
                    }
                }
            }

            div { class: "info-card",
                h4 { "📅 Próximas Ações" }
                ul { class: "actions-list",
                    for action in UPCOMING_ACTIONS {
                        li { key: "{action}", "{action}" }
                    }
                }
            }

            div { class: "info-card",
                h4 { "ℹ️ Sobre o Sistema" }
                p { class: "info-text",
                    "Este é um protótipo de demonstração do sistema de gestão PGR. Versão: {APP_VERSION}"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DashboardTestHandles {
    dispatch: Rc<RefCell<Option<Callback<DashboardIntent>>>>,
    board: Rc<RefCell<Option<Signal<StatusBoard>>>>,
    export: Rc<RefCell<Option<Signal<ExportVm>>>>,
}

#[cfg(test)]
impl DashboardTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<DashboardIntent>,
        board: Signal<StatusBoard>,
        export: Signal<ExportVm>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.board.borrow_mut() = Some(board);
        *self.export.borrow_mut() = Some(export);
    }

    pub(crate) fn dispatch(&self) -> Callback<DashboardIntent> {
        (*self.dispatch.borrow()).expect("dashboard dispatch registered")
    }

    pub(crate) fn board(&self) -> Signal<StatusBoard> {
        (*self.board.borrow()).expect("status board registered")
    }

    pub(crate) fn export(&self) -> Signal<ExportVm> {
        (*self.export.borrow()).expect("export state registered")
    }
}
