use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{LoginForm, LoginOutcome};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginIntent {
    SetUsername(String),
    SetPassword(String),
    Submit,
}

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let session_store = ctx.session_store();
    let form = use_signal(LoginForm::default);

    let dispatch_intent = {
        let session_store = session_store.clone();
        use_callback(move |intent: LoginIntent| {
            let mut form = form;
            match intent {
                LoginIntent::SetUsername(value) => form.write().username = value,
                LoginIntent::SetPassword(value) => form.write().password = value,
                LoginIntent::Submit => {
                    let outcome = form.write().submit(&session_store);
                    if outcome == LoginOutcome::SignedIn {
                        let _ = navigator.push(Route::Dashboard {});
                    }
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LoginTestHandles>() {
                handles.register(dispatch_intent, form);
            }
        }
    }

    let already_signed_in = session_store.current_user();
    let form_read = form.read();
    let username = form_read.username.clone();
    let password = form_read.password.clone();
    let error_message = form_read.error_message();
    drop(form_read);

    rsx! {
        div { class: "login-container",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { "Sistema PGR" }
                    p { "Programa de Gerenciamento de Riscos" }
                }

                if let Some(identity) = already_signed_in {
                    p { class: "login-resume",
                        "Sessão ativa como {identity}. "
                        button {
                            class: "btn-link",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = navigator.push(Route::Dashboard {});
                            },
                            "Ir para o painel"
                        }
                    }
                }

                form {
                    class: "login-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        dispatch_intent.call(LoginIntent::Submit);
                    },
                    div { class: "form-group",
                        label { r#for: "usuario", "Usuário" }
                        input {
                            r#type: "text",
                            id: "usuario",
                            value: "{username}",
                            placeholder: "Digite seu usuário",
                            autocomplete: "username",
                            oninput: move |evt| dispatch_intent.call(LoginIntent::SetUsername(evt.value())),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "senha", "Senha" }
                        input {
                            r#type: "password",
                            id: "senha",
                            value: "{password}",
                            placeholder: "Digite sua senha",
                            autocomplete: "current-password",
                            oninput: move |evt| dispatch_intent.call(LoginIntent::SetPassword(evt.value())),
                        }
                    }

                    if let Some(message) = error_message {
                        div { class: "error-message", role: "alert", "{message}" }
                    }

                    button { class: "btn-primary", r#type: "submit", "Entrar" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LoginTestHandles {
    dispatch: Rc<RefCell<Option<Callback<LoginIntent>>>>,
    form: Rc<RefCell<Option<Signal<LoginForm>>>>,
}

#[cfg(test)]
impl LoginTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<LoginIntent>, form: Signal<LoginForm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.form.borrow_mut() = Some(form);
    }

    pub(crate) fn dispatch(&self) -> Callback<LoginIntent> {
        (*self.dispatch.borrow()).expect("login dispatch registered")
    }

    pub(crate) fn form(&self) -> Signal<LoginForm> {
        (*self.form.borrow()).expect("login form registered")
    }
}
