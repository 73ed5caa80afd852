use dioxus::prelude::*;

use crate::forms::{FieldErrors, SignInForm};
use crate::icons::{FaEnvelope, FaLock};
use crate::notifications::{notify, use_notifications, NoticeLevel};
use crate::views::AuthShell;
use crate::{use_auth, use_session, AuthState, Icon};

/// Sign-in page.
///
/// A successful sign-in only flips the session phase; the guest-only guard
/// around this page does the navigation.
#[component]
pub fn SignInView(on_navigate_sign_up: EventHandler<()>) -> Element {
    let session = use_session();
    let mut auth_state = use_auth();
    let mut notifications = use_notifications();

    let mut form = use_signal(SignInForm::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut pending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }

        let request = match form.read().validate() {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());
        pending.set(true);

        let session = session.clone();
        spawn(async move {
            let result = session.sign_in(&request.email, &request.password).await;
            pending.set(false);

            match result {
                Ok(()) => auth_state.set(AuthState::of(&session)),
                Err(e) => {
                    let message = match e.status() {
                        Some(400 | 401) => "E-mail e/ou senha inválidos".to_string(),
                        _ => e.user_message(),
                    };
                    notify(&mut notifications, NoticeLevel::Error, &message);
                }
            }
        });
    };

    let err = errors();
    let current = form();

    rsx! {
        AuthShell {
            title: "Acesse sua conta",
            subtitle: "Registre suas refeições e acompanhe sua dieta",
            form {
                class: "auth-form",
                onsubmit: handle_submit,

                label { r#for: "sign-in-email", "E-mail" }
                div {
                    class: "input-icon",
                    Icon { icon: FaEnvelope, width: 14, height: 14 }
                    input {
                        id: "sign-in-email",
                        class: "input",
                        r#type: "email",
                        autocomplete: "email",
                        placeholder: "seu@email.com",
                        value: "{current.email}",
                        oninput: move |e| form.write().email = e.value(),
                    }
                }
                if let Some(msg) = err.get("email") {
                    p { class: "field-error", "{msg}" }
                }

                label { r#for: "sign-in-password", "Senha" }
                div {
                    class: "input-icon",
                    Icon { icon: FaLock, width: 14, height: 14 }
                    input {
                        id: "sign-in-password",
                        class: "input",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: "{current.password}",
                        oninput: move |e| form.write().password = e.value(),
                    }
                }
                if let Some(msg) = err.get("password") {
                    p { class: "field-error", "{msg}" }
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary w-full",
                    disabled: pending(),
                    if pending() { "Entrando..." } else { "Entrar" }
                }
            }
            p {
                class: "auth-switch",
                "Ainda não tem uma conta? "
                button {
                    class: "link",
                    onclick: move |_| on_navigate_sign_up.call(()),
                    "Cadastre-se"
                }
            }
        }
    }
}
