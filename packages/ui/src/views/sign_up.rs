use dioxus::prelude::*;

use crate::forms::{FieldErrors, SignUpForm};
use crate::notifications::{notify, use_notifications, NoticeLevel};
use crate::use_session;
use crate::views::AuthShell;

/// Sign-up page. Registration does not sign the user in; on success the
/// user is sent to the sign-in page.
#[component]
pub fn SignUpView(on_navigate_sign_in: EventHandler<()>) -> Element {
    let session = use_session();
    let mut notifications = use_notifications();

    let mut form = use_signal(SignUpForm::default);
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

        let client = session.client().clone();
        spawn(async move {
            let result = client.register(&request).await;
            pending.set(false);

            match result {
                Ok(()) => {
                    notify(&mut notifications, NoticeLevel::Success, "Conta criada com sucesso");
                    on_navigate_sign_in.call(());
                }
                Err(e) => {
                    tracing::warn!("registration failed: {}", e);
                    notify(&mut notifications, NoticeLevel::Error, &e.user_message());
                }
            }
        });
    };

    let err = errors();
    let current = form();

    rsx! {
        AuthShell {
            title: "Crie sua conta",
            subtitle: "Comece a acompanhar sua alimentação hoje",
            form {
                class: "auth-form",
                onsubmit: handle_submit,

                label { r#for: "sign-up-name", "Nome" }
                input {
                    id: "sign-up-name",
                    class: "input",
                    autocomplete: "name",
                    value: "{current.name}",
                    oninput: move |e| form.write().name = e.value(),
                }
                if let Some(msg) = err.get("name") {
                    p { class: "field-error", "{msg}" }
                }

                label { r#for: "sign-up-email", "E-mail" }
                input {
                    id: "sign-up-email",
                    class: "input",
                    r#type: "email",
                    autocomplete: "email",
                    value: "{current.email}",
                    oninput: move |e| form.write().email = e.value(),
                }
                if let Some(msg) = err.get("email") {
                    p { class: "field-error", "{msg}" }
                }

                label { r#for: "sign-up-password", "Senha" }
                input {
                    id: "sign-up-password",
                    class: "input",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: "{current.password}",
                    oninput: move |e| form.write().password = e.value(),
                }
                if let Some(msg) = err.get("password") {
                    p { class: "field-error", "{msg}" }
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary w-full",
                    disabled: pending(),
                    if pending() { "Cadastrando..." } else { "Criar conta" }
                }
            }
            p {
                class: "auth-switch",
                "Já tem uma conta? "
                button {
                    class: "link",
                    onclick: move |_| on_navigate_sign_in.call(()),
                    "Entrar"
                }
            }
        }
    }
}
