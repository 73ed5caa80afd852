use dioxus::prelude::*;

use ui::{load_config, AppProvider};
use views::{AuthLayout, Home, PrivateLayout, SignIn, SignUp, Statistics};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(AuthLayout)]
        #[route("/auth/sign-in")]
        SignIn {},
        #[route("/auth/sign-up")]
        SignUp {},
    #[end_layout]
    #[layout(PrivateLayout)]
        #[route("/home")]
        Home {},
        #[route("/statistics")]
        Statistics {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        AppProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/home`; the guard sends guests on to sign-in.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::Home {});
    });
    rsx! {}
}

/// Unknown paths behave like `/`.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    use_effect(move || {
        tracing::debug!("unknown route /{}", segments.join("/"));
        nav.replace(Route::Home {});
    });
    rsx! {}
}
