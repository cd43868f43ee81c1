use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!("No route for {}", path);

    rsx! {
        section { class: "page narrow not-found",
            h1 { "Page not found" }
            p { class: "muted", "Nothing lives at {path}." }
            Link { class: "button button--primary", to: Route::Home {}, "Back to home" }
        }
    }
}
