use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            h1 { class: "not-found-title", "Halaman tidak ditemukan" }
            p { class: "not-found-message",
                "Halaman "
                code { "{path}" }
                " tidak tersedia."
            }
            Link { to: Route::Dashboard {}, class: "not-found-link", "Kembali ke Dashboard" }
        }
    }
}
