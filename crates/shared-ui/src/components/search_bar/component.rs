use dioxus::prelude::*;

/// Filter controls above a list table.
///
/// While `busy` the row is marked `aria-busy` and shows a short loading
/// note, so a filter change that is still fetching is visible even when the
/// table keeps its previous rows.
#[component]
pub fn SearchBar(#[props(default = false)] busy: bool, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "search-bar",
            role: "search",
            "aria-busy": if busy { "true" } else { "false" },
            {children}
            if busy {
                span { class: "search-bar-status", "Memuat..." }
            }
        }
    }
}
