use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::skeleton::Skeleton;

/// Create/edit form that slides in from the right edge over a list screen.
///
/// Clicking the backdrop or "Batal" calls `on_close`, except while `busy`,
/// so a save in flight cannot be abandoned halfway. `loading` swaps the
/// fields for placeholders while an existing record is fetched.
#[component]
pub fn FormSheet(
    open: bool,
    title: String,
    #[props(default)] description: String,
    #[props(default = false)] busy: bool,
    #[props(default = false)] loading: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    let close = move |_| {
        if !busy {
            on_close.call(());
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "sheet-overlay", onclick: close,
            section {
                class: "sheet-panel",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{title}",
                onclick: move |evt| evt.stop_propagation(),
                header { class: "sheet-header",
                    h2 { class: "sheet-title", "{title}" }
                    if !description.is_empty() {
                        p { class: "sheet-description", "{description}" }
                    }
                }
                form {
                    class: "sheet-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        if !busy && !loading {
                            on_submit.call(());
                        }
                    },
                    div { class: "sheet-fields",
                        if loading {
                            Skeleton { lines: 6, class: "skeleton-text" }
                        } else {
                            {children}
                        }
                    }
                    footer { class: "sheet-footer",
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: busy,
                            onclick: close,
                            "Batal"
                        }
                        Button { submit: true, busy, disabled: loading,
                            if busy { "Menyimpan..." } else { "Simpan" }
                        }
                    }
                }
            }
        }
    }
}
