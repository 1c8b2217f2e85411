use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

/// Delete confirmation built on the alert dialog primitive.
///
/// The dialog only asks; the caller runs the deletion in `on_confirm` and
/// closes the dialog through `on_open_change`.
#[component]
pub fn ConfirmDeleteDialog(
    open: bool,
    on_open_change: EventHandler<bool>,
    on_confirm: EventHandler<()>,
    /// What is being deleted, e.g. a case number.
    #[props(default)]
    subject: String,
    #[props(default = false)] busy: bool,
) -> Element {
    let description = if subject.is_empty() {
        "Data yang dihapus tidak dapat dikembalikan.".to_string()
    } else {
        format!("Data {subject} akan dihapus dan tidak dapat dikembalikan.")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot {
            class: "confirm-dialog-overlay",
            open,
            on_open_change: move |value: bool| on_open_change.call(value),
            prim::AlertDialogContent {
                class: "confirm-dialog",
                prim::AlertDialogTitle { class: "confirm-dialog-title", "Hapus data?" }
                prim::AlertDialogDescription { class: "confirm-dialog-description", "{description}" }
                prim::AlertDialogActions { class: "confirm-dialog-actions",
                    prim::AlertDialogCancel { class: "confirm-dialog-cancel", "Batal" }
                    prim::AlertDialogAction {
                        class: "confirm-dialog-confirm",
                        on_click: move |_| on_confirm.call(()),
                        if busy { "Menghapus..." } else { "Hapus" }
                    }
                }
            }
        }
    }
}
