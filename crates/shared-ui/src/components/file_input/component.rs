use dioxus::prelude::*;

use crate::components::input::FieldLabel;

/// File picker for a record attachment.
///
/// The picked file is read into memory and handed to `on_pick` as
/// `(file_name, bytes)`. `current` links the attachment already stored on
/// the server, if any.
#[component]
pub fn FileInput(
    label: String,
    accept: String,
    #[props(default)] selected: Option<String>,
    #[props(default)] current: Option<String>,
    on_pick: EventHandler<(String, Vec<u8>)>,
) -> Element {
    let mut read_failed = use_signal(|| false);

    let handle_file = move |evt: FormEvent| async move {
        let files = evt.files();
        if let Some(f) = files.first() {
            let name = f.name();
            match f.read_bytes().await {
                Ok(bytes) => {
                    read_failed.set(false);
                    on_pick.call((name, bytes.to_vec()));
                }
                Err(_) => {
                    tracing::warn!(file = %name, "Attachment could not be read");
                    read_failed.set(true);
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "input-wrapper file-input",
            FieldLabel { text: label }
            input { r#type: "file", accept: "{accept}", onchange: handle_file }
            if let Some(name) = &selected {
                span { class: "file-input-note", "Dipilih: {name}" }
            } else if let Some(href) = current.as_ref().filter(|h| !h.is_empty()) {
                a { class: "file-input-note", href: "{href}", target: "_blank", "Berkas saat ini" }
            }
            if read_failed() {
                p { class: "input-error", role: "alert", "Berkas tidak dapat dibaca" }
            }
        }
    }
}
