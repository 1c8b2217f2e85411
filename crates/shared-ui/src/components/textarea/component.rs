use dioxus::prelude::*;

use crate::components::input::{FieldError, FieldLabel};

/// Multi-line counterpart of [`Input`](crate::components::Input) for
/// addresses and free-form notes.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = 3)] rows: u32,
    #[props(default = false)] required: bool,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "input-wrapper", "data-invalid": error.is_some(),
            FieldLabel { text: label, required }
            textarea {
                class: "textarea",
                rows,
                value: "{value}",
                placeholder: "{placeholder}",
                required,
                "aria-invalid": if error.is_some() { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt.value()),
            }
            FieldError { error }
        }
    }
}
