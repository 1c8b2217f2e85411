use dioxus::prelude::*;

/// Labelled field for text, numbers and dates.
///
/// A `Some` in `error` renders the message under the field and marks the
/// input `aria-invalid`, so validator messages land next to their field.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "input-wrapper", "data-invalid": error.is_some(),
            FieldLabel { text: label, required }
            input {
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                disabled,
                required,
                "aria-invalid": if error.is_some() { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt.value()),
                ..merged,
            }
            FieldError { error }
        }
    }
}

/// Caption above a form field; required fields get a trailing asterisk.
#[component]
pub fn FieldLabel(text: String, #[props(default = false)] required: bool) -> Element {
    if text.is_empty() {
        return rsx! {};
    }
    rsx! {
        span { class: "input-label",
            "{text}"
            if required {
                span { class: "input-required", "aria-hidden": "true", " *" }
            }
        }
    }
}

#[component]
pub fn FieldError(error: Option<String>) -> Element {
    match error {
        Some(message) => rsx! {
            p { class: "input-error", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}
