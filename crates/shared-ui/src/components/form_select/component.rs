use dioxus::prelude::*;
use shared_types::ALL_OPTION;

/// One entry of a filter dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
        }
    }
}

/// Native `<select>` for filter bars.
///
/// With `all_label` set, a leading option with value `"all"` is rendered;
/// choosing it clears the filter.
#[component]
pub fn FormSelect(
    #[props(default)] label: String,
    value: String,
    options: Vec<SelectOption>,
    #[props(default)] all_label: Option<String>,
    #[props(default = false)] disabled: bool,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "form-select-wrapper",
            if !label.is_empty() {
                span { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: "{value}",
                disabled,
                onchange: move |evt| onchange.call(evt.value()),
                if let Some(all) = &all_label {
                    option { value: ALL_OPTION, selected: value == ALL_OPTION, "{all}" }
                }
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
