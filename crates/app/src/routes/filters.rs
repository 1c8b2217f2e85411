use dioxus::prelude::*;
use shared_types::{current_year, year_options, JenisLaporan, KATEGORI_BY_DIPA, MONTH_NAMES};
use shared_ui::{FormSelect, Input, SelectOption};

use crate::Registry;

/// Year dropdown running from the current year down to the configured floor.
#[component]
pub fn YearFilter(value: String, onchange: EventHandler<String>) -> Element {
    let registry = use_context::<Registry>();
    let options: Vec<SelectOption> = year_options(current_year(), registry.settings.year_floor)
        .into_iter()
        .map(|year| SelectOption::new(year, year.to_string()))
        .collect();

    rsx! {
        FormSelect {
            label: "Tahun",
            value,
            options,
            all_label: "Semua Tahun".to_string(),
            onchange,
        }
    }
}

#[component]
pub fn MonthFilter(value: String, onchange: EventHandler<String>) -> Element {
    let options: Vec<SelectOption> = MONTH_NAMES
        .iter()
        .enumerate()
        .skip(1)
        .map(|(month, name)| SelectOption::new(month, *name))
        .collect();

    rsx! {
        FormSelect {
            label: "Bulan",
            value,
            options,
            all_label: "Semua Bulan".to_string(),
            onchange,
        }
    }
}

#[component]
pub fn DipaFilter(value: String, onchange: EventHandler<String>) -> Element {
    let options: Vec<SelectOption> = KATEGORI_BY_DIPA
        .iter()
        .map(|(dipa, _)| SelectOption::new(dipa, *dipa))
        .collect();

    rsx! {
        FormSelect {
            label: "DIPA",
            value,
            options,
            all_label: "Semua DIPA".to_string(),
            onchange,
        }
    }
}

#[component]
pub fn JenisLaporanFilter(value: String, onchange: EventHandler<String>) -> Element {
    let options: Vec<SelectOption> = JenisLaporan::ALL
        .iter()
        .map(|jenis| SelectOption::new(jenis.as_str(), jenis.as_str()))
        .collect();

    rsx! {
        FormSelect {
            label: "Jenis Laporan",
            value,
            options,
            all_label: "Semua Jenis".to_string(),
            onchange,
        }
    }
}

/// Free-text search box. The text is kept locally so typing stays
/// responsive while the list waits out the debounce window.
#[component]
pub fn SearchFilter(
    #[props(default = "Cari...".to_string())] placeholder: String,
    onsearch: EventHandler<String>,
) -> Element {
    let mut text = use_signal(String::new);

    rsx! {
        Input {
            label: "Cari",
            value: text(),
            placeholder,
            on_input: move |value: String| {
                text.set(value.clone());
                onsearch.call(value);
            },
        }
    }
}
