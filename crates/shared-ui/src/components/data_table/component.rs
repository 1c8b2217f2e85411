use dioxus::prelude::*;

use crate::components::skeleton::Skeleton;

#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table { {children} }
        }
    }
}

#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(
    #[props(default = false)] numeric: bool,
    children: Element,
) -> Element {
    rsx! {
        th { class: if numeric { "numeric" } else { "" }, {children} }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(
    #[props(default = false)] numeric: bool,
    children: Element,
) -> Element {
    rsx! {
        td { class: if numeric { "numeric" } else { "" }, {children} }
    }
}

/// Full-width row shown when a loaded page has no records.
#[component]
pub fn DataTableEmpty(
    columns: usize,
    #[props(default = "Belum ada data".to_string())] message: String,
) -> Element {
    rsx! {
        tr {
            td { class: "data-table-empty", colspan: "{columns}", "{message}" }
        }
    }
}

/// Placeholder rows for the first load of a screen.
#[component]
pub fn DataTableSkeleton(columns: usize, #[props(default = 5)] rows: usize) -> Element {
    rsx! {
        for row in 0..rows {
            tr { key: "skeleton-{row}",
                for col in 0..columns {
                    td { key: "skeleton-{row}-{col}",
                        Skeleton { class: "skeleton-text" }
                    }
                }
            }
        }
    }
}
