use client::ListBody;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdExternalLink, LdPencil, LdPlus, LdRefreshCw, LdTrash2};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonSize, ButtonVariant, DataTableEmpty, DataTableSkeleton};

/// Table body shared by every list screen.
///
/// A list that never loaded shows the failure and a retry button instead of
/// the empty message.
#[component]
pub fn ListRows(
    columns: usize,
    body: ListBody,
    on_retry: EventHandler<()>,
    #[props(default = "Belum ada data".to_string())] empty_message: String,
    children: Element,
) -> Element {
    match body {
        ListBody::Skeleton => rsx! {
            DataTableSkeleton { columns }
        },
        ListBody::LoadFailed(message) => rsx! {
            tr {
                td { class: "data-table-failed", colspan: "{columns}",
                    span { "{message}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: move |_| on_retry.call(()),
                        Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 14, height: 14 }
                        "Coba lagi"
                    }
                }
            }
        },
        ListBody::Empty => rsx! {
            DataTableEmpty { columns, message: empty_message }
        },
        ListBody::Rows => rsx! {
            {children}
        },
    }
}

/// Link to an uploaded document or external page; a dash when absent.
#[component]
pub fn DocumentLink(href: Option<String>, #[props(default = "Lihat".to_string())] label: String) -> Element {
    match href.filter(|h| !h.trim().is_empty()) {
        Some(href) => rsx! {
            a { class: "cell-link", href: "{href}", target: "_blank", rel: "noopener",
                Icon::<LdExternalLink> { icon: LdExternalLink, width: 14, height: 14 }
                "{label}"
            }
        },
        None => rsx! {
            span { class: "cell-muted", "-" }
        },
    }
}

/// Edit and delete buttons at the end of a row. Rows without an edit
/// screen leave `on_edit` unset.
#[component]
pub fn RowActions(
    #[props(default)] on_edit: Option<EventHandler<MouseEvent>>,
    on_delete: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "row-actions",
            if let Some(on_edit) = on_edit {
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    "aria-label": "Edit",
                    onclick: move |evt| on_edit.call(evt),
                    Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                }
            }
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Small,
                "aria-label": "Hapus",
                onclick: move |evt| on_delete.call(evt),
                Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
            }
        }
    }
}

/// "Tambah" action for a page header.
#[component]
pub fn AddButton(onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        Button { onclick: move |evt| onclick.call(evt),
            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
            "Tambah"
        }
    }
}
