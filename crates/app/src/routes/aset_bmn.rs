use dioxus::prelude::*;
use shared_types::{
    current_year, section_items, AsetBmn, Resource, BMN_SECTIONS, DOCUMENT_FILE,
    JENIS_LAPORAN_BMN, YEAR_FILTER,
};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, FieldError, FormSelect, PageHeader, SearchBar,
    SelectOption,
};

use super::cells::{AddButton, DocumentLink, ListRows, RowActions};
use super::filters::YearFilter;
use crate::forms::{use_record_form, AttachmentField, RecordForm, YearField};
use crate::hooks::use_resource_list;

const COLUMNS: usize = 4;

/// BMN report documents, grouped into one card per report section.
#[component]
pub fn AsetBmnList() -> Element {
    let list = use_resource_list::<AsetBmn>();
    let form = use_record_form::<AsetBmn>();
    let state = list.state.read();

    let sections: Vec<(&'static str, Vec<AsetBmn>)> = BMN_SECTIONS
        .iter()
        .map(|(title, prefix)| {
            let items = section_items(&state.items, prefix).into_iter().cloned().collect();
            (*title, items)
        })
        .collect();

    rsx! {
        div { class: "container",
            PageHeader {
                title: AsetBmn::TITLE.to_string(),
                description: "Laporan Barang Milik Negara per tahun anggaran",
                AddButton {
                    onclick: move |_| form.open_create(AsetBmn {
                        tahun: current_year(),
                        ..AsetBmn::default()
                    }),
                }
            }

            SearchBar { busy: state.loading,
                YearFilter {
                    value: state.filters.select_value(YEAR_FILTER.name),
                    onchange: move |v| list.set_filter(YEAR_FILTER.name, v),
                }
            }

            for (title, items) in sections {
                Card { key: "{title}",
                    CardHeader {
                        CardTitle { "{title}" }
                    }
                    CardContent {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Jenis Laporan" }
                                DataTableColumn { "Tahun" }
                                DataTableColumn { "Dokumen" }
                                DataTableColumn { "" }
                            }
                            DataTableBody {
                                ListRows {
                                    columns: COLUMNS,
                                    body: state.body_for(items.is_empty()),
                                    on_retry: move |_| list.refresh(),
                                    empty_message: "Belum ada dokumen",
                                    for (index, row) in items.into_iter().enumerate() {
                                        AsetBmnRow {
                                            key: "{index}",
                                            row,
                                            on_edit: move |r: AsetBmn| form.open_edit(r.id),
                                            on_delete: move |r: AsetBmn| {
                                                list.ask_delete(r.id, format!("{} {}", r.jenis_laporan, r.tahun));
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            {list.delete_dialog()}
            {form.sheet(list, "Dokumen BMN", rsx! { AsetBmnFields { form } })}
        }
    }
}

#[component]
fn AsetBmnRow(
    row: AsetBmn,
    on_edit: EventHandler<AsetBmn>,
    on_delete: EventHandler<AsetBmn>,
) -> Element {
    let (edited, deleted) = (row.clone(), row.clone());

    rsx! {
        DataTableRow {
            DataTableCell { "{row.jenis_laporan}" }
            DataTableCell { "{row.tahun}" }
            DataTableCell {
                DocumentLink { href: row.link_dokumen.clone() }
            }
            DataTableCell {
                RowActions {
                    on_edit: move |_| on_edit.call(edited.clone()),
                    on_delete: move |_| on_delete.call(deleted.clone()),
                }
            }
        }
    }
}

#[component]
fn AsetBmnFields(form: RecordForm<AsetBmn>) -> Element {
    let draft = form.draft.read();
    let options: Vec<SelectOption> = std::iter::once(SelectOption::new("", "Pilih jenis laporan"))
        .chain(JENIS_LAPORAN_BMN.iter().map(|jenis| SelectOption::new(jenis, *jenis)))
        .collect();

    rsx! {
        YearField {
            label: "Tahun",
            value: draft.tahun,
            onchange: move |year| form.edit(|r| r.tahun = year),
        }
        FormSelect {
            label: "Jenis Laporan",
            value: draft.jenis_laporan.clone(),
            options,
            onchange: move |jenis: String| form.edit(|r| r.jenis_laporan = jenis),
        }
        FieldError { error: form.error("jenis_laporan") }
        AttachmentField { form, spec: DOCUMENT_FILE, current: draft.link_dokumen.clone() }
    }
}
