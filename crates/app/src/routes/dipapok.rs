use dioxus::prelude::*;
use shared_types::{
    current_year, format_tanggal, DipaPok, Resource, DIPA_FILE, POK_FILE, SEARCH_FILTER,
    YEAR_FILTER,
};
use shared_ui::{
    Card, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    Input, PageHeader, PaginationBar, SearchBar,
};

use super::cells::{AddButton, DocumentLink, ListRows, RowActions};
use super::filters::{SearchFilter, YearFilter};
use crate::format_helpers::format_rupiah;
use crate::forms::{amount_text, parse_amount, use_record_form, AttachmentField, RecordForm, YearField};
use crate::hooks::use_resource_list;
use crate::Registry;

const COLUMNS: usize = 8;

#[component]
pub fn DipaPokList() -> Element {
    let list = use_resource_list::<DipaPok>();
    let form = use_record_form::<DipaPok>();
    let registry = use_context::<Registry>();
    let state = list.state.read();

    rsx! {
        div { class: "container",
            PageHeader {
                title: DipaPok::TITLE.to_string(),
                description: "Dokumen DIPA dan Petunjuk Operasional Kegiatan",
                AddButton {
                    onclick: move |_| form.open_create(DipaPok {
                        thn_dipa: current_year(),
                        ..DipaPok::default()
                    }),
                }
            }

            SearchBar { busy: state.loading,
                YearFilter {
                    value: state.filters.select_value(YEAR_FILTER.name),
                    onchange: move |v| list.set_filter(YEAR_FILTER.name, v),
                }
                SearchFilter {
                    placeholder: "Revisi atau jenis DIPA...",
                    onsearch: move |v| list.set_filter(SEARCH_FILTER.name, v),
                }
            }

            Card {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Tahun" }
                        DataTableColumn { "Revisi" }
                        DataTableColumn { "Jenis" }
                        DataTableColumn { "Tanggal" }
                        DataTableColumn { numeric: true, "Alokasi" }
                        DataTableColumn { "DIPA" }
                        DataTableColumn { "POK" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        ListRows {
                            columns: COLUMNS,
                            body: state.body(),
                            on_retry: move |_| list.refresh(),
                            for (index, row) in state.items.iter().cloned().enumerate() {
                                DipaPokRow {
                                    key: "{index}",
                                    row,
                                    on_edit: move |r: DipaPok| form.open_edit(r.id),
                                    on_delete: move |r: DipaPok| {
                                        list.ask_delete(r.id, format!("DIPA {} revisi {}", r.thn_dipa, r.revisi_dipa));
                                    },
                                }
                            }
                        }
                    }
                }
            }

            PaginationBar {
                meta: state.pagination,
                delta: registry.settings.page_delta,
                disabled: state.loading,
                on_page: move |page| list.go_to_page(page),
            }

            {list.delete_dialog()}
            {form.sheet(list, "DIPA & POK", rsx! { DipaPokFields { form } })}
        }
    }
}

#[component]
fn DipaPokRow(
    row: DipaPok,
    on_edit: EventHandler<DipaPok>,
    on_delete: EventHandler<DipaPok>,
) -> Element {
    let (edited, deleted) = (row.clone(), row.clone());
    let tanggal = format_tanggal(&row.tgl_dipa);

    rsx! {
        DataTableRow {
            DataTableCell { "{row.thn_dipa}" }
            DataTableCell { "{row.revisi_dipa}" }
            DataTableCell { "{row.jns_dipa}" }
            DataTableCell { "{tanggal}" }
            DataTableCell { numeric: true, {format_rupiah(row.alokasi_dipa)} }
            DataTableCell {
                DocumentLink { href: row.doc_dipa.clone(), label: "DIPA" }
            }
            DataTableCell {
                DocumentLink { href: row.doc_pok.clone(), label: "POK" }
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
fn DipaPokFields(form: RecordForm<DipaPok>) -> Element {
    let draft = form.draft.read();

    rsx! {
        div { class: "sheet-row",
            YearField {
                label: "Tahun DIPA",
                value: draft.thn_dipa,
                onchange: move |year| form.edit(|r| r.thn_dipa = year),
            }
            Input {
                label: "Tanggal DIPA",
                input_type: "date",
                required: true,
                value: draft.tgl_dipa.clone(),
                error: form.error("tgl_dipa"),
                on_input: move |v| form.edit(|r| r.tgl_dipa = v),
            }
        }
        Input {
            label: "Revisi DIPA",
            required: true,
            placeholder: "Contoh: DIPA Pertama, DIPA Kedua...",
            value: draft.revisi_dipa.clone(),
            error: form.error("revisi_dipa"),
            on_input: move |v| form.edit(|r| r.revisi_dipa = v),
        }
        Input {
            label: "Jenis DIPA",
            required: true,
            placeholder: "Contoh: DIPA 01 - Belanja Pegawai...",
            value: draft.jns_dipa.clone(),
            error: form.error("jns_dipa"),
            on_input: move |v| form.edit(|r| r.jns_dipa = v),
        }
        Input {
            label: "Alokasi (Rp)",
            input_type: "number",
            required: true,
            value: amount_text(draft.alokasi_dipa),
            on_input: move |v: String| form.edit(|r| r.alokasi_dipa = parse_amount(&v)),
        }
        AttachmentField { form, spec: DIPA_FILE, current: draft.doc_dipa.clone() }
        AttachmentField { form, spec: POK_FILE, current: draft.doc_pok.clone() }
    }
}
