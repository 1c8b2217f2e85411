use dioxus::prelude::*;
use shared_types::{current_year, format_tanggal_opt, ItsbatNikah, Resource, CASE_FILE, YEAR_FILTER};
use shared_ui::{
    Card, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    Input, PageHeader, PaginationBar, SearchBar,
};

use super::cells::{AddButton, DocumentLink, ListRows, RowActions};
use super::filters::YearFilter;
use super::panggilan::NOMOR_PERKARA_HINT;
use crate::forms::{opt_text, text_opt, use_record_form, AttachmentField, RecordForm, YearField};
use crate::hooks::use_resource_list;
use crate::Registry;

const COLUMNS: usize = 6;

#[component]
pub fn ItsbatList() -> Element {
    let list = use_resource_list::<ItsbatNikah>();
    let form = use_record_form::<ItsbatNikah>();
    let registry = use_context::<Registry>();
    let state = list.state.read();

    rsx! {
        div { class: "container",
            PageHeader {
                title: ItsbatNikah::TITLE.to_string(),
                description: "Pengumuman permohonan pengesahan nikah",
                AddButton {
                    onclick: move |_| form.open_create(ItsbatNikah {
                        tahun_perkara: current_year(),
                        ..ItsbatNikah::default()
                    }),
                }
            }

            SearchBar { busy: state.loading,
                YearFilter {
                    value: state.filters.select_value(YEAR_FILTER.name),
                    onchange: move |v| list.set_filter(YEAR_FILTER.name, v),
                }
            }

            Card {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Nomor Perkara" }
                        DataTableColumn { "Pemohon" }
                        DataTableColumn { "Tanggal Pengumuman" }
                        DataTableColumn { "Tanggal Sidang" }
                        DataTableColumn { "Detail" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        ListRows {
                            columns: COLUMNS,
                            body: state.body(),
                            on_retry: move |_| list.refresh(),
                            for (index, row) in state.items.iter().cloned().enumerate() {
                                ItsbatRow {
                                    key: "{index}",
                                    row,
                                    on_edit: move |r: ItsbatNikah| form.open_edit(r.id),
                                    on_delete: move |r: ItsbatNikah| list.ask_delete(r.id, r.nomor_perkara),
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
            {form.sheet(list, "Itsbat Nikah", rsx! { ItsbatFields { form } })}
        }
    }
}

#[component]
fn ItsbatRow(
    row: ItsbatNikah,
    on_edit: EventHandler<ItsbatNikah>,
    on_delete: EventHandler<ItsbatNikah>,
) -> Element {
    let (edited, deleted) = (row.clone(), row.clone());
    let applicants = row.applicants();

    rsx! {
        DataTableRow {
            DataTableCell { "{row.nomor_perkara}" }
            DataTableCell { "{applicants}" }
            DataTableCell { {format_tanggal_opt(row.tanggal_pengumuman.as_deref())} }
            DataTableCell { {format_tanggal_opt(row.tanggal_sidang.as_deref())} }
            DataTableCell {
                DocumentLink { href: row.link_detail.clone(), label: "Detail" }
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
fn ItsbatFields(form: RecordForm<ItsbatNikah>) -> Element {
    let draft = form.draft.read();

    rsx! {
        YearField {
            label: "Tahun Perkara",
            value: draft.tahun_perkara,
            onchange: move |year| form.edit(|r| r.tahun_perkara = year),
        }
        Input {
            label: "Nomor Perkara",
            required: true,
            placeholder: NOMOR_PERKARA_HINT.to_string(),
            value: draft.nomor_perkara.clone(),
            error: form.error("nomor_perkara"),
            on_input: move |v| form.edit(|r| r.nomor_perkara = v),
        }
        Input {
            label: "Pemohon I (Suami)",
            required: true,
            value: draft.pemohon_1.clone(),
            error: form.error("pemohon_1"),
            on_input: move |v| form.edit(|r| r.pemohon_1 = v),
        }
        Input {
            label: "Pemohon II (Istri)",
            required: true,
            value: draft.pemohon_2.clone(),
            error: form.error("pemohon_2"),
            on_input: move |v| form.edit(|r| r.pemohon_2 = v),
        }
        div { class: "sheet-row",
            Input {
                label: "Tanggal Pengumuman",
                input_type: "date",
                value: opt_text(&draft.tanggal_pengumuman),
                on_input: move |v| form.edit(|r| r.tanggal_pengumuman = text_opt(v)),
            }
            Input {
                label: "Tanggal Sidang",
                input_type: "date",
                value: opt_text(&draft.tanggal_sidang),
                on_input: move |v| form.edit(|r| r.tanggal_sidang = text_opt(v)),
            }
        }
        Input {
            label: "Link Detail",
            input_type: "url",
            value: opt_text(&draft.link_detail),
            error: form.error("link_detail"),
            on_input: move |v| form.edit(|r| r.link_detail = text_opt(v)),
        }
        AttachmentField { form, spec: CASE_FILE, current: draft.link_detail.clone() }
    }
}
