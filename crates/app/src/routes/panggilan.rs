use dioxus::prelude::*;
use shared_types::{current_year, format_tanggal_opt, Panggilan, Resource, CASE_FILE, YEAR_FILTER};
use shared_ui::{
    Card, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    Input, PageHeader, PaginationBar, SearchBar, Textarea,
};

use super::cells::{AddButton, DocumentLink, ListRows, RowActions};
use super::filters::YearFilter;
use crate::format_helpers::or_dash;
use crate::forms::{opt_text, text_opt, use_record_form, AttachmentField, RecordForm, YearField};
use crate::hooks::use_resource_list;
use crate::Registry;

/// Example shown in the case number field.
pub const NOMOR_PERKARA_HINT: &str = "Contoh: 22/Pdt.G/2025/PA.pnj";

const COLUMNS: usize = 8;

#[component]
pub fn PanggilanList() -> Element {
    let list = use_resource_list::<Panggilan>();
    let form = use_record_form::<Panggilan>();
    let registry = use_context::<Registry>();
    let state = list.state.read();

    rsx! {
        div { class: "container",
            PageHeader {
                title: Panggilan::TITLE.to_string(),
                description: "Panggilan bagi pihak yang tidak diketahui tempat tinggalnya",
                AddButton {
                    onclick: move |_| form.open_create(Panggilan {
                        tahun_perkara: current_year(),
                        ..Panggilan::default()
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
                        DataTableColumn { "Nama Dipanggil" }
                        DataTableColumn { "Alamat Asal" }
                        DataTableColumn { "Panggilan I" }
                        DataTableColumn { "Panggilan II" }
                        DataTableColumn { "Tanggal Sidang" }
                        DataTableColumn { "Surat" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        ListRows {
                            columns: COLUMNS,
                            body: state.body(),
                            on_retry: move |_| list.refresh(),
                            for (index, row) in state.items.iter().cloned().enumerate() {
                                PanggilanRow {
                                    key: "{index}",
                                    row,
                                    on_edit: move |r: Panggilan| form.open_edit(r.id),
                                    on_delete: move |r: Panggilan| list.ask_delete(r.id, r.nomor_perkara),
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
            {form.sheet(list, "Panggilan Ghaib", rsx! { PanggilanFields { form } })}
        }
    }
}

#[component]
fn PanggilanRow(
    row: Panggilan,
    on_edit: EventHandler<Panggilan>,
    on_delete: EventHandler<Panggilan>,
) -> Element {
    let (edited, deleted) = (row.clone(), row.clone());

    rsx! {
        DataTableRow {
            DataTableCell { "{row.nomor_perkara}" }
            DataTableCell { "{row.nama_dipanggil}" }
            DataTableCell { {or_dash(row.alamat_asal.as_deref())} }
            DataTableCell { {format_tanggal_opt(row.panggilan_1.as_deref())} }
            DataTableCell { {format_tanggal_opt(row.panggilan_2.as_deref())} }
            DataTableCell { {format_tanggal_opt(row.tanggal_sidang.as_deref())} }
            DataTableCell {
                DocumentLink { href: row.link_surat.clone() }
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
fn PanggilanFields(form: RecordForm<Panggilan>) -> Element {
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
            label: "Nama yang Dipanggil",
            required: true,
            value: draft.nama_dipanggil.clone(),
            error: form.error("nama_dipanggil"),
            on_input: move |v| form.edit(|r| r.nama_dipanggil = v),
        }
        Textarea {
            label: "Alamat Asal",
            value: opt_text(&draft.alamat_asal),
            on_input: move |v| form.edit(|r| r.alamat_asal = text_opt(v)),
        }
        div { class: "sheet-row",
            Input {
                label: "Panggilan I",
                input_type: "date",
                value: opt_text(&draft.panggilan_1),
                on_input: move |v| form.edit(|r| r.panggilan_1 = text_opt(v)),
            }
            Input {
                label: "Panggilan II",
                input_type: "date",
                value: opt_text(&draft.panggilan_2),
                on_input: move |v| form.edit(|r| r.panggilan_2 = text_opt(v)),
            }
        }
        div { class: "sheet-row",
            Input {
                label: "Panggilan Ikrar",
                input_type: "date",
                value: opt_text(&draft.panggilan_ikrar),
                on_input: move |v| form.edit(|r| r.panggilan_ikrar = text_opt(v)),
            }
            Input {
                label: "Tanggal Sidang",
                input_type: "date",
                value: opt_text(&draft.tanggal_sidang),
                on_input: move |v| form.edit(|r| r.tanggal_sidang = text_opt(v)),
            }
        }
        Input {
            label: "PIP",
            value: opt_text(&draft.pip),
            on_input: move |v| form.edit(|r| r.pip = text_opt(v)),
        }
        Input {
            label: "Link Surat",
            input_type: "url",
            value: opt_text(&draft.link_surat),
            error: form.error("link_surat"),
            on_input: move |v| form.edit(|r| r.link_surat = text_opt(v)),
        }
        AttachmentField { form, spec: CASE_FILE, current: draft.link_surat.clone() }
        Textarea {
            label: "Keterangan",
            value: opt_text(&draft.keterangan),
            on_input: move |v| form.edit(|r| r.keterangan = text_opt(v)),
        }
    }
}
