use dioxus::prelude::*;
use shared_types::{
    current_year, format_tanggal_opt, JenisLaporan, LhkpnReport, Resource, JENIS_FILTER,
    SEARCH_FILTER, YEAR_FILTER,
};
use shared_ui::{
    Badge, BadgeVariant, Card, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, FormSelect, Input, PageHeader, PaginationBar, SearchBar,
    SelectOption,
};

use super::cells::{AddButton, DocumentLink, ListRows, RowActions};
use super::filters::{JenisLaporanFilter, SearchFilter, YearFilter};
use crate::forms::{opt_text, text_opt, use_record_form, RecordForm, YearField};
use crate::hooks::use_resource_list;
use crate::Registry;

const COLUMNS: usize = 8;

#[component]
pub fn LhkpnList() -> Element {
    let list = use_resource_list::<LhkpnReport>();
    let form = use_record_form::<LhkpnReport>();
    let registry = use_context::<Registry>();
    let state = list.state.read();

    rsx! {
        div { class: "container",
            PageHeader {
                title: LhkpnReport::TITLE.to_string(),
                description: "Laporan harta kekayaan dan SPT tahunan pejabat",
                AddButton {
                    onclick: move |_| form.open_create(LhkpnReport {
                        tahun: current_year(),
                        ..LhkpnReport::default()
                    }),
                }
            }

            SearchBar { busy: state.loading,
                YearFilter {
                    value: state.filters.select_value(YEAR_FILTER.name),
                    onchange: move |v| list.set_filter(YEAR_FILTER.name, v),
                }
                JenisLaporanFilter {
                    value: state.filters.select_value(JENIS_FILTER.name),
                    onchange: move |v| list.set_filter(JENIS_FILTER.name, v),
                }
                SearchFilter {
                    placeholder: "Nama atau NIP...",
                    onsearch: move |v| list.set_filter(SEARCH_FILTER.name, v),
                }
            }

            Card {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "NIP" }
                        DataTableColumn { "Nama" }
                        DataTableColumn { "Jabatan" }
                        DataTableColumn { "Tahun" }
                        DataTableColumn { "Jenis" }
                        DataTableColumn { "Tanggal Lapor" }
                        DataTableColumn { "Dokumen" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        ListRows {
                            columns: COLUMNS,
                            body: state.body(),
                            on_retry: move |_| list.refresh(),
                            for (index, row) in state.items.iter().cloned().enumerate() {
                                LhkpnRow {
                                    key: "{index}",
                                    row,
                                    on_edit: move |r: LhkpnReport| form.open_edit(r.id),
                                    on_delete: move |r: LhkpnReport| {
                                        list.ask_delete(r.id, format!("{} {} {}", r.jenis_laporan, r.nama, r.tahun));
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
            {form.sheet(list, "Laporan", rsx! { LhkpnFields { form } })}
        }
    }
}

#[component]
fn LhkpnRow(
    row: LhkpnReport,
    on_edit: EventHandler<LhkpnReport>,
    on_delete: EventHandler<LhkpnReport>,
) -> Element {
    let (edited, deleted) = (row.clone(), row.clone());
    let variant = match row.jenis_laporan {
        JenisLaporan::Lhkpn => BadgeVariant::Info,
        JenisLaporan::SptTahunan => BadgeVariant::Success,
    };

    rsx! {
        DataTableRow {
            DataTableCell { "{row.nip}" }
            DataTableCell { "{row.nama}" }
            DataTableCell { "{row.jabatan}" }
            DataTableCell { "{row.tahun}" }
            DataTableCell {
                Badge { variant, "{row.jenis_laporan}" }
            }
            DataTableCell { {format_tanggal_opt(row.tanggal_lapor.as_deref())} }
            DataTableCell {
                DocumentLink { href: row.link_tanda_terima.clone(), label: "Tanda Terima" }
                DocumentLink { href: row.link_dokumen_pendukung.clone(), label: "Pendukung" }
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
fn LhkpnFields(form: RecordForm<LhkpnReport>) -> Element {
    let draft = form.draft.read();
    let jenis_options: Vec<SelectOption> = JenisLaporan::ALL
        .iter()
        .map(|jenis| SelectOption::new(jenis.as_str(), jenis.as_str()))
        .collect();

    rsx! {
        div { class: "sheet-row",
            FormSelect {
                label: "Jenis Laporan",
                value: draft.jenis_laporan.as_str().to_string(),
                options: jenis_options,
                onchange: move |v: String| {
                    if let Some(jenis) = JenisLaporan::ALL.into_iter().find(|j| j.as_str() == v) {
                        form.edit(|r| r.jenis_laporan = jenis);
                    }
                },
            }
            YearField {
                label: "Tahun",
                value: draft.tahun,
                onchange: move |year| form.edit(|r| r.tahun = year),
            }
        }
        Input {
            label: "NIP",
            required: true,
            value: draft.nip.clone(),
            error: form.error("nip"),
            on_input: move |v| form.edit(|r| r.nip = v),
        }
        Input {
            label: "Nama",
            required: true,
            value: draft.nama.clone(),
            error: form.error("nama"),
            on_input: move |v| form.edit(|r| r.nama = v),
        }
        Input {
            label: "Jabatan",
            required: true,
            value: draft.jabatan.clone(),
            error: form.error("jabatan"),
            on_input: move |v| form.edit(|r| r.jabatan = v),
        }
        Input {
            label: "Tanggal Lapor",
            input_type: "date",
            value: opt_text(&draft.tanggal_lapor),
            on_input: move |v| form.edit(|r| r.tanggal_lapor = text_opt(v)),
        }
        Input {
            label: "Link Tanda Terima",
            input_type: "url",
            value: opt_text(&draft.link_tanda_terima),
            error: form.error("link_tanda_terima"),
            on_input: move |v| form.edit(|r| r.link_tanda_terima = text_opt(v)),
        }
        Input {
            label: "Link Dokumen Pendukung",
            input_type: "url",
            value: opt_text(&draft.link_dokumen_pendukung),
            error: form.error("link_dokumen_pendukung"),
            on_input: move |v| form.edit(|r| r.link_dokumen_pendukung = text_opt(v)),
        }
    }
}
