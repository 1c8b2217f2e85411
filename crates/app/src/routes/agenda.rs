use dioxus::prelude::*;
use shared_types::{format_tanggal, AgendaPimpinan, Resource, MONTH_FILTER, YEAR_FILTER};
use shared_ui::{
    Card, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    Input, PageHeader, PaginationBar, SearchBar, Textarea,
};

use super::cells::{AddButton, ListRows, RowActions};
use super::filters::{MonthFilter, YearFilter};
use crate::forms::{use_record_form, RecordForm};
use crate::hooks::use_resource_list;
use crate::Registry;

const COLUMNS: usize = 3;
const SUMMARY_CHARS: usize = 160;

#[component]
pub fn AgendaList() -> Element {
    let list = use_resource_list::<AgendaPimpinan>();
    let form = use_record_form::<AgendaPimpinan>();
    let registry = use_context::<Registry>();
    let state = list.state.read();

    rsx! {
        div { class: "container",
            PageHeader {
                title: AgendaPimpinan::TITLE.to_string(),
                description: "Jadwal kegiatan Ketua dan Wakil Ketua",
                AddButton { onclick: move |_| form.open_create(AgendaPimpinan::default()) }
            }

            SearchBar { busy: state.loading,
                YearFilter {
                    value: state.filters.select_value(YEAR_FILTER.name),
                    onchange: move |v| list.set_filter(YEAR_FILTER.name, v),
                }
                MonthFilter {
                    value: state.filters.select_value(MONTH_FILTER.name),
                    onchange: move |v| list.set_filter(MONTH_FILTER.name, v),
                }
            }

            Card {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Tanggal" }
                        DataTableColumn { "Agenda" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        ListRows {
                            columns: COLUMNS,
                            body: state.body(),
                            on_retry: move |_| list.refresh(),
                            empty_message: "Tidak ada agenda pada periode ini",
                            for (index, row) in state.items.iter().cloned().enumerate() {
                                AgendaRow {
                                    key: "{index}",
                                    row,
                                    on_edit: move |r: AgendaPimpinan| form.open_edit(r.id),
                                    on_delete: move |r: AgendaPimpinan| {
                                        let subject = format_tanggal(&r.tanggal_agenda);
                                        list.ask_delete(r.id, format!("agenda {subject}"));
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
            {form.sheet(list, "Agenda Pimpinan", rsx! { AgendaFields { form } })}
        }
    }
}

#[component]
fn AgendaRow(
    row: AgendaPimpinan,
    on_edit: EventHandler<AgendaPimpinan>,
    on_delete: EventHandler<AgendaPimpinan>,
) -> Element {
    let (edited, deleted) = (row.clone(), row.clone());
    let tanggal = format_tanggal(&row.tanggal_agenda);
    let summary = row.summary(SUMMARY_CHARS);

    rsx! {
        DataTableRow {
            DataTableCell { "{tanggal}" }
            DataTableCell { "{summary}" }
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
fn AgendaFields(form: RecordForm<AgendaPimpinan>) -> Element {
    let draft = form.draft.read();

    rsx! {
        Input {
            label: "Tanggal Agenda",
            input_type: "date",
            required: true,
            value: draft.tanggal_agenda.clone(),
            error: form.error("tanggal_agenda"),
            on_input: move |v| form.edit(|r| r.tanggal_agenda = v),
        }
        Textarea {
            label: "Isi Agenda",
            rows: 6,
            required: true,
            placeholder: "Kegiatan, tempat dan peserta",
            value: draft.isi_agenda.clone(),
            error: form.error("isi_agenda"),
            on_input: move |v| form.edit(|r| r.isi_agenda = v),
        }
    }
}
