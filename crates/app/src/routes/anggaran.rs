use dioxus::prelude::*;
use shared_types::{
    categories_for, current_month, current_year, month_name, pagu_for, Filters, ListQuery,
    PaguAnggaran, RealisasiAnggaran, Resource, DIPA_FILTER, DOCUMENT_FILE, KATEGORI_BY_DIPA,
    MONTH_FILTER, MONTH_NAMES, YEAR_FILTER,
};
use shared_ui::{
    Card, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    FieldError, FormSelect, Input, PageHeader, PaginationBar, SearchBar, SelectOption, Textarea,
};

use super::cells::{AddButton, DocumentLink, ListRows, RowActions};
use super::filters::{DipaFilter, MonthFilter, YearFilter};
use crate::format_helpers::{format_percent, format_rupiah};
use crate::forms::{
    amount_text, opt_text, parse_amount, text_opt, use_record_form, AttachmentField, RecordForm,
    YearField,
};
use crate::hooks::use_resource_list;
use crate::Registry;

const COLUMNS: usize = 9;

#[component]
pub fn AnggaranList() -> Element {
    let list = use_resource_list::<RealisasiAnggaran>();
    let form = use_record_form::<RealisasiAnggaran>();
    let registry = use_context::<Registry>();
    let state = list.state.read();

    rsx! {
        div { class: "container",
            PageHeader {
                title: RealisasiAnggaran::TITLE.to_string(),
                description: "Realisasi belanja per DIPA dan kategori",
                AddButton {
                    onclick: move |_| form.open_create(RealisasiAnggaran {
                        dipa: KATEGORI_BY_DIPA[0].0.to_string(),
                        bulan: Some(current_month()),
                        tahun: current_year(),
                        ..RealisasiAnggaran::default()
                    }),
                }
            }

            SearchBar { busy: state.loading,
                YearFilter {
                    value: state.filters.select_value(YEAR_FILTER.name),
                    onchange: move |v| list.set_filter(YEAR_FILTER.name, v),
                }
                DipaFilter {
                    value: state.filters.select_value(DIPA_FILTER.name),
                    onchange: move |v| list.set_filter(DIPA_FILTER.name, v),
                }
                MonthFilter {
                    value: state.filters.select_value(MONTH_FILTER.name),
                    onchange: move |v| list.set_filter(MONTH_FILTER.name, v),
                }
            }

            Card {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "DIPA" }
                        DataTableColumn { "Kategori" }
                        DataTableColumn { "Bulan" }
                        DataTableColumn { numeric: true, "Pagu" }
                        DataTableColumn { numeric: true, "Realisasi" }
                        DataTableColumn { numeric: true, "Sisa" }
                        DataTableColumn { numeric: true, "%" }
                        DataTableColumn { "Dokumen" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        ListRows {
                            columns: COLUMNS,
                            body: state.body(),
                            on_retry: move |_| list.refresh(),
                            for (index, row) in state.items.iter().cloned().enumerate() {
                                AnggaranRow {
                                    key: "{index}",
                                    row,
                                    on_edit: move |r: RealisasiAnggaran| form.open_edit(r.id),
                                    on_delete: move |r: RealisasiAnggaran| {
                                        list.ask_delete(r.id, format!("{} {}", r.dipa, r.kategori));
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
            {form.sheet(list, "Realisasi Bulanan", rsx! { AnggaranFields { form } })}
        }
    }
}

#[component]
fn AnggaranRow(
    row: RealisasiAnggaran,
    on_edit: EventHandler<RealisasiAnggaran>,
    on_delete: EventHandler<RealisasiAnggaran>,
) -> Element {
    let (edited, deleted) = (row.clone(), row.clone());
    let bulan = row.bulan.and_then(month_name).unwrap_or("-");

    rsx! {
        DataTableRow {
            DataTableCell { "{row.dipa}" }
            DataTableCell { "{row.kategori}" }
            DataTableCell { "{bulan}" }
            DataTableCell { numeric: true, {format_rupiah(row.pagu)} }
            DataTableCell { numeric: true, {format_rupiah(row.realisasi)} }
            DataTableCell { numeric: true, {format_rupiah(row.remaining())} }
            DataTableCell { numeric: true, {format_percent(row.percentage())} }
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

/// Monthly realisation form. The ceiling is looked up from the Pagu list of
/// the chosen year and follows the DIPA and category selection.
#[component]
fn AnggaranFields(form: RecordForm<RealisasiAnggaran>) -> Element {
    let registry = use_context::<Registry>();
    let mut ceilings = use_signal(Vec::<PaguAnggaran>::new);
    let tahun = use_memo(move || form.draft.read().tahun);

    use_effect(move || {
        let tahun = tahun();
        let client = registry.client.clone();
        spawn(async move {
            let query = ListQuery::first_page(Filters::new().with(YEAR_FILTER.name, tahun));
            match client.list::<PaguAnggaran>(&query).await {
                Ok(page) => {
                    form.edit(|r| r.pagu = pagu_for(&page.items, &r.dipa, &r.kategori));
                    ceilings.set(page.items);
                }
                Err(e) => tracing::warn!(tahun, error = %e, "Pagu for the form could not be loaded"),
            }
        });
    });

    let draft = form.draft.read();
    let dipa_options: Vec<SelectOption> = KATEGORI_BY_DIPA
        .iter()
        .map(|(dipa, _)| SelectOption::new(dipa, *dipa))
        .collect();
    let kategori_options: Vec<SelectOption> = std::iter::once(SelectOption::new("", "Pilih kategori"))
        .chain(categories_for(&draft.dipa).iter().map(|k| SelectOption::new(k, *k)))
        .collect();
    let month_options: Vec<SelectOption> = MONTH_NAMES
        .iter()
        .enumerate()
        .skip(1)
        .map(|(month, name)| SelectOption::new(month, *name))
        .collect();
    let pagu = format_rupiah(draft.pagu);
    let bulan = draft.bulan.map(|b| b.to_string()).unwrap_or_default();

    rsx! {
        div { class: "sheet-row",
            FormSelect {
                label: "DIPA",
                value: draft.dipa.clone(),
                options: dipa_options,
                onchange: move |dipa: String| {
                    let list = ceilings.read();
                    form.edit(|r| {
                        if !categories_for(&dipa).contains(&r.kategori.as_str()) {
                            r.kategori.clear();
                        }
                        r.pagu = pagu_for(&list, &dipa, &r.kategori);
                        r.dipa = dipa;
                    });
                },
            }
            FormSelect {
                label: "Kategori",
                value: draft.kategori.clone(),
                options: kategori_options,
                onchange: move |kategori: String| {
                    let list = ceilings.read();
                    form.edit(|r| {
                        r.pagu = pagu_for(&list, &r.dipa, &kategori);
                        r.kategori = kategori;
                    });
                },
            }
        }
        FieldError { error: form.error("kategori") }
        div { class: "sheet-row",
            FormSelect {
                label: "Bulan",
                value: bulan,
                options: month_options,
                onchange: move |v: String| form.edit(|r| r.bulan = v.parse().ok()),
            }
            YearField {
                label: "Tahun",
                value: draft.tahun,
                onchange: move |year| form.edit(|r| r.tahun = year),
            }
        }
        p { class: "sheet-note", "Pagu kategori ini: {pagu}" }
        Input {
            label: "Realisasi (Rp)",
            input_type: "number",
            required: true,
            value: amount_text(draft.realisasi),
            error: form.error("realisasi"),
            on_input: move |v: String| form.edit(|r| r.realisasi = parse_amount(&v)),
        }
        Textarea {
            label: "Keterangan",
            value: opt_text(&draft.keterangan),
            on_input: move |v| form.edit(|r| r.keterangan = text_opt(v)),
        }
        AttachmentField { form, spec: DOCUMENT_FILE, current: draft.link_dokumen.clone() }
    }
}
