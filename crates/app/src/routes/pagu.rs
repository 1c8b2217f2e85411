use dioxus::prelude::*;
use shared_types::{
    pagu_for, PaguAnggaran, Resource, ALL_OPTION, DIPA_FILTER, KATEGORI_BY_DIPA, YEAR_FILTER,
};
use shared_ui::{
    Button, ButtonSize, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Input, PageHeader, SearchBar,
};

use super::cells::{ListRows, RowActions};
use super::filters::{DipaFilter, YearFilter};
use crate::format_helpers::format_rupiah;
use crate::forms::{amount_text, parse_amount};
use crate::hooks::use_resource_list;
use crate::notify::use_toast_queue;
use crate::Registry;

const COLUMNS: usize = 5;

/// Budget ceilings. The endpoint returns every row for the filters at once,
/// so there is no pagination footer.
#[component]
pub fn PaguList() -> Element {
    let list = use_resource_list::<PaguAnggaran>();
    let state = list.state.read();
    let total: f64 = state.items.iter().map(|p| p.jumlah_pagu).sum();
    let tahun: Option<i32> = state
        .filters
        .get(YEAR_FILTER.name)
        .and_then(|v| v.parse().ok());
    let rows = ceiling_rows(&state.filters.select_value(DIPA_FILTER.name));

    rsx! {
        div { class: "container",
            PageHeader {
                title: PaguAnggaran::TITLE.to_string(),
                description: "Pagu per DIPA dan kategori belanja",
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
            }

            Card {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Tahun" }
                        DataTableColumn { "DIPA" }
                        DataTableColumn { "Kategori" }
                        DataTableColumn { numeric: true, "Jumlah Pagu" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        ListRows {
                            columns: COLUMNS,
                            body: state.body(),
                            on_retry: move |_| list.refresh(),
                            empty_message: "Pagu belum diatur untuk tahun ini",
                            for (index, row) in state.items.iter().cloned().enumerate() {
                                PaguRow {
                                    key: "{index}",
                                    row,
                                    on_delete: move |r: PaguAnggaran| {
                                        list.ask_delete(r.id, format!("pagu {} {}", r.dipa, r.kategori));
                                    },
                                }
                            }
                            DataTableRow {
                                DataTableCell { strong { "Total" } }
                                DataTableCell { "" }
                                DataTableCell { "" }
                                DataTableCell { numeric: true, strong { {format_rupiah(total)} } }
                                DataTableCell { "" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Atur Pagu" }
                }
                CardContent {
                    match tahun {
                        Some(tahun) => rsx! {
                            div { class: "pagu-grid",
                                for (dipa, kategori) in rows {
                                    CeilingRow {
                                        key: "{tahun}-{dipa}-{kategori}",
                                        tahun,
                                        dipa,
                                        kategori,
                                        saved: pagu_for(&state.items, dipa, kategori),
                                        on_saved: move |_| list.refresh(),
                                    }
                                }
                            }
                        },
                        None => rsx! {
                            p { class: "cell-muted", "Pilih tahun untuk mengatur pagu." }
                        },
                    }
                }
            }

            {list.delete_dialog()}
        }
    }
}

#[component]
fn PaguRow(row: PaguAnggaran, on_delete: EventHandler<PaguAnggaran>) -> Element {
    let record = row.clone();

    rsx! {
        DataTableRow {
            DataTableCell { "{row.tahun}" }
            DataTableCell { "{row.dipa}" }
            DataTableCell { "{row.kategori}" }
            DataTableCell { numeric: true, {format_rupiah(row.jumlah_pagu)} }
            DataTableCell {
                RowActions { on_delete: move |_| on_delete.call(record.clone()) }
            }
        }
    }
}

/// Categories shown in the ceiling editor for the DIPA filter value.
pub fn ceiling_rows(dipa_filter: &str) -> Vec<(&'static str, &'static str)> {
    KATEGORI_BY_DIPA
        .iter()
        .filter(|(dipa, _)| dipa_filter == ALL_OPTION || *dipa == dipa_filter)
        .flat_map(|(dipa, cats)| cats.iter().map(move |k| (*dipa, *k)))
        .collect()
}

/// One ceiling of the editor. The typed amount stays local until saved; a
/// save creates or replaces the ceiling for that DIPA, category and year.
#[component]
fn CeilingRow(
    tahun: i32,
    dipa: &'static str,
    kategori: &'static str,
    saved: f64,
    on_saved: EventHandler<()>,
) -> Element {
    let registry = use_context::<Registry>();
    let notices = use_toast_queue();
    let mut typed = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let value = typed().unwrap_or_else(|| amount_text(saved));
    let changed = typed().is_some_and(|t| parse_amount(&t) != saved);

    let save = move |_: MouseEvent| {
        let pagu = PaguAnggaran {
            id: None,
            dipa: dipa.to_string(),
            kategori: kategori.to_string(),
            jumlah_pagu: typed.peek().as_deref().map(parse_amount).unwrap_or(saved),
            tahun,
        };
        let client = registry.client.clone();
        let notices = notices.clone();
        saving.set(true);
        spawn(async move {
            match client.upsert_pagu(&pagu).await {
                Ok(_) => {
                    notices.success(format!("Pagu {kategori} diperbarui"));
                    typed.set(None);
                    on_saved.call(());
                }
                Err(e) => {
                    tracing::warn!(tahun, dipa, kategori, error = %e, "Pagu update failed");
                    notices.error(&e);
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "pagu-row",
            span { class: "pagu-dipa", "{dipa}" }
            span { class: "pagu-kategori", "{kategori}" }
            Input {
                input_type: "number",
                value,
                on_input: move |v: String| typed.set(Some(v)),
            }
            Button {
                size: ButtonSize::Small,
                busy: saving(),
                disabled: !changed,
                onclick: save,
                "Simpan"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn editor_lists_every_category_without_dipa_filter() {
        let rows = ceiling_rows(ALL_OPTION);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], ("DIPA 01", "Belanja Pegawai"));
        assert_eq!(rows[5], ("DIPA 04", "Sidang Di Luar Gedung"));
    }

    #[test]
    fn editor_follows_dipa_filter() {
        let rows = ceiling_rows("DIPA 04");
        assert_eq!(
            rows,
            vec![
                ("DIPA 04", "POSBAKUM"),
                ("DIPA 04", "Pembebasan Biaya Perkara"),
                ("DIPA 04", "Sidang Di Luar Gedung"),
            ]
        );
        assert!(ceiling_rows("DIPA 99").is_empty());
    }
}
