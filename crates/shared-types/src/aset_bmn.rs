use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::resource::{AttachmentSpec, FilterSpec, Resource, DOCUMENT_FILE, YEAR_FILTER};

/// Report sections of the BMN screen: `(title, jenis_laporan prefix)`.
pub const BMN_SECTIONS: &[(&str, &str)] = &[
    ("Laporan Posisi BMN Di Neraca", "Laporan Posisi BMN Di Neraca"),
    (
        "Laporan Barang Kuasa Pengguna (Persediaan)",
        "Laporan Barang Kuasa Pengguna",
    ),
    ("Laporan Kondisi Barang", "Laporan Kondisi Barang"),
];

/// Report types offered when uploading a BMN document.
pub const JENIS_LAPORAN_BMN: &[&str] = &[
    "Laporan Posisi BMN Di Neraca Semester I",
    "Laporan Posisi BMN Di Neraca Semester II",
    "Laporan Posisi BMN Di Neraca Tahunan",
    "Laporan Barang Kuasa Pengguna (Persediaan) Semester I",
    "Laporan Barang Kuasa Pengguna (Persediaan) Semester II",
    "Laporan Barang Kuasa Pengguna (Persediaan) Tahunan",
    "Laporan Kondisi Barang",
];


/// State-owned asset (Barang Milik Negara) report document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct AsetBmn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(range(min = 2000, message = "Tahun wajib diisi"))]
    pub tahun: i32,
    #[validate(length(min = 1, message = "Jenis laporan wajib diisi"))]
    pub jenis_laporan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_dokumen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Resource for AsetBmn {
    const PATH: &'static str = "aset-bmn";
    const TITLE: &'static str = "Aset & Inventaris BMN";
    const FILTERS: &'static [FilterSpec] = &[YEAR_FILTER];
    const PAGINATED: bool = false;
    const ATTACHMENTS: &'static [AttachmentSpec] = &[DOCUMENT_FILE];

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Documents belonging to the section whose report type starts with `prefix`.
pub fn section_items<'a>(items: &'a [AsetBmn], prefix: &str) -> Vec<&'a AsetBmn> {
    items
        .iter()
        .filter(|item| item.jenis_laporan.starts_with(prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(jenis: &str) -> AsetBmn {
        AsetBmn {
            tahun: 2024,
            jenis_laporan: jenis.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn sections_group_by_prefix() {
        let items = vec![
            doc("Laporan Kondisi Barang"),
            doc("Laporan Posisi BMN Di Neraca Semester I"),
            doc("Laporan Posisi BMN Di Neraca Tahunan"),
        ];
        assert_eq!(section_items(&items, BMN_SECTIONS[0].1).len(), 2);
        assert_eq!(section_items(&items, BMN_SECTIONS[1].1).len(), 0);
        assert_eq!(section_items(&items, BMN_SECTIONS[2].1).len(), 1);
    }

    #[test]
    fn every_report_type_belongs_to_a_section() {
        for jenis in JENIS_LAPORAN_BMN {
            assert!(BMN_SECTIONS.iter().any(|(_, prefix)| jenis.starts_with(prefix)));
        }
    }
}
