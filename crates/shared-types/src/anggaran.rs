use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::resource::{AttachmentSpec, FilterSpec, Resource, DOCUMENT_FILE, MONTH_FILTER, YEAR_FILTER};

pub const DIPA_FILTER: FilterSpec = FilterSpec::select("dipa", "DIPA");

/// Spending categories available under each DIPA.
pub const KATEGORI_BY_DIPA: &[(&str, &[&str])] = &[
    ("DIPA 01", &["Belanja Pegawai", "Belanja Barang", "Belanja Modal"]),
    (
        "DIPA 04",
        &["POSBAKUM", "Pembebasan Biaya Perkara", "Sidang Di Luar Gedung"],
    ),
];

/// Categories for a DIPA code, empty for unknown codes.
pub fn categories_for(dipa: &str) -> &'static [&'static str] {
    KATEGORI_BY_DIPA
        .iter()
        .find(|(code, _)| *code == dipa)
        .map(|(_, cats)| *cats)
        .unwrap_or(&[])
}

/// Amounts arrive as JSON numbers or as decimal strings ("1500000.00").
pub(crate) fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn de_opt_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "de_amount")] f64);

    Option::<Wrapper>::deserialize(deserializer).map(|w| w.map(|Wrapper(n)| n))
}

/// Monthly budget realization for one DIPA category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct RealisasiAnggaran {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "DIPA wajib dipilih"))]
    pub dipa: String,
    #[validate(length(min = 1, message = "Pilih Kategori terlebih dahulu"))]
    pub kategori: String,
    /// 1-12; absent for the yearly summary row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 12, message = "Bulan tidak valid"))]
    pub bulan: Option<u32>,
    #[serde(deserialize_with = "de_amount")]
    pub pagu: f64,
    #[serde(deserialize_with = "de_amount")]
    #[validate(range(min = 0.0, message = "Realisasi tidak boleh negatif"))]
    pub realisasi: f64,
    #[serde(
        default,
        deserialize_with = "de_opt_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub sisa: Option<f64>,
    #[serde(
        default,
        deserialize_with = "de_opt_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub persentase: Option<f64>,
    #[validate(range(min = 2000, message = "Tahun wajib diisi"))]
    pub tahun: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keterangan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_dokumen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RealisasiAnggaran {
    /// Unspent budget; the backend value wins when present.
    pub fn remaining(&self) -> f64 {
        self.sisa.unwrap_or(self.pagu - self.realisasi)
    }

    /// Realization as a percentage of the ceiling, 0 when no ceiling is set.
    pub fn percentage(&self) -> f64 {
        if let Some(p) = self.persentase {
            return p;
        }
        if self.pagu <= 0.0 {
            0.0
        } else {
            self.realisasi / self.pagu * 100.0
        }
    }
}

impl Resource for RealisasiAnggaran {
    const PATH: &'static str = "anggaran";
    const TITLE: &'static str = "Realisasi Anggaran";
    const FILTERS: &'static [FilterSpec] = &[YEAR_FILTER, DIPA_FILTER, MONTH_FILTER];
    const ATTACHMENTS: &'static [AttachmentSpec] = &[DOCUMENT_FILE];

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Budget ceiling for one DIPA category and year.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct PaguAnggaran {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "DIPA wajib dipilih"))]
    pub dipa: String,
    #[validate(length(min = 1, message = "Kategori wajib dipilih"))]
    pub kategori: String,
    #[serde(deserialize_with = "de_amount")]
    #[validate(range(min = 0.0, message = "Pagu tidak boleh negatif"))]
    pub jumlah_pagu: f64,
    #[validate(range(min = 2000, message = "Tahun wajib diisi"))]
    pub tahun: i32,
}

impl Resource for PaguAnggaran {
    const PATH: &'static str = "pagu";
    const TITLE: &'static str = "Pagu Anggaran";
    const FILTERS: &'static [FilterSpec] = &[YEAR_FILTER, DIPA_FILTER];
    const PAGINATED: bool = false;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Ceiling configured for a DIPA category, 0 when none is set.
pub fn pagu_for(list: &[PaguAnggaran], dipa: &str, kategori: &str) -> f64 {
    list.iter()
        .find(|p| p.dipa == dipa && p.kategori == kategori)
        .map(|p| p.jumlah_pagu)
        .unwrap_or(0.0)
}
