use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::query::Filters;
use crate::resource::{FilterSpec, Resource, SEARCH_FILTER, YEAR_FILTER};

/// Kind of wealth report filed by an official.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JenisLaporan {
    #[default]
    #[serde(rename = "LHKPN")]
    Lhkpn,
    #[serde(rename = "SPT Tahunan")]
    SptTahunan,
}

impl JenisLaporan {
    pub const ALL: [JenisLaporan; 2] = [JenisLaporan::Lhkpn, JenisLaporan::SptTahunan];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lhkpn => "LHKPN",
            Self::SptTahunan => "SPT Tahunan",
        }
    }
}

impl fmt::Display for JenisLaporan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wealth disclosure (LHKPN) or annual tax return (SPT) record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct LhkpnReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "NIP wajib diisi"))]
    pub nip: String,
    #[validate(length(min = 1, message = "Nama wajib diisi"))]
    pub nama: String,
    #[validate(length(min = 1, message = "Jabatan wajib diisi"))]
    pub jabatan: String,
    #[validate(range(min = 2000, message = "Tahun wajib diisi"))]
    pub tahun: i32,
    pub jenis_laporan: JenisLaporan,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tanggal_lapor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Link tanda terima harus berupa URL"))]
    pub link_tanda_terima: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Link dokumen pendukung harus berupa URL"))]
    pub link_dokumen_pendukung: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

pub const JENIS_FILTER: FilterSpec = FilterSpec::select("jenis", "Jenis Laporan");

impl Resource for LhkpnReport {
    const PATH: &'static str = "lhkpn";
    const TITLE: &'static str = "LHKPN & SPT Tahunan";
    const FILTERS: &'static [FilterSpec] = &[YEAR_FILTER, JENIS_FILTER, SEARCH_FILTER];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn default_filters(_current_year: i32) -> Filters {
        Filters::new()
    }
}
