use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::resource::{AttachmentSpec, FilterSpec, Resource, CASE_FILE, YEAR_FILTER};

/// Marriage validation case (Itsbat Nikah) announced before its hearing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct ItsbatNikah {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(range(min = 2000, message = "Tahun perkara wajib diisi"))]
    pub tahun_perkara: i32,
    #[validate(length(min = 1, message = "Nomor perkara wajib diisi"))]
    pub nomor_perkara: String,
    #[validate(length(min = 1, message = "Pemohon 1 wajib diisi"))]
    pub pemohon_1: String,
    #[validate(length(min = 1, message = "Pemohon 2 wajib diisi"))]
    pub pemohon_2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tanggal_pengumuman: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tanggal_sidang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Link detail harus berupa URL"))]
    pub link_detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ItsbatNikah {
    /// "Pemohon 1 & Pemohon 2", as shown in the announcement table.
    pub fn applicants(&self) -> String {
        format!("{} & {}", self.pemohon_1, self.pemohon_2)
    }
}

impl Resource for ItsbatNikah {
    const PATH: &'static str = "itsbat";
    const TITLE: &'static str = "Data Itsbat Nikah";
    const FILTERS: &'static [FilterSpec] = &[YEAR_FILTER];
    const ATTACHMENTS: &'static [AttachmentSpec] = &[CASE_FILE];

    fn id(&self) -> Option<i64> {
        self.id
    }
}
