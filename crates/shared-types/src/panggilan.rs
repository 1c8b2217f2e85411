use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::query::Filters;
use crate::resource::{AttachmentSpec, FilterSpec, Resource, CASE_FILE, SEARCH_FILTER, YEAR_FILTER};

/// Summons for a party whose whereabouts are unknown (Panggilan Ghaib).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct Panggilan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(range(min = 2000, message = "Tahun perkara wajib diisi"))]
    pub tahun_perkara: i32,
    #[validate(length(min = 1, message = "Nomor perkara wajib diisi"))]
    pub nomor_perkara: String,
    #[validate(length(min = 1, message = "Nama yang dipanggil wajib diisi"))]
    pub nama_dipanggil: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alamat_asal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panggilan_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panggilan_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panggilan_ikrar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tanggal_sidang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Link surat harus berupa URL"))]
    pub link_surat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keterangan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Resource for Panggilan {
    const PATH: &'static str = "panggilan";
    const TITLE: &'static str = "Panggilan Ghaib";
    const FILTERS: &'static [FilterSpec] = &[YEAR_FILTER];
    const ATTACHMENTS: &'static [AttachmentSpec] = &[CASE_FILE];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn default_filters(_current_year: i32) -> Filters {
        Filters::new()
    }
}

/// Summons delivered through the e-Court system; adds a third call date.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct PanggilanEcourt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(range(min = 2000, message = "Tahun perkara wajib diisi"))]
    pub tahun_perkara: i32,
    #[validate(length(min = 1, message = "Nomor perkara wajib diisi"))]
    pub nomor_perkara: String,
    #[validate(length(min = 1, message = "Nama yang dipanggil wajib diisi"))]
    pub nama_dipanggil: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alamat_asal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panggilan_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panggilan_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panggilan_3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panggilan_ikrar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tanggal_sidang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Link surat harus berupa URL"))]
    pub link_surat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keterangan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl PanggilanEcourt {
    /// Most recent summons date that has been filled in.
    pub fn latest_call(&self) -> Option<&str> {
        [&self.panggilan_3, &self.panggilan_2, &self.panggilan_1]
            .into_iter()
            .find_map(|d| d.as_deref().filter(|s| !s.is_empty()))
    }
}

impl Resource for PanggilanEcourt {
    const PATH: &'static str = "panggilan-ecourt";
    const TITLE: &'static str = "Panggilan e-Court";
    const FILTERS: &'static [FilterSpec] = &[YEAR_FILTER, SEARCH_FILTER];
    const ATTACHMENTS: &'static [AttachmentSpec] = &[CASE_FILE];

    fn id(&self) -> Option<i64> {
        self.id
    }
}
