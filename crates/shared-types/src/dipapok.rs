use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::query::Filters;
use crate::resource::{AttachmentSpec, FilterSpec, Resource, SEARCH_FILTER, YEAR_FILTER};

/// Multipart field names for the two attachments of a DIPA/POK record.
pub const DIPA_FILE_FIELD: &str = "file_doc_dipa";
pub const POK_FILE_FIELD: &str = "file_doc_pok";

pub const DIPA_FILE: AttachmentSpec = AttachmentSpec::new(DIPA_FILE_FIELD, "Dokumen DIPA", ".pdf");
pub const POK_FILE: AttachmentSpec = AttachmentSpec::new(POK_FILE_FIELD, "Dokumen POK", ".pdf");

/// DIPA (budget allocation) and POK (work plan) document pair for a revision.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct DipaPok {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(range(min = 2000, message = "Tahun DIPA wajib diisi"))]
    pub thn_dipa: i32,
    #[validate(length(min = 1, message = "Revisi DIPA wajib diisi"))]
    pub revisi_dipa: String,
    #[validate(length(min = 1, message = "Jenis DIPA wajib diisi"))]
    pub jns_dipa: String,
    #[validate(length(min = 10, message = "Tanggal DIPA wajib diisi"))]
    pub tgl_dipa: String,
    #[serde(default, deserialize_with = "crate::anggaran::de_amount")]
    pub alokasi_dipa: f64,
    /// Download URL of the stored DIPA file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_dipa: Option<String>,
    /// Download URL of the stored POK file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_pok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Resource for DipaPok {
    const PATH: &'static str = "dipapok";
    const TITLE: &'static str = "DIPA & POK";
    const FILTERS: &'static [FilterSpec] = &[YEAR_FILTER, SEARCH_FILTER];
    const ATTACHMENTS: &'static [AttachmentSpec] = &[DIPA_FILE, POK_FILE];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn default_filters(_current_year: i32) -> Filters {
        Filters::new()
    }
}
