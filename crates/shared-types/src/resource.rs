use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use validator::Validate;

use crate::query::Filters;

/// How a filter control feeds the list coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Dropdown; each change fetches immediately.
    Select,
    /// Free text; fetches after the debounce window.
    Search,
}

/// A list filter accepted by a resource endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterSpec {
    pub const fn select(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FilterKind::Select,
        }
    }

    pub const fn search(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FilterKind::Search,
        }
    }
}

/// A file field a resource accepts next to its text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentSpec {
    /// Multipart field name.
    pub field: &'static str,
    pub label: &'static str,
    /// `accept` list for the file picker.
    pub accept: &'static str,
}

impl AttachmentSpec {
    pub const fn new(field: &'static str, label: &'static str, accept: &'static str) -> Self {
        Self {
            field,
            label,
            accept,
        }
    }
}

/// Scanned letter or decision attached to a case record.
pub const CASE_FILE: AttachmentSpec = AttachmentSpec::new(
    "file_upload",
    "Upload Berkas",
    ".pdf,.doc,.docx,.jpg,.jpeg,.png",
);
/// Supporting document of a budget or asset report.
pub const DOCUMENT_FILE: AttachmentSpec = AttachmentSpec::new(
    "file_dokumen",
    "Dokumen",
    ".pdf,.doc,.docx,.xls,.xlsx,image/*",
);

pub const YEAR_FILTER: FilterSpec = FilterSpec::select("tahun", "Tahun");
pub const MONTH_FILTER: FilterSpec = FilterSpec::select("bulan", "Bulan");
pub const SEARCH_FILTER: FilterSpec = FilterSpec::search("q", "Cari");

/// A record type served by the registry backend under `/<PATH>`.
pub trait Resource:
    Serialize + DeserializeOwned + Validate + Clone + Debug + PartialEq + Send + Sync + 'static
{
    /// Endpoint path segment, e.g. `"panggilan"`.
    const PATH: &'static str;
    /// Screen title.
    const TITLE: &'static str;
    /// Filters accepted by the list endpoint.
    const FILTERS: &'static [FilterSpec];
    /// Whether the list endpoint returns pagination metadata.
    const PAGINATED: bool = true;
    /// File fields sent on create and update. A resource with any is saved
    /// as `multipart/form-data`, the rest as JSON.
    const ATTACHMENTS: &'static [AttachmentSpec] = &[];

    fn id(&self) -> Option<i64>;

    /// Filters a freshly mounted list screen starts with.
    fn default_filters(current_year: i32) -> Filters {
        Filters::new().with(YEAR_FILTER.name, current_year)
    }

    fn is_multipart() -> bool {
        !Self::ATTACHMENTS.is_empty()
    }

    fn search_filters() -> Vec<&'static str> {
        Self::FILTERS
            .iter()
            .filter(|f| f.kind == FilterKind::Search)
            .map(|f| f.name)
            .collect()
    }
}
