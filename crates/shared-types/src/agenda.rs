use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::query::Filters;
use crate::resource::{FilterSpec, Resource, MONTH_FILTER, YEAR_FILTER};

/// Leadership agenda entry (Agenda Pimpinan).
///
/// The agenda endpoint answers with the `{status, data, message}` envelope;
/// the client normalizes it like every other response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct AgendaPimpinan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(length(min = 10, message = "Tanggal agenda wajib diisi"))]
    pub tanggal_agenda: String,
    #[validate(length(min = 1, message = "Isi agenda wajib diisi"))]
    pub isi_agenda: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl AgendaPimpinan {
    /// Agenda text cut at `max` characters with a trailing ellipsis.
    pub fn summary(&self, max: usize) -> String {
        let text = self.isi_agenda.trim();
        if text.chars().count() <= max {
            return text.to_string();
        }
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

impl Resource for AgendaPimpinan {
    const PATH: &'static str = "agenda";
    const TITLE: &'static str = "Agenda Pimpinan";
    const FILTERS: &'static [FilterSpec] = &[YEAR_FILTER, MONTH_FILTER];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn default_filters(_current_year: i32) -> Filters {
        Filters::new()
    }
}
