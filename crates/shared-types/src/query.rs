use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Select value meaning "no filter" in every filter dropdown.
pub const ALL_OPTION: &str = "all";

/// Active list filters keyed by query parameter name.
///
/// Blank values and `"all"` remove the filter instead of storing it, so the
/// map only ever holds parameters that should reach the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters(BTreeMap<String, String>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set(name, value);
        self
    }

    /// Returns `true` when the stored value actually changed.
    pub fn set(&mut self, name: impl Into<String>, value: impl ToString) -> bool {
        let name = name.into();
        let value = value.to_string();
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == ALL_OPTION {
            return self.0.remove(&name).is_some();
        }
        self.0.insert(name, trimmed.to_string()).as_deref() != Some(trimmed)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Value for a select control: the stored value or `"all"`.
    pub fn select_value(&self, name: &str) -> String {
        self.get(name).unwrap_or(ALL_OPTION).to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Everything needed to request one page of a resource listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: i64,
    pub filters: Filters,
}

impl ListQuery {
    pub fn new(page: i64, filters: Filters) -> Self {
        Self { page, filters }
    }

    pub fn first_page(filters: Filters) -> Self {
        Self::new(1, filters)
    }

    /// Query parameters in request order: `page` first, then filters by name.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("page".to_string(), self.page.to_string())];
        pairs.extend(
            self.filters
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        pairs
    }

    pub fn to_query_string(&self) -> String {
        encode_pairs(&self.to_pairs())
    }

    /// Filters only, for endpoints that return everything in one response.
    pub fn filters_query_string(&self) -> String {
        encode_pairs(&self.to_pairs()[1..])
    }
}

fn encode_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
