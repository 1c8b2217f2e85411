use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Notification text shown when the backend cannot be reached.
pub const NETWORK_FAILURE_MESSAGE: &str = "Gagal memuat data. Pastikan API terhubung.";

/// Fallback text when the backend reports a failure without a message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Terjadi kesalahan";

/// Categorization of registry errors, used for logging and badge styling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RegistryErrorKind {
    Network,
    Server,
    InvalidRange,
    StaleResponse,
    Validation,
    Config,
}

impl fmt::Display for RegistryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryErrorKind::Network => write!(f, "Network"),
            RegistryErrorKind::Server => write!(f, "Server"),
            RegistryErrorKind::InvalidRange => write!(f, "InvalidRange"),
            RegistryErrorKind::StaleResponse => write!(f, "StaleResponse"),
            RegistryErrorKind::Validation => write!(f, "Validation"),
            RegistryErrorKind::Config => write!(f, "Config"),
        }
    }
}

/// Every failure the registry front-end can observe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Transport failure: connection refused, DNS, timeout, unreadable body.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx status or an envelope with `success: false`.
    #[error("server error: {message}")]
    Server { status: Option<u16>, message: String },

    /// A page outside `[1, last_page]` was requested.
    #[error("page {page} is outside 1..={last_page}")]
    InvalidRange { page: i64, last_page: i64 },

    /// A response arrived after a newer request was issued. Never shown to users.
    #[error("response #{seq} superseded by request #{latest}")]
    StaleResponse { seq: u64, latest: u64 },

    /// Required fields missing before a record is submitted.
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        field_errors: HashMap<String, String>,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl RegistryError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn server(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_range(page: i64, last_page: i64) -> Self {
        Self::InvalidRange { page, last_page }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self::Validation {
            message: message.into(),
            field_errors,
        }
    }

    pub fn kind(&self) -> RegistryErrorKind {
        match self {
            Self::Network(_) => RegistryErrorKind::Network,
            Self::Server { .. } => RegistryErrorKind::Server,
            Self::InvalidRange { .. } => RegistryErrorKind::InvalidRange,
            Self::StaleResponse { .. } => RegistryErrorKind::StaleResponse,
            Self::Validation { .. } => RegistryErrorKind::Validation,
            Self::Config(_) => RegistryErrorKind::Config,
        }
    }

    /// Whether this error should ever reach a notification.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, Self::StaleResponse { .. })
    }

    /// Text for the toast shown to the operator.
    ///
    /// Server messages are passed through verbatim since the backend already
    /// phrases them for users; transport failures get a fixed hint.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => NETWORK_FAILURE_MESSAGE.to_string(),
            Self::Server { message, .. } if message.trim().is_empty() => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            Self::Server { message, .. } => message.clone(),
            Self::InvalidRange { page, last_page } => {
                format!("Halaman {page} tidak tersedia (1-{last_page})")
            }
            Self::StaleResponse { .. } => String::new(),
            Self::Validation { message, .. } => message.clone(),
            Self::Config(message) => message.clone(),
        }
    }

    /// Per-field messages for a validation failure, empty otherwise.
    pub fn field_errors(&self) -> HashMap<String, String> {
        match self {
            Self::Validation { field_errors, .. } => field_errors.clone(),
            _ => HashMap::new(),
        }
    }
}

impl From<validator::ValidationErrors> for RegistryError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Isian {} tidak valid", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        RegistryError::validation("Lengkapi semua field yang wajib diisi", field_errors)
    }
}
