pub mod config;
pub mod http;
pub mod list;

pub use config::{api_settings, load_config};
pub use http::{FilePart, RegistryClient, Upload};
pub use list::*;
