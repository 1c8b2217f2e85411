pub mod config;
pub mod error;
pub mod pagination;
pub mod query;
pub mod envelope;
pub mod resource;

// Registry records
pub mod agenda;
pub mod anggaran;
pub mod aset_bmn;
pub mod calendar;
pub mod dipapok;
pub mod itsbat;
pub mod lhkpn;
pub mod panggilan;

pub use config::*;
pub use envelope::*;
pub use error::*;
pub use pagination::*;
pub use query::*;
pub use resource::*;

pub use agenda::*;
pub use anggaran::*;
pub use aset_bmn::*;
pub use calendar::*;
pub use dipapok::*;
pub use itsbat::*;
pub use lhkpn::*;
pub use panggilan::*;
