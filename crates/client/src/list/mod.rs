//! Paginated list controller shared by every registry screen.
//!
//! [`ListCoordinator`] is the synchronous state machine: it owns the list
//! state, issues numbered fetch tickets and decides whether a response may
//! be committed. [`ListController`] drives it against a [`ListSource`],
//! debounces search input and publishes snapshots for the UI.

mod controller;
mod coordinator;
mod source;

pub use controller::{ListController, ListOptions, Notifier};
pub use coordinator::{FetchTicket, ListBody, ListCoordinator, ListState, Phase, Resolution};
pub use source::{ListSource, ResourceSource};
