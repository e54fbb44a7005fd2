//! Inline navigation for paged replies.
//!
//! Defines the wire contract consumed by the platform's button-press
//! handler: page actions encoded as `pg:<id>:<index>` callback strings, a
//! `noop` sentinel for inert controls, the three-button page control row,
//! and the paginated model-selection menu.

pub mod action;
pub mod controls;
pub mod menu;

pub use action::{NOOP_ACTION, NavAction, PAGE_ACTION_PREFIX};
pub use controls::{NavButton, page_controls};
pub use menu::{MENU_PAGE_SIZE, ModelEntry, model_menu};
