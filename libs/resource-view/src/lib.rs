//! The list-resource view every management screen is built on: fetch the
//! whole collection, filter it in memory, edit through a modal draft, and
//! refetch after every mutation.

pub mod controller;
pub mod filter;
pub mod form;
pub mod reference;
pub mod service;
pub mod state;

pub use controller::{ControllerError, ListController, RemoveOutcome};
pub use filter::{filter_records, matches_term};
pub use form::{FormMode, FormModal};
pub use reference::ReferenceData;
pub use service::{Confirmation, Confirmed, DeletableService, ResourceService};
pub use state::AppState;
