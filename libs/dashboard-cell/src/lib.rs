pub mod handlers;
pub mod router;
pub mod services;
pub mod views;

pub use router::*;
