pub mod form;
pub mod html;
pub mod layout;
pub mod test_utils;

pub use layout::{page, NavItem};
