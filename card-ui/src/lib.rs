//! card-ui - Styled card container component
//!
//! Pure view component shared by anything that needs the standard raised,
//! rounded box around its content.

pub mod components;

pub use components::*;
