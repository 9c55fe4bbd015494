//! Form rendering module
//!
//! - `field_renderer`: text, textarea, choice and checkbox widgets
//! - `registration_form`: the registration screen

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration;
