//! Registration form core: field values, validation, and submission

mod field;
mod form_state;
mod submission;
mod validator;

pub use field::*;
pub use form_state::*;
pub use submission::*;
pub use validator::*;
