//! Form domain module.
//!
//! Declarative description of a single input: its kind, whether it is
//! required, its select options and the rules its value must satisfy.

mod error;
mod field;
mod rule;
mod value;

pub use error::{FieldError, FieldErrors};
pub use field::{FieldKind, FieldSchema, Requirement};
pub use rule::{parse_number, Rule};
pub use value::{FieldValue, FieldValues};
