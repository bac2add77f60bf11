//! HTTP request handlers.

mod meta;
mod validate;

pub use meta::{health, intro};
pub use validate::{
    create_validation_task, get_validation_task, validate_both, validate_schema,
    validate_structure,
};
