//! Tagged loggers.
//!
//! - [`Logger`] severity methods (eager, error-carrying, lazy).
//! - [`Tagged`] derive a tag from the implementing type's name.
//! - [`tag_for`], [`validate_tag`] tag derivation and validation.
//! - [`error_chain`] render an error's source chain as a stack trace.

mod facade;
mod tag;

pub use facade::{error_chain, Logger};
pub use tag::{tag_for, tag_from_type_name, validate_tag, Tagged};

pub(crate) use tag::truncate_chars;
