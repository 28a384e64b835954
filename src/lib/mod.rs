//! Validated label types for address-book records.

pub mod tag;
