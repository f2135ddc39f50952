//! Class tables mapping form input types to utility class names.
//!
//! A [`ClassTable`] pairs cross-cutting defaults (the `all` group) with a
//! per-input-type [`ClassGroup`], resolved specific-over-general. The
//! built-in table is available as [`ClassTable::DEFAULT`]; custom tables
//! load from JSON via [`ClassTable::from_string`].

mod schema;
pub use schema::*;

mod deserializers;

mod builtin;

mod kinds;
pub use kinds::*;
