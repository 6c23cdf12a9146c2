//! Static data tables for FRONTLINE: weapons, characters and the rules
//! that tie them together.
//!
//! The tables are embedded JSON, parsed once into [`Catalog`] and read-only
//! afterwards.

pub mod catalog;
pub mod characters;
pub mod compatibility;
pub mod error;
pub mod weapons;

pub use catalog::{Catalog, CatalogIssue};
pub use error::CatalogError;
