//! Reader accounts and their saved books.
//!
//! - [`Library`] — in-memory account directory and shelves
//! - [`Book`] — a saved catalogue entry
//! - [`Profile`] — what clients see of a reader
mod book;
mod error;
mod library;
mod profile;

pub use book::*;
pub use error::*;
pub use library::*;
pub use profile::*;
