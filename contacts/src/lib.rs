//! Contact persistence for Tally.
//!
//! A single `contacts` table behind [`ContactStore`]: create, list, update,
//! delete, plus seeding an empty database with [`sample_contacts`].

mod error;
mod sample;
mod sqlite_util;
mod store;

pub use error::{ContactError, Result};
pub use sample::sample_contacts;
pub use store::ContactStore;

pub use tally_types::{Contact, ContactId};
