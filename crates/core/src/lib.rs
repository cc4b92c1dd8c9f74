//! Nearsell Core
//!
//! Shared domain types and the listing filter engine for the Nearsell
//! classifieds marketplace. This crate is pure and synchronous so the server
//! and the terminal client run exactly the same filtering logic over the
//! same wire model.

pub mod filter;
pub mod listings;

mod uuids;

pub use uuids::TypedUuid;
