//! Domain services

pub mod listings;
