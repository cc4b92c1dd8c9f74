//! Shared application domain and persistence modules for Nearsell.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;
