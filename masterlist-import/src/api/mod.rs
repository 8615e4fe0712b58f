//! Remote store access
//!
//! The pipeline talks to a [`ProjectStore`]; [`SupabaseClient`] is the real
//! one and [`DryRunStore`] only logs.

pub mod client;
pub mod error;
pub mod store;

pub use client::SupabaseClient;
pub use error::StoreError;
pub use store::{DryRunStore, ProjectStore};
