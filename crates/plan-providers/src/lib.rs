#![allow(non_snake_case)]

pub mod error;
pub mod store;

pub use error::ProviderError;
pub use store::{SampleStore, DEFAULT_ACTIVITY_THRESHOLD_MS};
