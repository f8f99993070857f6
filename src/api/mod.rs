//! Remote catalog access and the track data model.

pub mod catalog;
pub mod models;

pub use catalog::*;
pub use models::*;
