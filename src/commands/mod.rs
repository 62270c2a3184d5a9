//! Command implementations for the CLI
//!
//! - quote: Price a custom package
//! - gallery: List albums, photos and videos
//! - inquire: Submit a booking inquiry
//! - config: Configuration display and validation

pub mod config;
pub mod gallery;
pub mod inquire;
pub mod quote;
