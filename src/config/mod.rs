//! Configuration file loading
//!
//! Parses alias documents and the manifests that declare alias registries.

pub mod loader;
pub mod manifest;

pub use loader::load_document;
pub use manifest::load_manifest;
