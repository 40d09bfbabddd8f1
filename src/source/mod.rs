//! Trip data sources
//!
//! The catalog says where each city's file lives; the loader turns that
//! file into typed trip records.

pub(crate) mod loader;
pub(crate) mod registry;

pub(crate) use loader::load;
pub(crate) use registry::CityCatalog;
