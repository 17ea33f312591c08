#![doc = document_features::document_features!()]
//! The `zaagplan` library: everything needed to describe, validate and report
//! one-dimensional cutting plans for stock profile bars.

/// Entities to model the cutting of pieces from stock bars
pub mod entities;

/// Typed errors returned by the library
pub mod error;

/// Importing instances into and exporting plans out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
