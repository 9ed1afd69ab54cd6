//! A set of foundational traits used throughout the library.
pub use crate::io::DiagnosticSink;
pub use crate::spectrum::SpectrumLike;
