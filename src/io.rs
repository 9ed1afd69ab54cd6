//! Reading MGF peak lists and writing Mascot search submission files.
//!
//! The two directions share only the `BEGIN IONS` … `END IONS` block grammar,
//! defined in [`mgf`].
mod diagnostics;
pub mod mgf;
mod utils;

pub use crate::io::diagnostics::{Diagnostic, DiagnosticSink, LogDiagnostics};
pub use crate::io::mgf::{
    is_mgf, Boundary, ExtraColumnPolicy, MGFError, MGFParserState, MGFReader, MGFReaderOptions,
    MascotInfileWriter, TitleMode,
};
pub use crate::io::utils::FloatPrecision;
