use std::fmt;

/// A non-fatal event raised while writing a search file. The spectrum it
/// refers to is skipped or written in part, but processing continues.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The spectrum has no precursor m/z and cannot be searched
    MissingPrecursor { retention_time: f64 },
    /// The spectrum's MS level was never set
    MsLevelZero { index: usize, retention_time: f64 },
    /// Only the first of several precursors is written
    MultiplePrecursors { index: usize, count: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingPrecursor { retention_time } => write!(
                f,
                "No precursor m/z information for spectrum with rt: {retention_time} present"
            ),
            Diagnostic::MsLevelZero { index, .. } => write!(
                f,
                "MS level is set to 0 for spectrum {index}, ignoring this spectrum"
            ),
            Diagnostic::MultiplePrecursors { index, count } => write!(
                f,
                "Spectrum {index} has {count} precursors, the first precursor is used"
            ),
        }
    }
}

/// Receives [`Diagnostic`] events.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the [`log`] facade. This is the default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::MsLevelZero { .. } => log::info!("{diagnostic}"),
            _ => log::warn!("{diagnostic}"),
        }
    }
}

/// Collects diagnostics so they can be inspected afterwards
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic)
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic)
    }
}
