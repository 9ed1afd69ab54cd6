use std::fs;
use std::io::{self, prelude::*, BufWriter};
use std::path::Path;

use super::multipart::{write_closing, write_field_header, write_file_header, Boundary};
use super::{BEGIN_IONS, CHARGE, END_IONS, PEPMASS, RTINSECONDS, TITLE};
use crate::io::diagnostics::{Diagnostic, DiagnosticSink, LogDiagnostics};
use crate::io::utils::FloatPrecision;
use crate::params::SearchParameters;
use crate::spectrum::{CentroidPeak, PeakList, SpectrumLike};

/// The value of the `USERNAME` form field
pub const USERNAME: &str = env!("CARGO_PKG_NAME");

/// The attachment name used when none was given
pub const DEFAULT_FILENAME: &str = "spectra.mgf";

/// Writes a Mascot MS/MS ion search submission: a `multipart/form-data`
/// document with one field per search parameter followed by a `FILE`
/// attachment holding MGF peak list blocks.
///
/// A complete document is written by [`MascotInfileWriter::write_header`],
/// then either [`MascotInfileWriter::write_spectrum`] or
/// [`MascotInfileWriter::write_experiment`], then [`MascotInfileWriter::close`].
/// [`MascotInfileWriter::store_spectrum`] and
/// [`MascotInfileWriter::store_experiment`] do all three.
///
/// Non-fatal problems with individual spectra are reported to the
/// [`DiagnosticSink`] `D`, which forwards them to [`log`] by default.
pub struct MascotInfileWriter<W: io::Write, D: DiagnosticSink = LogDiagnostics> {
    pub handle: io::BufWriter<W>,
    parameters: SearchParameters,
    boundary: Boundary,
    precision: FloatPrecision,
    filename: String,
    diagnostics: D,
}

impl<W: io::Write> MascotInfileWriter<W, LogDiagnostics> {
    /// Create a writer with the default search parameters and a random boundary
    pub fn new(file: W) -> Self {
        Self::with_parameters(file, SearchParameters::default())
    }

    pub fn with_parameters(file: W, parameters: SearchParameters) -> Self {
        let handle = io::BufWriter::with_capacity(500, file);
        Self {
            handle,
            parameters,
            boundary: Boundary::random(),
            precision: FloatPrecision::default(),
            filename: DEFAULT_FILENAME.to_string(),
            diagnostics: LogDiagnostics,
        }
    }
}

impl MascotInfileWriter<fs::File, LogDiagnostics> {
    /// Create the file at `path`, naming the attachment after the file
    pub fn create_path<P: AsRef<Path>>(path: P, parameters: SearchParameters) -> io::Result<Self> {
        let path = path.as_ref();
        let mut writer = Self::with_parameters(fs::File::create(path)?, parameters);
        if let Some(name) = path.file_name() {
            writer.filename = name.to_string_lossy().to_string();
        }
        Ok(writer)
    }
}

impl<W: io::Write, D: DiagnosticSink> MascotInfileWriter<W, D> {
    /// Replace the diagnostic sink
    pub fn with_diagnostics<D2: DiagnosticSink>(self, diagnostics: D2) -> MascotInfileWriter<W, D2> {
        MascotInfileWriter {
            handle: self.handle,
            parameters: self.parameters,
            boundary: self.boundary,
            precision: self.precision,
            filename: self.filename,
            diagnostics,
        }
    }

    pub fn with_boundary(mut self, boundary: impl Into<Boundary>) -> Self {
        self.boundary = boundary.into();
        self
    }

    pub fn with_precision(mut self, precision: FloatPrecision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn set_boundary(&mut self, boundary: impl Into<Boundary>) {
        self.boundary = boundary.into();
    }

    pub fn parameters(&self) -> &SearchParameters {
        &self.parameters
    }

    pub fn set_parameters(&mut self, parameters: SearchParameters) {
        self.parameters = parameters;
    }

    pub fn precision(&self) -> FloatPrecision {
        self.precision
    }

    pub fn set_precision(&mut self, precision: FloatPrecision) {
        self.precision = precision;
    }

    /// The name of the `FILE` attachment
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = filename.into();
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut D {
        &mut self.diagnostics
    }

    /// Flush the buffer and return the underlying stream and the diagnostic sink
    pub fn into_inner(self) -> io::Result<(W, D)> {
        let stream = self.handle.into_inner().map_err(|e| e.into_error())?;
        Ok((stream, self.diagnostics))
    }

    pub fn into_buffer(self) -> BufWriter<W> {
        self.handle
    }

    fn format(&self, value: f64) -> String {
        self.precision.format(value)
    }

    /// Write a form field. `line_break` is `false` only for the first field
    /// of the document.
    pub fn write_field(&mut self, name: &str, value: &str, line_break: bool) -> io::Result<()> {
        write_field_header(&mut self.handle, &self.boundary, name, line_break)?;
        self.handle.write_all(value.as_bytes())?;
        Ok(())
    }

    /// Write a spectrum header `KEY=value`
    pub fn write_kv(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.handle.write_all(key.as_bytes())?;
        self.handle.write_all(b"=")?;
        self.handle.write_all(value.as_bytes())?;
        self.handle.write_all(b"\n")?;
        Ok(())
    }

    /// Write the search parameter fields. The `COM` field carrying
    /// `search_title` is only written when the title is not empty.
    pub fn write_header(&mut self, search_title: &str) -> io::Result<()> {
        let has_title = !search_title.is_empty();
        if has_title {
            self.write_field("COM", search_title, false)?;
        }
        self.write_field("USERNAME", USERNAME, has_title)?;
        self.write_field("FORMAT", "Mascot generic", true)?;
        self.write_field("TOLU", "Da", true)?;
        self.write_field("ITOLU", "Da", true)?;

        let params = self.parameters.clone();
        self.write_field("FORMVER", params.form_version(), true)?;
        self.write_field("DB", params.database(), true)?;
        self.write_field("SEARCH", params.search_type(), true)?;
        self.write_field("REPORT", params.report(), true)?;
        self.write_field("CLE", params.cleavage(), true)?;
        self.write_field("MASS", params.mass_type(), true)?;
        for modification in params.fixed_modifications() {
            self.write_field("MODS", modification, true)?;
        }
        for modification in params.variable_modifications() {
            self.write_field("IT_MODS", modification, true)?;
        }
        self.write_field("INSTRUMENT", params.instrument(), true)?;
        self.write_field("PFA", &params.missed_cleavages().to_string(), true)?;
        let tolerance = self.format(params.precursor_mass_tolerance());
        self.write_field("TOL", &tolerance, true)?;
        let tolerance = self.format(params.fragment_mass_tolerance());
        self.write_field("ITOL", &tolerance, true)?;
        self.write_field("TAXONOMY", params.taxonomy(), true)?;
        self.write_field("CHARGE", &params.charges().to_string(), true)?;
        Ok(())
    }

    /// Write the `TITLE`, `PEPMASS` and `RTINSECONDS` entries of a block
    fn write_precursor(&mut self, precursor_mz: f64, retention_time: f64) -> io::Result<()> {
        let mz = self.format(precursor_mz);
        let rt = self.format(retention_time);
        self.write_kv(TITLE, &format!("{mz}_{rt}"))?;
        self.write_kv(PEPMASS, &mz)?;
        self.write_kv(RTINSECONDS, &rt)?;
        Ok(())
    }

    /// Write one `<m/z> <intensity>` line per peak, in the order given
    pub fn write_peaks(&mut self, peaks: &[CentroidPeak]) -> io::Result<()> {
        for peak in peaks {
            let mz = self.format(peak.mz);
            let intensity = self.format(peak.intensity);
            self.handle.write_all(mz.as_bytes())?;
            self.handle.write_all(b" ")?;
            self.handle.write_all(intensity.as_bytes())?;
            self.handle.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Write a single spectrum as its own `FILE` attachment, with the precursor
    /// m/z and retention time given separately. Peaks are written in the order
    /// given.
    ///
    /// A zero `precursor_mz` writes nothing and raises
    /// [`Diagnostic::MissingPrecursor`]. Returns whether a block was written.
    pub fn write_spectrum(
        &mut self,
        peaks: &[CentroidPeak],
        precursor_mz: f64,
        retention_time: f64,
    ) -> io::Result<bool> {
        if precursor_mz == 0.0 {
            self.diagnostics
                .emit(Diagnostic::MissingPrecursor { retention_time });
            return Ok(false);
        }
        write_file_header(&mut self.handle, &self.boundary, &self.filename)?;
        self.handle.write_all(BEGIN_IONS.as_bytes())?;
        self.handle.write_all(b"\n")?;
        self.write_precursor(precursor_mz, retention_time)?;
        self.write_peaks(peaks)?;
        self.handle.write_all(END_IONS.as_bytes())?;
        self.handle.write_all(b"\n")?;
        Ok(true)
    }

    /// Write the MS2 spectra of a collection as successive blocks of one
    /// `FILE` attachment. Returns the number of blocks written.
    ///
    /// Peaks are written sorted by m/z. Only the first precursor of a spectrum
    /// is used. Spectra of other MS levels are skipped, MS level 0 and MS2
    /// spectra without a precursor m/z raise a [`Diagnostic`].
    pub fn write_experiment<S, I>(&mut self, spectra: I) -> io::Result<usize>
    where
        S: SpectrumLike,
        I: IntoIterator<Item = S>,
    {
        write_file_header(&mut self.handle, &self.boundary, &self.filename)?;
        let mut written = 0;
        for (index, spectrum) in spectra.into_iter().enumerate() {
            let n_precursors = spectrum.precursors().len();
            if n_precursors > 1 {
                self.diagnostics.emit(Diagnostic::MultiplePrecursors {
                    index,
                    count: n_precursors,
                });
            }

            match spectrum.ms_level() {
                0 => {
                    self.diagnostics.emit(Diagnostic::MsLevelZero {
                        index,
                        retention_time: spectrum.retention_time(),
                    });
                    continue;
                }
                2 => {}
                _ => continue,
            }

            let precursor_mz = spectrum.precursor_mz();
            if precursor_mz == 0.0 {
                self.diagnostics.emit(Diagnostic::MissingPrecursor {
                    retention_time: spectrum.retention_time(),
                });
                continue;
            }

            let mut peaks = PeakList::from(spectrum.peaks());
            peaks.sort_by_position();

            self.handle.write_all(b"\n")?;
            self.handle.write_all(BEGIN_IONS.as_bytes())?;
            self.handle.write_all(b"\n")?;
            self.write_precursor(precursor_mz, spectrum.retention_time())?;
            if let Some(charge) = spectrum.precursor().and_then(|p| p.known_charge()) {
                let sign = if charge > 0 { '+' } else { '-' };
                self.write_kv(CHARGE, &format!("{sign}{}", charge.unsigned_abs()))?;
            }
            self.handle.write_all(b"\n")?;
            self.write_peaks(&peaks)?;
            self.handle.write_all(END_IONS.as_bytes())?;
            self.handle.write_all(b"\n")?;
            written += 1;
        }
        Ok(written)
    }

    /// Write the closing boundary and flush the stream
    pub fn close(&mut self) -> io::Result<()> {
        write_closing(&mut self.handle, &self.boundary)?;
        self.handle.flush()
    }

    /// Write a complete document for one spectrum
    pub fn store_spectrum(
        &mut self,
        search_title: &str,
        peaks: &[CentroidPeak],
        precursor_mz: f64,
        retention_time: f64,
    ) -> io::Result<bool> {
        self.write_header(search_title)?;
        let written = self.write_spectrum(peaks, precursor_mz, retention_time)?;
        self.close()?;
        Ok(written)
    }

    /// Write a complete document for a collection of spectra
    pub fn store_experiment<S, I>(&mut self, search_title: &str, spectra: I) -> io::Result<usize>
    where
        S: SpectrumLike,
        I: IntoIterator<Item = S>,
    {
        self.write_header(search_title)?;
        let written = self.write_experiment(spectra)?;
        self.close()?;
        Ok(written)
    }
}
