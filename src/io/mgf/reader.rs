use std::{
    fs,
    io::{self, prelude::*},
    path::Path,
};

use indexmap::IndexMap;
use log::{debug, trace};
use thiserror::Error;

use super::{BEGIN_IONS, CHARGE, END_IONS, PEPMASS, RTINSECONDS, TITLE};
use crate::spectrum::{CentroidPeak, PeakList, Precursor, Spectrum, SpectrumDescription};

/// Where the scanner is relative to the peak list blocks of the stream.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum MGFParserState {
    /// Looking for the next `BEGIN IONS`
    Seeking,
    /// Inside a block, reading the spectrum header
    InHeader,
    /// Inside a block, reading peak lines
    InPeaks,
    /// The end of the stream was reached between blocks
    Done,
}

#[derive(Debug, Error)]
pub enum MGFError {
    #[error("Cannot parse {field} on line {line_number} ({line:?}): {reason}")]
    MalformedField {
        field: &'static str,
        line: String,
        line_number: usize,
        reason: String,
    },
    #[error("Found \"BEGIN IONS\" on line {line_number} but not the corresponding \"END IONS\"")]
    UnterminatedBlock { line_number: usize },
    #[error("Encountered an IO error: {0}")]
    IOError(
        #[from]
        #[source]
        io::Error,
    ),
}

/// What to do with a third column on a peak line
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExtraColumnPolicy {
    /// Read the m/z and intensity and drop the third value
    #[default]
    Ignore,
    /// Treat the line as malformed
    Reject,
    /// Keep the raw text in [`CentroidPeak::annotation`]
    Retain,
}

/// How a `TITLE=` line becomes the spectrum title
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TitleMode {
    /// Keep only the text between the first and second `=`. Titles containing
    /// `=` are truncated; this matches files read by older tools.
    #[default]
    FirstSegment,
    /// Keep everything after the first `=`
    Full,
}

/// Configures how tolerant an [`MGFReader`] is.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MGFReaderOptions {
    pub extra_column: ExtraColumnPolicy,
    pub title_mode: TitleMode,
}

/// The values collected while scanning one block, reset for every block.
#[derive(Debug, Default)]
struct SpectrumBuilder {
    peaks: PeakList,
    charge: Option<i32>,
    precursor_mz: f64,
    precursor_intensity: f64,
    has_precursor: bool,
    retention_time: f64,
    title: Option<String>,
    params: IndexMap<String, String>,
}

impl SpectrumBuilder {
    fn into_spectrum(self, index: usize) -> Spectrum {
        let precursor = if self.has_precursor || self.charge.is_some() {
            vec![Precursor::new(
                self.precursor_mz,
                self.precursor_intensity,
                self.charge,
            )]
        } else {
            Vec::new()
        };
        let description = SpectrumDescription {
            title: self.title,
            index,
            ms_level: 2,
            retention_time: self.retention_time,
            precursor,
            params: self.params,
        };
        Spectrum::new(description, self.peaks)
    }
}

/// The part of a header line after its key and the `=` separator
fn field_value<'a>(line: &'a str, key: &str) -> &'a str {
    let rest = &line[key.len()..];
    rest.strip_prefix('=').unwrap_or(rest)
}

/// Parse a `PEPMASS` value: the m/z, optionally followed by the intensity
pub(crate) fn parse_pepmass(value: &str) -> Result<(f64, Option<f64>), String> {
    let tokens: Vec<&str> = value.split_ascii_whitespace().collect();
    let parse = |token: &str| {
        token
            .parse::<f64>()
            .map_err(|e| format!("invalid number {token:?}: {e}"))
    };
    match tokens.as_slice() {
        [mz] => Ok((parse(*mz)?, None)),
        [mz, intensity] => Ok((parse(*mz)?, Some(parse(*intensity)?))),
        _ => Err(format!(
            "cannot parse PEPMASS, expected 1 or 2 values but found {}",
            tokens.len()
        )),
    }
}

/// Parse a `CHARGE` value. `+` signs are dropped and a trailing `-` makes
/// the charge negative, so `2+`, `+2` and `2` are all `2` while `-2` and `2-`
/// are `-2`.
pub(crate) fn parse_charge(value: &str) -> Result<i32, String> {
    let stripped: String = value.trim().chars().filter(|c| *c != '+').collect();
    let (digits, sign) = match stripped.strip_suffix('-') {
        Some(rest) if !rest.starts_with('-') => (rest, -1),
        _ => (stripped.as_str(), 1),
    };
    digits
        .trim()
        .parse::<i32>()
        .map(|z| z * sign)
        .map_err(|e| format!("invalid charge {value:?}: {e}"))
}

/// What a `TITLE` line contributed to the spectrum
#[derive(Debug, Default, PartialEq)]
pub(crate) struct TitleFields {
    pub retention_time: Option<f64>,
    pub title: Option<String>,
}

fn title_text(line: &str, mode: TitleMode) -> Option<String> {
    match mode {
        TitleMode::FirstSegment => line.split('=').nth(1).map(str::to_string),
        TitleMode::Full => line.split_once('=').map(|(_, rest)| rest.to_string()),
    }
}

/// Interpret a `TITLE` line.
///
/// Titles like `TITLE=Cmpd 1, +MSn(595.3), 10.9 min` carry the retention time
/// in minutes in a comma separated segment. Those segments set the retention
/// time and no title is kept. If any such segment does not start with a
/// number, the remaining segments are not read and the line is used as the
/// title instead.
pub(crate) fn parse_title(line: &str, mode: TitleMode) -> TitleFields {
    let mut fields = TitleFields::default();
    if !line.contains("min") {
        fields.title = title_text(line, mode);
        return fields;
    }
    for segment in line.split(',').filter(|s| s.contains("min")) {
        let minutes = segment
            .split_whitespace()
            .next()
            .and_then(|token| token.parse::<f64>().ok());
        match minutes {
            Some(minutes) => fields.retention_time = Some(minutes * 60.0),
            None => {
                fields.title = title_text(line, mode);
                break;
            }
        }
    }
    fields
}

/// Parse a peak line of two or three whitespace separated columns
pub(crate) fn parse_peak_line(
    line: &str,
    policy: ExtraColumnPolicy,
) -> Result<CentroidPeak, String> {
    let mut tokens = line.split_ascii_whitespace();
    let (mz_token, intensity_token, extra) =
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(mz), Some(intensity), extra, None) => (mz, intensity, extra),
            _ => {
                return Err(
                    "the line should contain m/z and intensity value separated by whitespace"
                        .to_string(),
                )
            }
        };
    let mz: f64 = mz_token
        .parse()
        .map_err(|e| format!("invalid m/z {mz_token:?}: {e}"))?;
    let intensity: f64 = intensity_token
        .parse()
        .map_err(|e| format!("invalid intensity {intensity_token:?}: {e}"))?;
    let annotation = match (extra, policy) {
        (None, _) | (Some(_), ExtraColumnPolicy::Ignore) => None,
        (Some(extra), ExtraColumnPolicy::Reject) => {
            return Err(format!("unexpected third column {extra:?}"))
        }
        (Some(extra), ExtraColumnPolicy::Retain) => Some(extra.to_string()),
    };
    Ok(CentroidPeak {
        mz,
        intensity,
        annotation,
    })
}

/// A forward-only MGF (Mascot Generic Format) parser.
///
/// Each call to [`MGFReader::read_next`] consumes one `BEGIN IONS` … `END IONS`
/// block and resumes where the previous call stopped. Anything outside of a
/// block, such as a file header or MIME boundaries, is skipped.
pub struct MGFReader<R: io::Read> {
    pub handle: io::BufReader<R>,
    pub state: MGFParserState,
    pub options: MGFReaderOptions,
    line_number: usize,
    block_start: usize,
    index: usize,
    failed: bool,
}

impl<R: io::Read> MGFReader<R> {
    /// Create a new MGF parser with the default options
    pub fn new(file: R) -> MGFReader<R> {
        Self::with_options(file, MGFReaderOptions::default())
    }

    pub fn with_options(file: R, options: MGFReaderOptions) -> MGFReader<R> {
        let handle = io::BufReader::with_capacity(500, file);
        MGFReader {
            handle,
            state: MGFParserState::Seeking,
            options,
            line_number: 0,
            block_start: 0,
            index: 0,
            failed: false,
        }
    }

    /// The number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn malformed(&self, field: &'static str, line: &str, reason: String) -> MGFError {
        MGFError::MalformedField {
            field,
            line: line.to_string(),
            line_number: self.line_number,
            reason,
        }
    }

    /// Abandon the open block because another `BEGIN IONS` was found
    fn restart_block(&mut self) -> MGFError {
        let err = MGFError::UnterminatedBlock {
            line_number: self.block_start,
        };
        self.block_start = self.line_number;
        self.state = MGFParserState::InHeader;
        err
    }

    fn handle_seeking(&mut self, line: &str) {
        if line == BEGIN_IONS {
            self.block_start = self.line_number;
            self.state = MGFParserState::InHeader;
        } else {
            trace!("Skipping line {} outside of a block", self.line_number);
        }
    }

    /// Returns `true` when the line closed the block
    fn handle_scan_header(
        &mut self,
        line: &str,
        builder: &mut SpectrumBuilder,
    ) -> Result<bool, MGFError> {
        if line == END_IONS {
            self.state = MGFParserState::Seeking;
            return Ok(true);
        }
        if line == BEGIN_IONS {
            return Err(self.restart_block());
        }
        if line.starts_with(PEPMASS) {
            let (mz, intensity) = parse_pepmass(field_value(line, PEPMASS))
                .map_err(|reason| self.malformed(PEPMASS, line, reason))?;
            builder.precursor_mz = mz;
            builder.precursor_intensity = intensity.unwrap_or_default();
            builder.has_precursor = true;
        } else if line.starts_with(CHARGE) {
            let charge = parse_charge(field_value(line, CHARGE))
                .map_err(|reason| self.malformed(CHARGE, line, reason))?;
            builder.charge = Some(charge);
        } else if line.starts_with(RTINSECONDS) {
            let value = field_value(line, RTINSECONDS).trim();
            builder.retention_time = value.parse().map_err(|e| {
                self.malformed(RTINSECONDS, line, format!("invalid time {value:?}: {e}"))
            })?;
        } else if line.starts_with(TITLE) {
            let fields = parse_title(line, self.options.title_mode);
            if let Some(time) = fields.retention_time {
                builder.retention_time = time;
            }
            if fields.title.is_some() {
                builder.title = fields.title;
            }
        } else if line.starts_with(|c: char| c.is_ascii_digit()) {
            self.state = MGFParserState::InPeaks;
            return self.handle_peak(line, builder);
        } else if let Some((key, value)) = line.split_once('=') {
            builder
                .params
                .insert(key.trim().to_lowercase(), value.trim().to_string());
        } else {
            debug!(
                "Ignoring unrecognized header line {}: {line}",
                self.line_number
            );
        }
        Ok(false)
    }

    /// Returns `true` when the line closed the block
    fn handle_peak(&mut self, line: &str, builder: &mut SpectrumBuilder) -> Result<bool, MGFError> {
        if line == END_IONS {
            self.state = MGFParserState::Seeking;
            return Ok(true);
        }
        if line == BEGIN_IONS {
            return Err(self.restart_block());
        }
        let peak = parse_peak_line(line, self.options.extra_column)
            .map_err(|reason| self.malformed("peak", line, reason))?;
        builder.peaks.push(peak);
        Ok(false)
    }

    fn read_line(&mut self, buffer: &mut String) -> io::Result<usize> {
        self.handle.read_line(buffer)
    }

    /// Scan forward until one block has been read completely. Returns `false`
    /// if the stream ended before another block started.
    fn parse_into(&mut self, builder: &mut SpectrumBuilder) -> Result<bool, MGFError> {
        let mut buffer = String::new();
        loop {
            buffer.clear();
            let b = match self.read_line(&mut buffer) {
                Ok(b) => b,
                Err(err) => {
                    // The block in progress cannot be completed
                    if self.state != MGFParserState::Done {
                        self.state = MGFParserState::Seeking;
                    }
                    return Err(err.into());
                }
            };
            if b == 0 {
                return match self.state {
                    MGFParserState::Seeking | MGFParserState::Done => {
                        self.state = MGFParserState::Done;
                        Ok(false)
                    }
                    MGFParserState::InHeader | MGFParserState::InPeaks => {
                        self.state = MGFParserState::Done;
                        Err(MGFError::UnterminatedBlock {
                            line_number: self.block_start,
                        })
                    }
                };
            }
            self.line_number += 1;

            let line = buffer.trim();
            if line.is_empty() && self.state != MGFParserState::InPeaks {
                continue;
            }

            let complete = match self.state {
                MGFParserState::Seeking | MGFParserState::Done => {
                    self.handle_seeking(line);
                    Ok(false)
                }
                MGFParserState::InHeader => self.handle_scan_header(line, builder),
                MGFParserState::InPeaks => self.handle_peak(line, builder),
            };
            match complete {
                Ok(true) => return Ok(true),
                Ok(false) => {}
                Err(err) => {
                    // A nested `BEGIN IONS` already opened the next block
                    if !matches!(err, MGFError::UnterminatedBlock { .. }) {
                        self.state = MGFParserState::Seeking;
                    }
                    return Err(err);
                }
            }
        }
    }

    /// Read the next spectrum from the stream. `Ok(None)` means the stream is
    /// exhausted.
    ///
    /// A malformed block is discarded entirely and reported as an error. The
    /// reader can still be called again afterwards to continue past it.
    pub fn read_next(&mut self) -> Result<Option<Spectrum>, MGFError> {
        let mut builder = SpectrumBuilder::default();
        if self.parse_into(&mut builder)? {
            let spectrum = builder.into_spectrum(self.index);
            self.index += 1;
            Ok(Some(spectrum))
        } else {
            Ok(None)
        }
    }

    /// Read the next spectrum into `spectrum`, replacing its contents. Returns
    /// `false` if the stream is exhausted, in which case `spectrum` is left
    /// reset to its default state.
    pub fn read_into(&mut self, spectrum: &mut Spectrum) -> Result<bool, MGFError> {
        *spectrum = Spectrum::default();
        match self.read_next()? {
            Some(next) => {
                *spectrum = next;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Read every remaining spectrum, failing on the first malformed block
    pub fn read_all(&mut self) -> Result<Vec<Spectrum>, MGFError> {
        self.by_ref().collect()
    }
}

impl MGFReader<fs::File> {
    pub fn open_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(fs::File::open(path)?))
    }
}

/// Yields each spectrum in turn. After the first error the iterator is
/// exhausted.
impl<R: io::Read> Iterator for MGFReader<R> {
    type Item = Result<Spectrum, MGFError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_next() {
            Ok(spectrum) => spectrum.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::spectrum::SpectrumLike;

    fn make_reader(text: &str) -> MGFReader<io::Cursor<&[u8]>> {
        MGFReader::new(io::Cursor::new(text.as_bytes()))
    }

    #[test]
    fn test_pepmass_variants() {
        assert_eq!(parse_pepmass("500.25"), Ok((500.25, None)));
        assert_eq!(parse_pepmass("500.25 1000.0"), Ok((500.25, Some(1000.0))));
        assert_eq!(parse_pepmass("500.25\t1000.0"), Ok((500.25, Some(1000.0))));
        assert!(parse_pepmass("1 2 3").is_err());
        assert!(parse_pepmass("").is_err());
        assert!(parse_pepmass("abc").is_err());
    }

    #[test]
    fn test_charge_notations() {
        assert_eq!(parse_charge("2+"), Ok(2));
        assert_eq!(parse_charge("+2"), Ok(2));
        assert_eq!(parse_charge("3"), Ok(3));
        assert_eq!(parse_charge("-2"), Ok(-2));
        assert_eq!(parse_charge("2-"), Ok(-2));
        assert!(parse_charge("2+ and 3+").is_err());
        assert!(parse_charge("-2-").is_err());
    }

    #[test]
    fn test_title_minutes() {
        let fields = parse_title("TITLE=Cmpd 1, +MSn(595.3), 10.9 min", TitleMode::default());
        let rt = fields.retention_time.unwrap();
        assert!((rt - 654.0).abs() < 1e-9, "{rt}");
        assert_eq!(fields.title, None);
    }

    #[test]
    fn test_title_minutes_fallback() {
        let fields = parse_title("TITLE=terminal spectrum", TitleMode::default());
        assert_eq!(fields.retention_time, None);
        assert_eq!(fields.title.as_deref(), Some("terminal spectrum"));

        // The first segment sets the time before the second one fails
        let fields = parse_title("TITLE=run, 2 min, late min", TitleMode::default());
        assert_eq!(fields.retention_time, Some(120.0));
        assert_eq!(fields.title.as_deref(), Some("run, 2 min, late min"));
    }

    #[test]
    fn test_title_equals() {
        let line = "TITLE=scan=12 file=a.raw";
        let fields = parse_title(line, TitleMode::FirstSegment);
        assert_eq!(fields.title.as_deref(), Some("scan"));
        let fields = parse_title(line, TitleMode::Full);
        assert_eq!(fields.title.as_deref(), Some("scan=12 file=a.raw"));
        assert_eq!(parse_title("TITLE", TitleMode::Full).title, None);
    }

    #[test]
    fn test_peak_lines() {
        let peak = parse_peak_line("100.5 20", ExtraColumnPolicy::Ignore).unwrap();
        assert_eq!((peak.mz, peak.intensity), (100.5, 20.0));
        let peak = parse_peak_line("100.5\t20\t2+", ExtraColumnPolicy::Ignore).unwrap();
        assert_eq!(peak.annotation, None);
        let peak = parse_peak_line("100.5 20 2+", ExtraColumnPolicy::Retain).unwrap();
        assert_eq!(peak.annotation.as_deref(), Some("2+"));
        assert!(parse_peak_line("100.5 20 2+", ExtraColumnPolicy::Reject).is_err());
        assert!(parse_peak_line("100.5", ExtraColumnPolicy::Ignore).is_err());
        assert!(parse_peak_line("100.5 20 1 2", ExtraColumnPolicy::Ignore).is_err());
        assert!(parse_peak_line("100.5 abc", ExtraColumnPolicy::Ignore).is_err());
    }

    #[test]
    fn test_two_blocks() -> Result<(), MGFError> {
        let mut reader = make_reader(
            "BEGIN IONS\nPEPMASS=400.5\n100 1\nEND IONS\n\
             BEGIN IONS\nPEPMASS=500.5 20\nCHARGE=3+\n200 2\n300 3\nEND IONS\n",
        );
        let first = reader.read_next()?.unwrap();
        assert_eq!(first.precursor().unwrap().mz, 400.5);
        assert_eq!(first.peaks.len(), 1);
        assert_eq!(first.index(), 0);

        let second = reader.read_next()?.unwrap();
        let prec = second.precursor().unwrap();
        assert_eq!((prec.mz, prec.intensity, prec.charge), (500.5, 20.0, Some(3)));
        assert_eq!(second.peaks.len(), 2);
        assert_eq!(second.index(), 1);

        assert!(reader.read_next()?.is_none());
        assert_eq!(reader.state, MGFParserState::Done);
        assert!(reader.read_next()?.is_none());
        Ok(())
    }

    #[test]
    fn test_unterminated_block() {
        let mut reader = make_reader("BEGIN IONS\nPEPMASS=400.5\n100 1\n200 2\n");
        let err = reader.read_next().unwrap_err();
        assert!(matches!(err, MGFError::UnterminatedBlock { line_number: 1 }));

        let mut reader = make_reader("BEGIN IONS\nPEPMASS=400.5\n");
        assert!(matches!(
            reader.read_next(),
            Err(MGFError::UnterminatedBlock { .. })
        ));
    }

    #[test]
    fn test_nested_begin_resumes() -> Result<(), MGFError> {
        let mut reader = make_reader(
            "BEGIN IONS\nPEPMASS=400.5\nBEGIN IONS\nPEPMASS=500.5\n100 1\nEND IONS\n",
        );
        assert!(matches!(
            reader.read_next(),
            Err(MGFError::UnterminatedBlock { line_number: 1 })
        ));
        let spec = reader.read_next()?.unwrap();
        assert_eq!(spec.precursor_mz(), 500.5);
        assert!(reader.read_next()?.is_none());
        Ok(())
    }

    #[test]
    fn test_malformed_fields() {
        let mut reader = make_reader("BEGIN IONS\nPEPMASS=1 2 3\n100 1\nEND IONS\n");
        match reader.read_next() {
            Err(MGFError::MalformedField {
                field,
                line,
                line_number,
                ..
            }) => {
                assert_eq!(field, "PEPMASS");
                assert_eq!(line, "PEPMASS=1 2 3");
                assert_eq!(line_number, 2);
            }
            other => panic!("Expected a malformed PEPMASS, got {other:?}"),
        }

        let mut reader = make_reader("BEGIN IONS\nPEPMASS=400\n100 1\n100\nEND IONS\n");
        match reader.read_next() {
            Err(MGFError::MalformedField { field, line, .. }) => {
                assert_eq!(field, "peak");
                assert_eq!(line, "100");
            }
            other => panic!("Expected a malformed peak line, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_block() -> Result<(), MGFError> {
        let mut reader = make_reader("BEGIN IONS\nTITLE=empty\nPEPMASS=400\nEND IONS\n");
        let spec = reader.read_next()?.unwrap();
        assert!(spec.peaks.is_empty());
        assert_eq!(spec.title(), Some("empty"));
        Ok(())
    }

    #[test]
    fn test_read_into_resets() -> Result<(), MGFError> {
        let mut reader = make_reader(
            "BEGIN IONS\nPEPMASS=400.5 10\nCHARGE=2+\nRTINSECONDS=12.5\n100 1\nEND IONS\n\
             BEGIN IONS\n200 2\nEND IONS\n",
        );
        let mut spectrum = Spectrum::default();
        assert!(reader.read_into(&mut spectrum)?);
        assert_eq!(spectrum.description.retention_time, 12.5);
        assert!(reader.read_into(&mut spectrum)?);
        assert_eq!(spectrum.description.retention_time, 0.0);
        assert!(spectrum.precursor().is_none());
        assert_eq!(spectrum.peaks.len(), 1);
        assert!(!reader.read_into(&mut spectrum)?);
        assert!(spectrum.peaks.is_empty());
        Ok(())
    }

    #[test]
    fn test_extra_header_entries() -> Result<(), MGFError> {
        let mut reader = make_reader(
            "COM=file header\nBEGIN IONS\nSCANS=42\nTITLE=a\n# comment\n100 1\nEND IONS\n",
        );
        let spec = reader.read_next()?.unwrap();
        assert_eq!(spec.description.params.get("scans").map(String::as_str), Some("42"));
        assert_eq!(spec.description.params.len(), 1);
        Ok(())
    }

    #[test]
    fn test_blank_line_in_peaks() -> Result<(), MGFError> {
        let mut reader = make_reader(
            "BEGIN IONS\nPEPMASS=400\n100 1\n\n200 2\nEND IONS\n\
             BEGIN IONS\nPEPMASS=500\n\n300 3\nEND IONS\n",
        );
        match reader.read_next() {
            Err(MGFError::MalformedField {
                field, line_number, ..
            }) => {
                assert_eq!(field, "peak");
                assert_eq!(line_number, 4);
            }
            other => panic!("Expected a malformed peak line, got {other:?}"),
        }
        // Blank lines in the header are still skipped
        let spec = reader.read_next()?.unwrap();
        assert_eq!(spec.precursor_mz(), 500.0);
        assert_eq!(spec.peaks.len(), 1);
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_discards_block() -> Result<(), MGFError> {
        let text: &[u8] = b"BEGIN IONS\nPEPMASS=400.5\nTITLE=caf\xe9\n100 1\nEND IONS\n\
            BEGIN IONS\nPEPMASS=500.5\n200 2\nEND IONS\n";
        let mut reader = MGFReader::new(io::Cursor::new(text));
        assert!(matches!(reader.read_next(), Err(MGFError::IOError(_))));
        assert_eq!(reader.state, MGFParserState::Seeking);
        let spec = reader.read_next()?.unwrap();
        assert_eq!(spec.precursor_mz(), 500.5);
        assert_eq!(spec.peaks.len(), 1);
        assert!(reader.read_next()?.is_none());
        Ok(())
    }
}
