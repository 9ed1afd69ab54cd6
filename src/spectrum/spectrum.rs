use indexmap::IndexMap;

use super::peaks::{CentroidPeak, PeakList};
use super::scan_properties::Precursor;

/// The metadata describing a spectrum, everything except the peak list.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SpectrumDescription {
    /// The free-text title, if the source provided one
    pub title: Option<String>,
    /// The ordinal position of the spectrum in its source
    pub index: usize,
    /// The degree of exponentiation of the spectrum, 0 when unset
    pub ms_level: u8,
    /// The retention time in seconds
    pub retention_time: f64,
    pub precursor: Vec<Precursor>,
    /// Header entries with no dedicated field, keyed by lower-cased name
    pub params: IndexMap<String, String>,
}

/// Anything the search file writer can take spectra from.
pub trait SpectrumLike {
    fn ms_level(&self) -> u8;

    /// The retention time in seconds
    fn retention_time(&self) -> f64;

    fn precursors(&self) -> &[Precursor];

    fn peaks(&self) -> &[CentroidPeak];

    fn precursor(&self) -> Option<&Precursor> {
        self.precursors().first()
    }

    /// The m/z of the first precursor, or `0.0` if there is none
    fn precursor_mz(&self) -> f64 {
        self.precursor().map(|p| p.mz).unwrap_or_default()
    }
}

/// A centroided spectrum with its description.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Spectrum {
    pub description: SpectrumDescription,
    pub peaks: PeakList,
}

impl Spectrum {
    pub fn new(description: SpectrumDescription, peaks: PeakList) -> Self {
        Self { description, peaks }
    }

    /// Build an MS2 spectrum with a single precursor
    pub fn msn(precursor: Precursor, retention_time: f64, peaks: PeakList) -> Self {
        Self {
            description: SpectrumDescription {
                ms_level: 2,
                retention_time,
                precursor: vec![precursor],
                ..Default::default()
            },
            peaks,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.description.title.as_deref()
    }

    pub fn index(&self) -> usize {
        self.description.index
    }
}

impl SpectrumLike for Spectrum {
    fn ms_level(&self) -> u8 {
        self.description.ms_level
    }

    fn retention_time(&self) -> f64 {
        self.description.retention_time
    }

    fn precursors(&self) -> &[Precursor] {
        &self.description.precursor
    }

    fn peaks(&self) -> &[CentroidPeak] {
        &self.peaks
    }
}

impl<T: SpectrumLike> SpectrumLike for &T {
    fn ms_level(&self) -> u8 {
        (**self).ms_level()
    }

    fn retention_time(&self) -> f64 {
        (**self).retention_time()
    }

    fn precursors(&self) -> &[Precursor] {
        (**self).precursors()
    }

    fn peaks(&self) -> &[CentroidPeak] {
        (**self).peaks()
    }
}
