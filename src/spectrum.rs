//! A minimal data model for centroided MSn spectra: the peak list, the
//! precursor ion and the handful of descriptors a search submission needs.
pub mod peaks;
pub mod scan_properties;
#[allow(clippy::module_inception)]
pub mod spectrum;

pub use crate::spectrum::peaks::{CentroidPeak, PeakList};
pub use crate::spectrum::scan_properties::Precursor;
pub use crate::spectrum::spectrum::{Spectrum, SpectrumDescription, SpectrumLike};
