//! `mascot-infile` reads tandem mass spectra from MGF peak lists and writes
//! them, together with a set of search parameters, as a Mascot MS/MS ion
//! search submission.
//!
//! ```no_run
//! use std::fs;
//! use mascot_infile::prelude::*;
//! use mascot_infile::{MGFReader, MascotInfileWriter, SearchParameters};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spectra = MGFReader::open_path("spectra.mgf")?.read_all()?;
//! let params = SearchParameters::builder()
//!     .database("SwissProt")
//!     .fixed_modification("Carbamidomethyl (C)")
//!     .charges([2, 3])
//!     .build();
//! let mut writer = MascotInfileWriter::with_parameters(fs::File::create("search.txt")?, params);
//! writer.store_experiment("my search", &spectra)?;
//! # Ok(())
//! # }
//! ```
pub mod io;
pub mod params;
pub mod prelude;
pub mod spectrum;

pub use crate::io::{MGFError, MGFReader, MascotInfileWriter};
pub use crate::params::{ChargeList, SearchParameters, SearchParametersBuilder};
pub use crate::spectrum::{CentroidPeak, PeakList, Precursor, Spectrum, SpectrumDescription};
