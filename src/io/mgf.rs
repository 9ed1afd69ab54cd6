//! Read [MGF](https://www.matrixscience.com/help/data_file_help.html#GEN) peak lists
//! and write them into Mascot search submission files.
//!
//! Both directions use the same peak list block grammar:
//!
//! ```text
//! BEGIN IONS
//! TITLE=445.12_60.5
//! PEPMASS=445.12
//! RTINSECONDS=60.5
//! CHARGE=+2
//! 100.1 2000
//! END IONS
//! ```
mod multipart;
mod reader;
mod writer;

pub use multipart::{Boundary, BOUNDARY_LENGTH};
pub use reader::{ExtraColumnPolicy, MGFError, MGFParserState, MGFReader, MGFReaderOptions, TitleMode};
pub use writer::{MascotInfileWriter, DEFAULT_FILENAME, USERNAME};

/// Opens a peak list block
pub const BEGIN_IONS: &str = "BEGIN IONS";
/// Closes a peak list block
pub const END_IONS: &str = "END IONS";

pub(crate) const TITLE: &str = "TITLE";
pub(crate) const PEPMASS: &str = "PEPMASS";
pub(crate) const CHARGE: &str = "CHARGE";
pub(crate) const RTINSECONDS: &str = "RTINSECONDS";

pub fn is_mgf(buf: &[u8]) -> bool {
    let needle = BEGIN_IONS.as_bytes();
    buf.windows(needle.len()).any(|window| window == needle)
}
