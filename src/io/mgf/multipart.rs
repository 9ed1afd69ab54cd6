use std::fmt::{self, Display};
use std::io::{self, prelude::*};

use rand::{distr::Alphanumeric, Rng};

/// The length of a generated [`Boundary`]
pub const BOUNDARY_LENGTH: usize = 22;

/// The token separating the sections of a `multipart/form-data` document.
///
/// The token is written verbatim and never checked against the content, so
/// a caller-provided boundary must not occur in any field value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Boundary(String);

impl Boundary {
    /// Generate a random alphanumeric boundary of [`BOUNDARY_LENGTH`] characters
    pub fn random() -> Self {
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(BOUNDARY_LENGTH)
            .map(char::from)
            .collect();
        Self(token)
    }

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self::random()
    }
}

impl Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Boundary {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Boundary {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Write the preamble of a form field, leaving the stream positioned where
/// the value goes. `line_break` separates it from a preceding field.
pub(crate) fn write_field_header<W: Write>(
    handle: &mut W,
    boundary: &Boundary,
    name: &str,
    line_break: bool,
) -> io::Result<()> {
    if line_break {
        handle.write_all(b"\n")?;
    }
    handle.write_all(b"--")?;
    handle.write_all(boundary.as_str().as_bytes())?;
    handle.write_all(b"\nContent-Disposition: form-data; name=\"")?;
    handle.write_all(name.as_bytes())?;
    handle.write_all(b"\"\n\n")?;
    Ok(())
}

/// Write the preamble of the `FILE` attachment holding the peak lists
pub(crate) fn write_file_header<W: Write>(
    handle: &mut W,
    boundary: &Boundary,
    filename: &str,
) -> io::Result<()> {
    handle.write_all(b"\n--")?;
    handle.write_all(boundary.as_str().as_bytes())?;
    handle.write_all(b"\nContent-Disposition: form-data; name=\"FILE\"; filename=\"")?;
    handle.write_all(filename.as_bytes())?;
    handle.write_all(b"\"\n\n")?;
    Ok(())
}

/// Write the closing boundary of the document
pub(crate) fn write_closing<W: Write>(handle: &mut W, boundary: &Boundary) -> io::Result<()> {
    handle.write_all(b"\n\n--")?;
    handle.write_all(boundary.as_str().as_bytes())?;
    handle.write_all(b"--")?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_random_boundary() {
        let a = Boundary::random();
        let b = Boundary::random();
        assert_eq!(a.as_str().len(), BOUNDARY_LENGTH);
        assert!(a.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_field_header() -> io::Result<()> {
        let boundary = Boundary::from("XYZ");
        let mut buffer = Vec::new();
        write_field_header(&mut buffer, &boundary, "DB", false)?;
        buffer.extend_from_slice(b"MSDB");
        write_field_header(&mut buffer, &boundary, "CLE", true)?;
        buffer.extend_from_slice(b"Trypsin");
        write_closing(&mut buffer, &boundary)?;
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "--XYZ\nContent-Disposition: form-data; name=\"DB\"\n\nMSDB\n\
             --XYZ\nContent-Disposition: form-data; name=\"CLE\"\n\nTrypsin\n\n--XYZ--"
        );
        Ok(())
    }
}
