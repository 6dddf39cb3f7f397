use crate::utils::error::{DemError, Result};
use crate::utils::validation::validate_path_length;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

/// Path buffer size of the legacy DEMApp front end.
pub const DEFAULT_MAX_PATH_LENGTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    CommandLine,
    Interactive,
}

/// Path of the simulation case file for this run.
///
/// Held as an `OsString` so any path the OS accepts survives unchanged.
/// Built once by the resolver and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFileReference {
    path: OsString,
    source: InputSource,
}

impl InputFileReference {
    /// Fails with `MissingInput` for an empty path and `PathTooLong` when
    /// `max_length` is set and exceeded. The path is stored as given.
    pub fn new(
        path: impl Into<OsString>,
        source: InputSource,
        max_length: Option<usize>,
    ) -> Result<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(DemError::MissingInput);
        }
        validate_path_length(&path, max_length)?;

        Ok(Self { path, source })
    }

    /// Builds a reference from raw bytes typed at the prompt.
    pub fn from_bytes(
        bytes: Vec<u8>,
        source: InputSource,
        max_length: Option<usize>,
    ) -> Result<Self> {
        Self::new(os_string_from_bytes(bytes)?, source, max_length)
    }

    pub fn as_os_str(&self) -> &OsStr {
        &self.path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// `None` when the path is not valid UTF-8.
    pub fn to_str(&self) -> Option<&str> {
        self.path.to_str()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.path.as_encoded_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn source(&self) -> InputSource {
        self.source
    }

    pub fn into_inner(self) -> OsString {
        self.path
    }
}

#[cfg(unix)]
fn os_string_from_bytes(bytes: Vec<u8>) -> Result<OsString> {
    use std::os::unix::ffi::OsStringExt;
    Ok(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn os_string_from_bytes(bytes: Vec<u8>) -> Result<OsString> {
    String::from_utf8(bytes)
        .map(OsString::from)
        .map_err(|_| DemError::InvalidEncoding)
}

impl fmt::Display for InputFileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path().display())
    }
}

impl AsRef<Path> for InputFileReference {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
