#[cfg(test)]
#[path = "version_test.rs"]
mod version_test;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The largest value a build or revision number of a generated version may hold.
pub const MAX_VERSION_COMPONENT: u32 = u16::MAX as u32;

/// A four part version number: `major.minor.build.revision`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self { major, minor, build, revision }
    }

    /// A version with the given major and minor components, and zero build and revision.
    pub const fn from_major_minor(major: u32, minor: u32) -> Self {
        Self::new(major, minor, 0, 0)
    }

    /// Returns the same version with the major and minor components replaced.
    pub const fn with_major_minor(self, major: u32, minor: u32) -> Self {
        Self { major, minor, ..self }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.build, self.revision)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Version string '{text}' is not of the form major.minor[.build[.revision]].")]
pub struct VersionParseError {
    pub text: String,
}

impl FromStr for Version {
    type Err = VersionParseError;

    /// Parses two to four dot separated components. Missing build and revision components are
    /// zero.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let error = || VersionParseError { text: text.to_owned() };
        let components = text
            .trim()
            .split('.')
            .map(|component| {
                // `u32::from_str` accepts a leading '+', which is not part of a version.
                if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(error());
                }
                component.parse::<u32>().map_err(|_| error())
            })
            .collect::<Result<Vec<_>, _>>()?;

        match components[..] {
            [major, minor] => Ok(Self::new(major, minor, 0, 0)),
            [major, minor, build] => Ok(Self::new(major, minor, build, 0)),
            [major, minor, build, revision] => Ok(Self::new(major, minor, build, revision)),
            _ => Err(error()),
        }
    }
}
