//! Server version parsing and the feature thresholds that depend on it.

use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch` server version. Missing parts are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerVersion {
    /// Major version (always 1 in practice).
    pub major: u16,
    /// Minor version (`21` in `1.21.4`).
    pub minor: u16,
    /// Patch version (`4` in `1.21.4`).
    pub patch: u16,
}

impl ServerVersion {
    /// Build a version from its parts.
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether this version is `other` or newer.
    pub fn at_least(self, other: Self) -> bool {
        self >= other
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Error for version strings that are not `major[.minor[.patch]]`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid server version '{0}'; expected e.g. 1.21.4")]
pub struct ParseVersionError(String);

impl FromStr for ServerVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseVersionError(s.to_owned());
        let mut parts = s.trim().split('.');

        let major = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let mut rest = [0_u16; 2];
        for slot in &mut rest {
            match parts.next() {
                Some(p) => *slot = p.parse().ok().ok_or_else(invalid)?,
                None => break,
            }
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        let [minor, patch] = rest;
        Ok(Self::new(major, minor, patch))
    }
}
