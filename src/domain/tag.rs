use std::fmt;

use regex::Regex;

use crate::error::{MetadataUpdateError, Result};

/// Strict release tag shape: `v<major>.<minor>.<patch>`, nothing before or after.
const TAG_PATTERN: &str = r"^v([0-9]+)\.([0-9]+)\.([0-9]+)$";

/// Whether a tag opens a new release series or patches an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseKind {
    /// `vX.Y.0`
    Minor,
    /// `vX.Y.Z` with Z > 0
    Patch,
}

/// A parsed release tag such as `v0.8.0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseTag {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ReleaseTag {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        ReleaseTag {
            major,
            minor,
            patch,
        }
    }

    /// Parse a tag string (e.g., "v1.2.3" -> ReleaseTag(1,2,3)).
    ///
    /// Unlike loose version parsing, no prefix variants, pre-release or build
    /// suffixes are accepted. The offending input is echoed in the error.
    pub fn parse(tag: &str) -> Result<Self> {
        let re = Regex::new(TAG_PATTERN)
            .map_err(|e| MetadataUpdateError::parse(format!("Invalid tag pattern: {}", e)))?;

        let caps = re
            .captures(tag)
            .ok_or_else(|| MetadataUpdateError::parse(format!("invalid tag format: {}", tag)))?;

        let component = |idx: usize, name: &str| -> Result<u32> {
            let raw = &caps[idx];
            raw.parse::<u32>().map_err(|_| {
                MetadataUpdateError::parse(format!("invalid {} version: {} (tag {})", name, raw, tag))
            })
        };

        Ok(ReleaseTag {
            major: component(1, "major")?,
            minor: component(2, "minor")?,
            patch: component(3, "patch")?,
        })
    }

    pub fn kind(&self) -> ReleaseKind {
        if self.patch > 0 {
            ReleaseKind::Patch
        } else {
            ReleaseKind::Minor
        }
    }

    pub fn is_patch(&self) -> bool {
        self.kind() == ReleaseKind::Patch
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}
