use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::tag::ReleaseTag;
use crate::error::{MetadataUpdateError, Result};

/// Contract label used when the caller does not provide one
pub const DEFAULT_CONTRACT: &str = "v1beta1";

/// One release series line in `metadata.yaml`.
///
/// Identity is the `(major, minor)` pair; `contract` is payload.
/// Field declaration order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReleaseSeries {
    pub major: u32,
    pub minor: u32,
    pub contract: String,
}

impl ReleaseSeries {
    pub fn new(major: u32, minor: u32, contract: impl Into<String>) -> Self {
        ReleaseSeries {
            major,
            minor,
            contract: contract.into(),
        }
    }

    /// Derive the entry to register after `tag` is published.
    ///
    /// The minor component is bumped while the major is carried over as-is,
    /// so `v0.8.0` yields `0.9` and `v2.3.0` yields `2.4`.
    pub fn next_after(tag: &ReleaseTag, contract: impl Into<String>) -> Result<Self> {
        let minor = tag.minor.checked_add(1).ok_or_else(|| {
            MetadataUpdateError::parse(format!(
                "minor version {} of tag {} cannot be incremented",
                tag.minor, tag
            ))
        })?;
        Ok(ReleaseSeries::new(tag.major, minor, contract))
    }

    pub fn same_series(&self, other: &ReleaseSeries) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

impl fmt::Display for ReleaseSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Contents of `metadata.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub api_version: String,

    #[serde(default)]
    pub release_series: Vec<ReleaseSeries>,
}

impl Metadata {
    /// Find an existing entry with the same `(major, minor)` as `entry`
    pub fn find_series(&self, entry: &ReleaseSeries) -> Option<&ReleaseSeries> {
        self.release_series.iter().find(|r| r.same_series(entry))
    }

    /// Append `entry` unless its series is already registered.
    ///
    /// Returns `true` when the entry was appended.
    pub fn add_series(&mut self, entry: ReleaseSeries) -> bool {
        if self.find_series(&entry).is_some() {
            return false;
        }
        self.release_series.push(entry);
        true
    }
}
