//! Release metadata update workflow
//!
//! Everything that `main.rs` reads from the process environment and the
//! command line arrives here as plain arguments, so the whole flow can be
//! driven from tests without spawning the binary.

use std::path::PathBuf;

use crate::domain::{Metadata, ReleaseSeries, ReleaseTag, DEFAULT_CONTRACT};
use crate::error::Result;
use crate::metadata::{load_metadata, metadata_path, save_metadata};

/// Arguments for the update workflow
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateArgs {
    /// Release tag being published (e.g. "v0.8.0")
    pub tag: String,

    /// Contract label for a newly added release series
    pub contract: String,

    /// Repository root containing `metadata.yaml`
    pub repo_dir: PathBuf,

    /// Preview mode - don't write the metadata file
    pub dry_run: bool,
}

impl UpdateArgs {
    pub fn new(tag: impl Into<String>) -> Self {
        UpdateArgs {
            tag: tag.into(),
            contract: DEFAULT_CONTRACT.to_string(),
            repo_dir: PathBuf::from("."),
            dry_run: false,
        }
    }
}

/// How a workflow run ended. Every variant is a successful exit.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// Patch releases never register a new series
    SkippedPatch { tag: ReleaseTag },

    /// The candidate series is already listed; nothing was written
    AlreadyPresent { entry: ReleaseSeries },

    /// The candidate series was appended and the file rewritten
    Added { entry: ReleaseSeries, path: PathBuf },

    /// Dry run: the candidate series would have been appended
    WouldAdd { entry: ReleaseSeries, path: PathBuf },
}

impl UpdateOutcome {
    /// Whether `metadata.yaml` was rewritten
    pub fn wrote_file(&self) -> bool {
        matches!(self, UpdateOutcome::Added { .. })
    }
}

/// Main update workflow
///
/// 1. Parse the tag; patch releases stop here
/// 2. Derive the candidate series (same major, minor + 1)
/// 3. Load `metadata.yaml` from the repository root
/// 4. Stop if the series is already registered
/// 5. Append the series and write the file back
pub fn run_update(args: &UpdateArgs) -> Result<UpdateOutcome> {
    let tag = ReleaseTag::parse(&args.tag)?;

    if tag.is_patch() {
        return Ok(UpdateOutcome::SkippedPatch { tag });
    }

    let entry = ReleaseSeries::next_after(&tag, args.contract.as_str())?;

    let path = metadata_path(&args.repo_dir);
    let mut metadata: Metadata = load_metadata(&path)?;

    if !metadata.add_series(entry.clone()) {
        return Ok(UpdateOutcome::AlreadyPresent { entry });
    }

    if args.dry_run {
        return Ok(UpdateOutcome::WouldAdd { entry, path });
    }

    save_metadata(&path, &metadata)?;
    Ok(UpdateOutcome::Added { entry, path })
}
