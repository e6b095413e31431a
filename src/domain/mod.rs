//! Domain logic - release tags and release series, independent of file I/O

pub mod release;
pub mod tag;

pub use release::{Metadata, ReleaseSeries, DEFAULT_CONTRACT};
pub use tag::{ReleaseKind, ReleaseTag};
