//! Persistence of the build and revision numbers between builds.
//!
//! The version file holds a single version string, `major.minor.build.revision`. Only the build
//! and revision numbers are read back; the major and minor versions always come from the caller.
//! The file is assumed to have a single writer.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::strategy::{BuildStrategy, RevisionStrategy};
use crate::version::{Version, VersionParseError};

const BUILD_STRATEGIES_REQUIRING_VERSION_FILE: [BuildStrategy; 2] =
    [BuildStrategy::Fixed, BuildStrategy::Increment];
const REVISION_STRATEGIES_REQUIRING_VERSION_FILE: [RevisionStrategy; 3] =
    [RevisionStrategy::Fixed, RevisionStrategy::Increment, RevisionStrategy::BuildIncrement];

#[derive(thiserror::Error, Debug)]
pub enum VersionStoreError {
    #[error("A version file is required by the selected build and revision strategies.")]
    MissingVersionFile,
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] VersionParseError),
}

/// Whether any of the strategies computes its number from the previous version.
pub fn requires_persistence(
    build_strategy: BuildStrategy,
    revision_strategy: RevisionStrategy,
) -> bool {
    BUILD_STRATEGIES_REQUIRING_VERSION_FILE.contains(&build_strategy)
        || REVISION_STRATEGIES_REQUIRING_VERSION_FILE.contains(&revision_strategy)
}

/// Loads the previous version.
///
/// Returns `major.minor.0.0` without touching the file system when the strategies don't require
/// persistence, and on the first run, when the version file doesn't exist yet.
pub fn load(
    version_file: &Path,
    major: u32,
    minor: u32,
    build_strategy: BuildStrategy,
    revision_strategy: RevisionStrategy,
) -> Result<Version, VersionStoreError> {
    if !requires_persistence(build_strategy, revision_strategy) {
        debug!("The version file is not used by {build_strategy} and {revision_strategy}.");
        return Ok(Version::from_major_minor(major, minor));
    }
    if is_blank(version_file) {
        return Err(VersionStoreError::MissingVersionFile);
    }

    let content = match fs::read_to_string(version_file) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("Version file {} does not exist, starting from zero.", version_file.display());
            return Ok(Version::from_major_minor(major, minor));
        }
        Err(err) => return Err(err.into()),
    };
    let stored: Version = content.parse()?;
    debug!("Loaded version {stored} from {}.", version_file.display());
    Ok(stored.with_major_minor(major, minor))
}

/// Overwrites the version file with `version`.
pub fn save(version_file: &Path, version: &Version) -> Result<(), VersionStoreError> {
    if is_blank(version_file) {
        return Err(VersionStoreError::MissingVersionFile);
    }
    fs::write(version_file, version.to_string())?;
    info!("Saved version {version} to {}.", version_file.display());
    Ok(())
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}
