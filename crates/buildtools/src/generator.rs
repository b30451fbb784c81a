//! Version number generation.
//!
//! [`generate_version`] is a pure function of the current version, the two strategies, the
//! starting date and the current instant. The other entry points wrap it with defaults and with
//! the version file round trip of [`crate::store`].

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;

use std::path::Path;

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use tracing::{debug, info};

use crate::date_utils::{months_since, years_since, DateError};
use crate::store::{self, requires_persistence, VersionStoreError};
use crate::strategy::{BuildStrategy, RevisionStrategy};
use crate::version::{Version, MAX_VERSION_COMPONENT};

/// The major version used when none is given.
pub const DEFAULT_MAJOR_VERSION: u32 = 1;
/// The minor version used when none is given.
pub const DEFAULT_MINOR_VERSION: u32 = 0;

// Keeps the year digit of a YearMonthDay build number in a single decimal digit.
const YEAR_MONTH_DAY_YEAR_CYCLE: u32 = 7;
const SECONDS_PER_DAY: u64 = 24 * 3600;
const DAY_FRACTION_SCALE: u64 = i16::MAX as u64;

#[derive(thiserror::Error, Debug)]
pub enum VersionGenerationError {
    #[error(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    Store(#[from] VersionStoreError),
}

/// Computes the version that follows `current`.
///
/// The build number is computed first, then the revision number (which may depend on whether the
/// build number changed). Both are then wrapped into `[0, 65535]`. The major and minor components
/// are kept.
///
/// # Errors
/// Returns [`DateError::ReferenceDateInFuture`] if `starting_date` is later than `now` and the
/// build strategy is calendar based.
pub fn generate_version(
    current: Version,
    build_strategy: BuildStrategy,
    revision_strategy: RevisionStrategy,
    starting_date: NaiveDate,
    now: DateTime<Utc>,
) -> Result<Version, DateError> {
    let build = calculate_build(starting_date, now, current.build, build_strategy)?;
    let revision = calculate_revision(
        now,
        current.revision,
        revision_strategy,
        build != u64::from(current.build),
    );

    let version = Version::new(
        current.major,
        current.minor,
        correct_overflow(build),
        correct_overflow(revision),
    );
    debug!(
        %build_strategy,
        %revision_strategy,
        %current,
        uncorrected_build = build,
        uncorrected_revision = revision,
        "Generated version {version}."
    );
    Ok(version)
}

/// Generates a version from `major.minor.0.0` without a version file.
pub fn generate_version_from(
    major: u32,
    minor: u32,
    build_strategy: BuildStrategy,
    revision_strategy: RevisionStrategy,
    starting_date: NaiveDate,
    now: DateTime<Utc>,
) -> Result<Version, DateError> {
    generate_version(
        Version::from_major_minor(major, minor),
        build_strategy,
        revision_strategy,
        starting_date,
        now,
    )
}

/// Loads the previous version from `version_file`, generates the next one and saves it back.
///
/// The file is only read and written if one of the strategies depends on the previous version
/// (see [`requires_persistence`]). Nothing is written if the generation fails.
pub fn generate_version_with_file(
    version_file: &Path,
    major: u32,
    minor: u32,
    build_strategy: BuildStrategy,
    revision_strategy: RevisionStrategy,
    starting_date: NaiveDate,
    now: DateTime<Utc>,
) -> Result<Version, VersionGenerationError> {
    let current = store::load(version_file, major, minor, build_strategy, revision_strategy)?;
    let version = generate_version(current, build_strategy, revision_strategy, starting_date, now)?;
    if requires_persistence(build_strategy, revision_strategy) {
        store::save(version_file, &version)?;
    }
    Ok(version)
}

/// Same as [`generate_version_with_file`], with the default major and minor versions (`1.0`).
pub fn generate_version_with_file_default(
    version_file: &Path,
    build_strategy: BuildStrategy,
    revision_strategy: RevisionStrategy,
    starting_date: NaiveDate,
    now: DateTime<Utc>,
) -> Result<Version, VersionGenerationError> {
    generate_version_with_file(
        version_file,
        DEFAULT_MAJOR_VERSION,
        DEFAULT_MINOR_VERSION,
        build_strategy,
        revision_strategy,
        starting_date,
        now,
    )
}

/// Generates a `1.0` version at the current UTC instant, using today as the starting date.
pub fn generate_version_now(
    version_file: &Path,
    build_strategy: BuildStrategy,
    revision_strategy: RevisionStrategy,
) -> Result<Version, VersionGenerationError> {
    let now = Utc::now();
    info!("Generating a version at {now} with today as the starting date.");
    generate_version_with_file_default(
        version_file,
        build_strategy,
        revision_strategy,
        now.date_naive(),
        now,
    )
}

/// Computes the build number, before overflow correction.
pub(crate) fn calculate_build(
    starting_date: NaiveDate,
    now: DateTime<Utc>,
    current_build: u32,
    build_strategy: BuildStrategy,
) -> Result<u64, DateError> {
    let today = now.date_naive();
    let build = match build_strategy {
        BuildStrategy::Fixed => u64::from(current_build),
        BuildStrategy::Increment => u64::from(current_build) + 1,
        BuildStrategy::YearMonthDay => {
            let mut years = years_since(today, starting_date)?;
            while years >= YEAR_MONTH_DAY_YEAR_CYCLE {
                years -= YEAR_MONTH_DAY_YEAR_CYCLE;
            }
            u64::from(years) * 10000 + u64::from(today.month()) * 100 + u64::from(today.day())
        }
        BuildStrategy::MonthDay => {
            u64::from(months_since(today, starting_date)?) * 100 + u64::from(today.day())
        }
        BuildStrategy::BuildDay => {
            u64::from(years_since(today, starting_date)?) * 1000 + u64::from(today.ordinal())
        }
    };
    Ok(build)
}

/// Computes the revision number, before overflow correction.
pub(crate) fn calculate_revision(
    now: DateTime<Utc>,
    current_revision: u32,
    revision_strategy: RevisionStrategy,
    build_changed: bool,
) -> u64 {
    let seconds_since_midnight = u64::from(now.num_seconds_from_midnight());
    match revision_strategy {
        RevisionStrategy::Fixed => u64::from(current_revision),
        RevisionStrategy::Increment => u64::from(current_revision) + 1,
        RevisionStrategy::BuildIncrement if build_changed => 0,
        RevisionStrategy::BuildIncrement => u64::from(current_revision) + 1,
        RevisionStrategy::HourMinute => u64::from(now.hour() * 100 + now.minute()),
        RevisionStrategy::DaySecond => seconds_since_midnight / 10,
        RevisionStrategy::DayFraction => {
            seconds_since_midnight * DAY_FRACTION_SCALE / SECONDS_PER_DAY
        }
    }
}

/// Wraps a build or revision number into `[0, 65535]` by repeatedly subtracting 65535.
pub(crate) fn correct_overflow(mut value: u64) -> u32 {
    let max = u64::from(MAX_VERSION_COMPONENT);
    while value > max {
        value -= max;
    }
    // Fits since `value <= 65535`.
    value as u32
}
