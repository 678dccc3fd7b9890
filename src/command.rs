//! Command execution for the release manager CLI.
//!
//! - **info**: print repository metadata, the latest managed release and the
//!   branch it was cut from
//! - **create_rc**: compute the next version, cut its branch and open a
//!   prerelease

/// Output helpers shared by commands.
pub mod common;

/// Release candidate creation.
pub mod create_rc;

/// Repository and release snapshot.
pub mod info;
