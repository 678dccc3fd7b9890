//! Release candidate workflows built on top of the forge.

/// Concurrent snapshot of repository, latest release and release branch.
pub mod batch_info;

/// Pipeline that cuts a release candidate branch and prerelease.
pub mod candidate;

/// Lookup of the most recent release managed by this tool.
pub mod latest;

/// Computation of the next release candidate branch, tag and name.
pub mod next;

/// Progress and result types reported by the workflows.
pub mod types;
