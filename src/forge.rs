//! Interface to the GitHub forge.
//!
//! Provides token-based authentication, release and reference management,
//! and repository information through a common trait so that workflows can
//! be exercised against mocks.

/// Configuration and authentication for the forge connection.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Wrapper adding logging and dry-run behaviour to a forge.
pub mod manager;

/// Request and response types exchanged with the forge.
pub mod request;

/// Common trait for forge platform abstraction.
pub mod traits;

/// Error inspection helpers for forge failures.
pub mod util;
