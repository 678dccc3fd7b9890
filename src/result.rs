//! Result type shared by every fallible operation in the crate.
//!
//! Errors travel as `color_eyre` reports so that remote failures reach the
//! caller untouched, while domain failures are raised from
//! [`ReleaseManagerError`](crate::error::ReleaseManagerError) and can be
//! recovered with `downcast_ref`.
//!
//! ```rust,ignore
//! use crate::result::Result;
//! use color_eyre::eyre::Context;
//!
//! async fn load(forge: &ForgeManager) -> Result<Config> {
//!     forge
//!         .load_config()
//!         .await
//!         .wrap_err("failed to load release-manager.toml")
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout the crate.
pub type Result<T> = EyreResult<T>;
