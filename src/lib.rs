pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod forge;
pub mod release;
pub mod result;

pub use error::ReleaseManagerError;
pub use forge::{
    github::Github,
    manager::ForgeManager,
    request::{NextReleaseInfo, Release},
};
pub use release::{
    batch_info::get_batch_info,
    candidate::{CreateRcParams, RcCreatedHandler, create_rc},
    types::{BatchInfo, RcCreated, ResponseStep},
};
pub use result::Result;

#[cfg(test)]
pub mod test_helpers;
