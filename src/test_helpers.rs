//! Common test helper functions shared across test modules.
use secrecy::SecretString;

use crate::forge::{
    config::RemoteConfig,
    manager::ForgeManager,
    request::{NextReleaseInfo, Release, ReleaseBuilder, Repository},
    traits::MockForge,
};

/// Creates a test RemoteConfig pointing at `https://github.com/test/repo`.
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig {
        host: "github.com".to_string(),
        scheme: "https".to_string(),
        owner: "test".to_string(),
        repo: "repo".to_string(),
        path: "test/repo".to_string(),
        token: SecretString::from("test-token".to_string()),
        repo_link_base_url: "https://github.com/test/repo".to_string(),
        dry_run: false,
    }
}

/// Wraps a mock forge in a ForgeManager, registering the remote config
/// expectation the manager needs at construction.
///
/// # Example
/// ```ignore
/// let mut mock_forge = MockForge::new();
/// mock_forge.expect_get_repository().returning(|| Ok(test_repository()));
/// let manager = create_test_manager(mock_forge);
/// ```
pub fn create_test_manager(mut mock_forge: MockForge) -> ForgeManager {
    mock_forge
        .expect_remote_config()
        .returning(create_test_remote_config);
    ForgeManager::new(Box::new(mock_forge))
}

/// Repository metadata for `test/repo` with `main` as default branch.
pub fn test_repository() -> Repository {
    Repository {
        owner: "test".into(),
        name: "repo".into(),
        full_name: "test/repo".into(),
        default_branch: "main".into(),
        html_url: "https://github.com/test/repo".into(),
    }
}

/// Published release candidate cut from `target_branch`.
pub fn test_release(id: u64, tag: &str, target_branch: &str) -> Release {
    ReleaseBuilder::default()
        .id(id)
        .name(format!("Release {tag}"))
        .tag_name(tag)
        .target_commitish(target_branch)
        .html_url(format!("https://github.com/test/repo/releases/tag/{tag}"))
        .prerelease(true)
        .build()
        .unwrap()
}

/// Next release info for version `1.2.0`.
pub fn test_next_release() -> NextReleaseInfo {
    NextReleaseInfo {
        rc_branch: "rc/1.2.0".into(),
        rc_release_tag: "rc-1.2.0".into(),
        release_name: "Version 1.2.0".into(),
    }
}
