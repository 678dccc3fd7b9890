use std::path::Path;

use crate::{
    forge::{request::Branch, traits::MockForge},
    test_helpers::{test_release, test_repository},
};

/// Registers the reads every command performs: no config file, `test/repo`
/// with `main` as default branch, and the given releases.
pub fn expect_repository_state(
    mock_forge: &mut MockForge,
    releases: Vec<(u64, &'static str, &'static str)>,
) {
    mock_forge
        .expect_get_file_content()
        .withf(|path| path == "release-manager.toml")
        .times(1)
        .returning(|_| Ok(None));
    mock_forge
        .expect_get_repository()
        .times(1)
        .returning(|| Ok(test_repository()));

    let listed = releases.clone();
    mock_forge.expect_list_releases().times(1).returning(move || {
        Ok(listed
            .iter()
            .map(|(id, tag, target)| test_release(*id, tag, target))
            .collect())
    });

    if let Some((id, tag, target)) = releases.first().copied() {
        mock_forge
            .expect_get_release()
            .withf(move |requested| *requested == id)
            .times(1)
            .returning(move |_| Ok(test_release(id, tag, target)));
        mock_forge
            .expect_get_branch()
            .withf(move |branch| branch == target)
            .times(1)
            .returning(move |branch| {
                Ok(Branch {
                    name: branch.to_string(),
                    sha: "def456".into(),
                    protected: false,
                    html_url: format!("https://github.com/test/repo/tree/{branch}"),
                })
            });
    } else {
        mock_forge.expect_get_release().never();
        mock_forge.expect_get_branch().never();
    }
}

pub async fn read_json(path: &Path) -> serde_json::Value {
    let content = tokio::fs::read_to_string(path).await.unwrap();
    serde_json::from_str(&content).unwrap()
}
