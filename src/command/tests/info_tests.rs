use tempfile::TempDir;

use super::common::{expect_repository_state, read_json};
use crate::{
    command::info::execute, forge::traits::MockForge,
    test_helpers::create_test_manager,
};

#[tokio::test]
async fn writes_release_and_branch_snapshot() {
    let mut mock_forge = MockForge::new();
    expect_repository_state(&mut mock_forge, vec![(5, "rc-1.1.0", "rc/1.1.0")]);
    let forge = create_test_manager(mock_forge);

    let temp_dir = TempDir::new().unwrap();
    let out_file = temp_dir.path().join("info.json");

    execute(&forge, Some(out_file.to_string_lossy().to_string()))
        .await
        .unwrap();

    let json = read_json(&out_file).await;
    assert_eq!(json["repository"]["full_name"], "test/repo");
    assert_eq!(json["latest_release"]["id"], 5);
    assert_eq!(json["latest_release"]["tag_name"], "rc-1.1.0");
    assert_eq!(json["release_branch"]["name"], "rc/1.1.0");
    assert_eq!(json["release_branch"]["sha"], "def456");
}

#[test_log::test(tokio::test)]
async fn keeps_null_release_branch_without_release() {
    let mut mock_forge = MockForge::new();
    expect_repository_state(&mut mock_forge, vec![]);
    let forge = create_test_manager(mock_forge);

    let temp_dir = TempDir::new().unwrap();
    let out_file = temp_dir.path().join("info.json");

    execute(&forge, Some(out_file.to_string_lossy().to_string()))
        .await
        .unwrap();

    let json = read_json(&out_file).await;
    assert_eq!(json["repository"]["default_branch"], "main");
    assert!(json["latest_release"].is_null());
    assert!(json.get("release_branch").is_some());
    assert!(json["release_branch"].is_null());
}
