use color_eyre::eyre::eyre;
use tempfile::TempDir;

use super::common::{expect_repository_state, read_json};
use crate::{
    command::create_rc::execute,
    forge::{
        request::{Comparison, CreatedRef, CreatedRelease, LatestCommit},
        traits::MockForge,
    },
    release::next::BumpLevel,
    test_helpers::create_test_manager,
};

const COMPARE_URL: &str =
    "https://github.com/test/repo/compare/rc/1.1.0...rc/1.2.0";
const RELEASE_URL: &str = "https://github.com/test/repo/releases/tag/rc-1.2.0";

fn expect_candidate_writes(mock_forge: &mut MockForge, previous: &'static str) {
    mock_forge
        .expect_get_latest_commit()
        .withf(|branch| branch == "main")
        .times(1)
        .returning(|_| {
            Ok(LatestCommit {
                sha: "abc123".into(),
                message: "feat: add widgets".into(),
                html_url: "https://github.com/test/repo/commit/abc123".into(),
            })
        });
    mock_forge
        .expect_create_ref()
        .withf(|req| req.sha == "abc123" && req.branch == "rc/1.2.0")
        .times(1)
        .returning(|req| {
            Ok(CreatedRef {
                ref_name: format!("refs/heads/{}", req.branch),
                sha: req.sha,
            })
        });
    mock_forge
        .expect_get_comparison()
        .withf(move |req| {
            req.previous_branch == previous && req.next_branch == "rc/1.2.0"
        })
        .times(1)
        .returning(|_| {
            Ok(Comparison {
                ahead_by: 4,
                html_url: COMPARE_URL.into(),
            })
        });
    mock_forge
        .expect_create_release()
        .withf(|req| {
            req.next.rc_release_tag == "rc-1.2.0"
                && req.next.rc_branch == "rc/1.2.0"
                && req.next.release_name == "Version 1.2.0"
        })
        .times(1)
        .returning(|req| {
            Ok(CreatedRelease {
                id: 99,
                name: req.next.release_name,
                tag_name: req.next.rc_release_tag,
                html_url: RELEASE_URL.into(),
            })
        });
}

#[test_log::test(tokio::test)]
async fn writes_created_candidate_as_json() {
    let mut mock_forge = MockForge::new();
    expect_repository_state(&mut mock_forge, vec![(7, "rc-1.1.0", "rc/1.1.0")]);
    expect_candidate_writes(&mut mock_forge, "rc/1.1.0");
    let forge = create_test_manager(mock_forge);

    let temp_dir = TempDir::new().unwrap();
    let out_file = temp_dir.path().join("rc.json");

    execute(
        &forge,
        BumpLevel::Minor,
        Some(out_file.to_string_lossy().to_string()),
    )
    .await
    .unwrap();

    let json = read_json(&out_file).await;
    assert_eq!(json["created_tag"], "rc-1.2.0");
    assert_eq!(json["previous_tag"], "rc-1.1.0");
    assert_eq!(json["comparison_url"], COMPARE_URL);
    assert_eq!(json["release_url"], RELEASE_URL);
    assert_eq!(json["release_name"], "Version 1.2.0");
}

#[tokio::test]
async fn first_candidate_compares_against_default_branch() {
    let mut mock_forge = MockForge::new();
    expect_repository_state(&mut mock_forge, vec![]);
    mock_forge
        .expect_get_latest_commit()
        .times(1)
        .returning(|_| {
            Ok(LatestCommit {
                sha: "abc123".into(),
                message: "initial commit".into(),
                html_url: "https://github.com/test/repo/commit/abc123".into(),
            })
        });
    mock_forge
        .expect_create_ref()
        .withf(|req| req.branch == "rc/1.0.0")
        .times(1)
        .returning(|req| {
            Ok(CreatedRef {
                ref_name: format!("refs/heads/{}", req.branch),
                sha: req.sha,
            })
        });
    mock_forge
        .expect_get_comparison()
        .withf(|req| req.previous_branch == "main" && req.next_branch == "rc/1.0.0")
        .times(1)
        .returning(|_| {
            Ok(Comparison {
                ahead_by: 1,
                html_url: "https://github.com/test/repo/compare/main...rc/1.0.0"
                    .into(),
            })
        });
    mock_forge
        .expect_create_release()
        .withf(|req| req.next.rc_release_tag == "rc-1.0.0")
        .times(1)
        .returning(|req| {
            Ok(CreatedRelease {
                id: 1,
                name: req.next.release_name,
                tag_name: req.next.rc_release_tag,
                html_url: "https://github.com/test/repo/releases/tag/rc-1.0.0"
                    .into(),
            })
        });
    let forge = create_test_manager(mock_forge);

    let temp_dir = TempDir::new().unwrap();
    let out_file = temp_dir.path().join("rc.json");

    execute(
        &forge,
        BumpLevel::Major,
        Some(out_file.to_string_lossy().to_string()),
    )
    .await
    .unwrap();

    let json = read_json(&out_file).await;
    assert_eq!(json["created_tag"], "rc-1.0.0");
    assert!(json["previous_tag"].is_null());
    assert_eq!(
        json["comparison_url"],
        "https://github.com/test/repo/compare/main...rc/1.0.0"
    );
}

#[tokio::test]
async fn writes_nothing_when_branch_already_exists() {
    let mut mock_forge = MockForge::new();
    expect_repository_state(&mut mock_forge, vec![(7, "rc-1.1.0", "rc/1.1.0")]);
    mock_forge.expect_get_latest_commit().times(1).returning(|_| {
        Ok(LatestCommit {
            sha: "abc123".into(),
            message: "feat: add widgets".into(),
            html_url: "https://github.com/test/repo/commit/abc123".into(),
        })
    });
    mock_forge
        .expect_create_ref()
        .times(1)
        .returning(|_| Err(eyre!("Reference already exists")));
    mock_forge.expect_get_comparison().never();
    mock_forge.expect_create_release().never();
    let forge = create_test_manager(mock_forge);

    let temp_dir = TempDir::new().unwrap();
    let out_file = temp_dir.path().join("rc.json");

    let err = execute(
        &forge,
        BumpLevel::Minor,
        Some(out_file.to_string_lossy().to_string()),
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("rc/1.2.0"));
    assert!(!out_file.exists());
}
