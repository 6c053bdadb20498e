//! Unit tests for the approval engine state machine.

use rstest::rstest;

use crate::approval::engine::ApprovalEngine;
use crate::approval::outcome::ApprovalOutcome;
use crate::github::MockReviewGateway;
use crate::github::error::ApprovalError;
use crate::github::models::test_support::{open_snapshot, snapshot_in_state};

const TOKEN: &str = "ghp_abcdefghij";
const PR_URL: &str = "https://github.com/acme/widgets/pull/42";

#[rstest]
#[tokio::test]
async fn approves_an_open_pull_request() {
    let mut gateway = MockReviewGateway::new();
    gateway
        .expect_pull_request()
        .times(1)
        .returning(|_, _| Ok(open_snapshot("Add pagination", "octocat")));
    gateway
        .expect_submit_approval()
        .times(1)
        .withf(|_, _, message| message == "Looks good")
        .returning(|_, _, _| Ok(()));

    let engine = ApprovalEngine::new(&gateway, "Looks good");
    let report = engine.approve(PR_URL, TOKEN).await;

    assert_eq!(report.outcome, ApprovalOutcome::Approved);
    assert_eq!(
        report.narrative,
        vec![
            "📋 Parsed PR: acme/widgets#42".to_owned(),
            "✅ PR found: 'Add pagination'".to_owned(),
            "📊 PR state: open".to_owned(),
            "👤 PR author: octocat".to_owned(),
            "🚀 Attempting to approve PR...".to_owned(),
            "✅ PR approved successfully!".to_owned(),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn rejects_a_closed_pull_request_without_submitting() {
    let mut gateway = MockReviewGateway::new();
    gateway
        .expect_pull_request()
        .times(1)
        .returning(|_, _| Ok(snapshot_in_state("closed")));
    gateway.expect_submit_approval().never();

    let engine = ApprovalEngine::new(&gateway, "Looks good");
    let report = engine.approve(PR_URL, TOKEN).await;

    assert_eq!(
        report.outcome,
        ApprovalOutcome::Rejected {
            state: "closed".to_owned()
        }
    );
    assert!(
        report
            .narrative
            .contains(&"❌ Cannot approve a closed PR".to_owned()),
        "missing wrong-state line: {:?}",
        report.narrative
    );
}

#[rstest]
#[tokio::test]
async fn fails_on_a_malformed_url_before_touching_the_gateway() {
    let gateway = MockReviewGateway::new();

    let engine = ApprovalEngine::new(&gateway, "Looks good");
    let report = engine.approve("https://github.com/acme/widgets", TOKEN).await;

    assert!(matches!(
        report.outcome,
        ApprovalOutcome::Failed(ApprovalError::MissingPathSegments)
    ));
    assert_eq!(report.narrative, vec!["❌ Invalid PR URL format".to_owned()]);
}

#[rstest]
#[tokio::test]
async fn fails_on_a_malformed_token_after_parsing() {
    let gateway = MockReviewGateway::new();

    let engine = ApprovalEngine::new(&gateway, "Looks good");
    let report = engine.approve(PR_URL, "short").await;

    assert!(matches!(
        report.outcome,
        ApprovalOutcome::Failed(ApprovalError::InvalidTokenFormat)
    ));
    assert_eq!(
        report.narrative,
        vec![
            "📋 Parsed PR: acme/widgets#42".to_owned(),
            "❌ Invalid GitHub token format".to_owned(),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn collapses_missing_and_denied_fetches_into_not_found() {
    let mut gateway = MockReviewGateway::new();
    gateway.expect_pull_request().times(1).returning(|_, _| {
        Err(ApprovalError::PullRequestNotFound {
            message: "GitHub returned 404 Not Found: Not Found".to_owned(),
        })
    });
    gateway.expect_submit_approval().never();

    let engine = ApprovalEngine::new(&gateway, "Looks good");
    let report = engine.approve(PR_URL, TOKEN).await;

    assert!(matches!(
        report.outcome,
        ApprovalOutcome::Failed(ApprovalError::PullRequestNotFound { .. })
    ));
    assert!(
        report
            .narrative
            .contains(&"❌ PR not found or access denied.".to_owned()),
        "missing not-found line: {:?}",
        report.narrative
    );
}

#[rstest]
#[case::invalid_token(401, "💡 Tip: Your GitHub token might be invalid or expired")]
#[case::missing_scope(
    403,
    "💡 Tip: Check if your GitHub token has 'repo' or 'public_repo' permissions"
)]
#[case::self_approval(
    422,
    "💡 Tip: You might be trying to approve your own PR, which is not allowed"
)]
#[tokio::test]
async fn attaches_hints_to_well_known_rejection_codes(
    #[case] status: u16,
    #[case] expected_hint: &str,
) {
    let mut gateway = MockReviewGateway::new();
    gateway
        .expect_pull_request()
        .returning(|_, _| Ok(open_snapshot("Add pagination", "octocat")));
    gateway.expect_submit_approval().returning(move |_, _, _| {
        Err(ApprovalError::ApprovalRejected {
            status,
            body: "Validation Failed".to_owned(),
        })
    });

    let engine = ApprovalEngine::new(&gateway, "Looks good");
    let report = engine.approve(PR_URL, TOKEN).await;

    assert!(matches!(
        report.outcome,
        ApprovalOutcome::Failed(ApprovalError::ApprovalRejected { .. })
    ));
    assert!(
        report
            .narrative
            .contains(&format!("❌ Failed to approve PR: {status}")),
        "missing status line: {:?}",
        report.narrative
    );
    assert!(
        report.narrative.contains(&expected_hint.to_owned()),
        "missing hint: {:?}",
        report.narrative
    );
}
