//! Behavioural tests for batch pull request approval.

use std::cell::RefCell;
use std::rc::Rc;

use camino::Utf8PathBuf;
use greenlight::telemetry::NoopTelemetrySink;
use greenlight::{
    ApprovalError, BatchResult, BatchRunner, Credential, CredentialSet, FileAuditLogger,
    OctocrabReviewGateway,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "ghp_abcdefghij";

/// Shared runtime wrapper that can be stored in rstest-bdd Slot.
#[derive(Clone)]
struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Shared temporary directory holding audit partitions for one scenario.
#[derive(Clone)]
struct SharedTempDir(Rc<TempDir>);

impl SharedTempDir {
    fn base(&self) -> Result<Utf8PathBuf, ApprovalError> {
        Utf8PathBuf::from_path_buf(self.0.path().to_path_buf()).map_err(|_| {
            ApprovalError::Configuration {
                message: "temp directory path must be UTF-8".to_owned(),
            }
        })
    }
}

#[derive(ScenarioState, Default)]
struct BatchState {
    runtime: Slot<SharedRuntime>,
    server: Slot<MockServer>,
    credentials: Slot<CredentialSet>,
    audit_dir: Slot<SharedTempDir>,
    result: Slot<BatchResult>,
}

#[fixture]
fn batch_state() -> BatchState {
    BatchState::default()
}

/// Ensures the runtime and server are initialised in `BatchState`.
fn ensure_runtime_and_server(batch_state: &BatchState) -> Result<SharedRuntime, ApprovalError> {
    if batch_state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new().map_err(|error| ApprovalError::Io {
            message: format!("failed to create Tokio runtime: {error}"),
        })?;
        batch_state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = batch_state
        .runtime
        .get()
        .ok_or_else(|| ApprovalError::Configuration {
            message: "runtime not initialised".to_owned(),
        })?;

    if batch_state.server.with_ref(|_| ()).is_none() {
        batch_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("pull request {pr:u64} is {state} on the mock server")]
fn seed_pull_request(
    batch_state: &BatchState,
    pr: u64,
    state: String,
) -> Result<(), ApprovalError> {
    let runtime = ensure_runtime_and_server(batch_state)?;
    let cleaned_state = state.trim_matches('"').to_owned();

    let pr_body = json!({
        "number": pr,
        "title": format!("Change {pr}"),
        "state": cleaned_state,
        "user": { "login": "octocat" }
    });

    let fetch_mock = Mock::given(method("GET"))
        .and(path(format!("/repos/octo/repo/pulls/{pr}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&pr_body));

    let review_body = json!({ "id": 1, "state": "APPROVED" });
    let submit_mock = Mock::given(method("POST"))
        .and(path(format!("/repos/octo/repo/pulls/{pr}/reviews")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&review_body));

    batch_state
        .server
        .with_ref(|server| {
            runtime.block_on(fetch_mock.mount(server));
            runtime.block_on(submit_mock.mount(server));
        })
        .ok_or_else(|| ApprovalError::Configuration {
            message: "mock server not initialised".to_owned(),
        })
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a credential named {name}")]
fn seed_credential(batch_state: &BatchState, name: String) -> Result<(), ApprovalError> {
    let cleaned_name = name.trim_matches('"');
    batch_state
        .credentials
        .set(CredentialSet::new(vec![Credential::new(cleaned_name, TOKEN)]));
    Ok(())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the operator approves pull requests {numbers} with credential {name}")]
fn approve_batch(
    batch_state: &BatchState,
    numbers: String,
    name: String,
) -> Result<(), ApprovalError> {
    let runtime = batch_state
        .runtime
        .get()
        .ok_or_else(|| ApprovalError::Configuration {
            message: "runtime not initialised".to_owned(),
        })?;
    let server_url = batch_state
        .server
        .with_ref(MockServer::uri)
        .ok_or_else(|| ApprovalError::Configuration {
            message: "mock server not initialised".to_owned(),
        })?;
    let credentials = batch_state
        .credentials
        .get()
        .ok_or_else(|| ApprovalError::Configuration {
            message: "credential store not initialised".to_owned(),
        })?;

    let audit_dir = SharedTempDir(Rc::new(TempDir::new().map_err(|error| ApprovalError::Io {
        message: format!("failed to create audit directory: {error}"),
    })?));
    let audit_base = audit_dir.base()?;
    batch_state.audit_dir.set(audit_dir);

    let urls_blob = numbers
        .trim_matches('"')
        .split(',')
        .map(|number| format!("https://github.com/octo/repo/pull/{}", number.trim()))
        .collect::<Vec<_>>()
        .join("\n");

    let api_base = Url::parse(&server_url)
        .map_err(|error| ApprovalError::InvalidUrl(error.to_string()))?;
    let gateway = OctocrabReviewGateway::new(api_base);
    let audit = FileAuditLogger::new(audit_base, Box::new(NoopTelemetrySink));
    let runner = BatchRunner::new(&gateway, &audit, "release-bot", "Looks good");

    let cleaned_name = name.trim_matches('"').to_owned();
    let result = runtime.block_on(async {
        runner.run(&credentials, &cleaned_name, &urls_blob).await
    });

    batch_state.result.set(result);
    Ok(())
}

#[then("the batch reports {succeeded:usize} succeeded out of {total:usize}")]
fn assert_totals(
    batch_state: &BatchState,
    succeeded: usize,
    total: usize,
) -> Result<(), ApprovalError> {
    let matches_totals = batch_state
        .result
        .with_ref(|result| result.succeeded == succeeded && result.total == total)
        .unwrap_or(false);

    if matches_totals {
        Ok(())
    } else {
        Err(ApprovalError::Configuration {
            message: format!("expected {succeeded}/{total}, got different batch totals"),
        })
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the failed URLs are {urls}")]
fn assert_failed_urls(batch_state: &BatchState, urls: String) -> Result<(), ApprovalError> {
    let expected: Vec<String> = urls
        .trim_matches('"')
        .split(',')
        .map(|url| url.trim().to_owned())
        .collect();

    let matches_failed = batch_state
        .result
        .with_ref(|result| result.failed == expected)
        .unwrap_or(false);

    if matches_failed {
        Ok(())
    } else {
        Err(ApprovalError::Configuration {
            message: format!("failed URL list did not match {expected:?}"),
        })
    }
}

#[then("the audit partition contains {count:usize} lines")]
fn assert_audit_lines(batch_state: &BatchState, count: usize) -> Result<(), ApprovalError> {
    let actual = read_audit_lines(batch_state)?;

    if actual == count {
        Ok(())
    } else {
        Err(ApprovalError::Configuration {
            message: format!("expected {count} audit lines but found {actual}"),
        })
    }
}

#[then("no audit partition is written")]
fn assert_no_audit_partition(batch_state: &BatchState) -> Result<(), ApprovalError> {
    let actual = read_audit_lines(batch_state)?;

    if actual == 0 {
        Ok(())
    } else {
        Err(ApprovalError::Configuration {
            message: format!("expected no audit lines but found {actual}"),
        })
    }
}

/// Counts the audit lines across every partition in the scenario directory.
fn read_audit_lines(batch_state: &BatchState) -> Result<usize, ApprovalError> {
    let base = batch_state
        .audit_dir
        .with_ref(SharedTempDir::base)
        .ok_or_else(|| ApprovalError::Configuration {
            message: "audit directory not initialised".to_owned(),
        })??;

    let entries = std::fs::read_dir(&base).map_err(|error| ApprovalError::Io {
        message: format!("failed to list audit directory: {error}"),
    })?;

    let mut lines = 0;
    for entry in entries {
        let entry_path = entry
            .map_err(|error| ApprovalError::Io {
                message: format!("failed to read audit entry: {error}"),
            })?
            .path();
        let content = std::fs::read_to_string(&entry_path).map_err(|error| ApprovalError::Io {
            message: format!("failed to read audit partition: {error}"),
        })?;
        lines += content.lines().count();
    }

    Ok(lines)
}

#[scenario(path = "tests/features/batch_approval.feature", index = 0)]
fn approve_open_batch(batch_state: BatchState) {
    let _ = batch_state;
}

#[scenario(path = "tests/features/batch_approval.feature", index = 1)]
fn closed_pull_requests_fail(batch_state: BatchState) {
    let _ = batch_state;
}

#[scenario(path = "tests/features/batch_approval.feature", index = 2)]
fn unknown_credential_aborts(batch_state: BatchState) {
    let _ = batch_state;
}
