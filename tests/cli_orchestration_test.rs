// tests/cli_orchestration_test.rs
use rc_gate::cli::orchestration::{run_gate_workflow, GateWorkflowArgs, WorkflowResult};
use rc_gate::config::Config;
use rc_gate::runner::MockRunner;
use rc_gate::GateError;

fn args(tag_name: &str, commit_id: &str) -> GateWorkflowArgs {
    GateWorkflowArgs {
        tag_name: tag_name.to_string(),
        commit_id: commit_id.to_string(),
        dry_run: false,
    }
}

#[test]
fn test_successful_workflow_runs_no_rollback() {
    let runner = MockRunner::new()
        .respond("git tag --points-at fake_sha", "5.5.0-rc2\n5.5.0-rc10")
        .respond("git tag", "5.5.0-rc1\n5.5.0-rc2\n5.5.0-rc10\nother-tag");

    let result = run_gate_workflow(&args("5.5.0", "fake_sha"), &Config::default(), &runner).unwrap();

    assert_eq!(
        result,
        WorkflowResult {
            tag_name: "5.5.0".to_string(),
            commit_id: "fake_sha".to_string(),
            highest: "5.5.0-rc10".to_string(),
            commit_candidates: vec!["5.5.0-rc2".to_string(), "5.5.0-rc10".to_string()],
        }
    );
    assert_eq!(runner.calls(), vec!["git tag --points-at fake_sha", "git tag"]);
}

#[test]
fn test_rejected_candidate_is_rolled_back() {
    let runner = MockRunner::new()
        .respond("git tag --points-at fake_sha", "5.5.0-rc2")
        .respond("git tag", "5.5.0-rc2\n5.5.0-rc10")
        .respond("git push origin --delete 5.5.0", "")
        .respond("gh release delete 5.5.0 --yes", "");

    let err = run_gate_workflow(&args("5.5.0", "fake_sha"), &Config::default(), &runner)
        .unwrap_err();

    assert!(matches!(err, GateError::HighestNotOnCommit { .. }));
    assert_eq!(
        runner.calls(),
        vec![
            "git tag --points-at fake_sha",
            "git tag",
            "git push origin --delete 5.5.0",
            "gh release delete 5.5.0 --yes",
        ]
    );
}

#[test]
fn test_command_failure_is_rolled_back_and_reported() {
    // Every command fails, including the rollback deletions.
    let runner = MockRunner::new().fail_all("Test error");

    let err = run_gate_workflow(&args("5.5.0", "fake_sha"), &Config::default(), &runner)
        .unwrap_err();

    assert!(matches!(err, GateError::CommandFailed(_)));
    assert!(err.to_string().contains("Test error"));
    assert_eq!(runner.call_count(), 3, "query, tag deletion, release deletion");
}

#[test]
fn test_missing_arguments_skip_rollback() {
    let runner = MockRunner::new();

    let err = run_gate_workflow(&args("", ""), &Config::default(), &runner).unwrap_err();

    assert!(matches!(err, GateError::InvalidArguments(_)));
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn test_dry_run_only_queries() {
    let runner = MockRunner::new()
        .respond("git tag --points-at fake_sha", "")
        .respond("git tag", "");
    let dry_run = GateWorkflowArgs {
        dry_run: true,
        ..args("5.5.0", "fake_sha")
    };

    let err = run_gate_workflow(&dry_run, &Config::default(), &runner).unwrap_err();

    assert!(matches!(err, GateError::NoValidCandidates { .. }));
    assert_eq!(runner.calls(), vec!["git tag --points-at fake_sha"]);
}

#[test]
fn test_configured_remote_is_used_for_rollback() {
    let mut config = Config::default();
    config.commands.remote = "upstream".to_string();
    let runner = MockRunner::new()
        .respond("git tag --points-at fake_sha", "")
        .respond("git push upstream --delete v5.5.0", "")
        .respond("gh release delete v5.5.0 --yes", "");

    let err = run_gate_workflow(&args("v5.5.0", "fake_sha"), &config, &runner).unwrap_err();

    assert!(matches!(err, GateError::NoValidCandidates { .. }));
    assert!(runner
        .calls()
        .contains(&"git push upstream --delete v5.5.0".to_string()));
}
