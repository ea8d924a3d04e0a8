use anyhow::{Context, Result};
use clap::Parser;

use rc_gate::cli::{run_gate_workflow, GateWorkflowArgs};
use rc_gate::config;
use rc_gate::runner::SystemRunner;
use rc_gate::ui;

#[derive(clap::Parser)]
#[command(
    name = "rc-gate",
    about = "Validate that a commit carries the highest release-candidate tag, rolling back otherwise"
)]
struct Args {
    #[arg(
        short,
        long,
        env = "GITHUB_REF_NAME",
        help = "Release tag name (e.g. 5.5.0 or v5.5.0)"
    )]
    tag: Option<String>,

    #[arg(
        short = 's',
        long,
        env = "GITHUB_SHA",
        help = "Commit the release-candidate tag should point at"
    )]
    commit: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Log rollback deletions instead of running them")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("rc-gate {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = config::load_config(args.config.as_deref())
        .with_context(|| "Failed to load rc-gate configuration")?;

    let workflow_args = GateWorkflowArgs {
        tag_name: args.tag.unwrap_or_default(),
        commit_id: args.commit.unwrap_or_default(),
        dry_run: args.dry_run,
    };

    match run_gate_workflow(&workflow_args, &config, &SystemRunner::new()) {
        Ok(result) => {
            ui::display_success(&format!(
                "{} is the highest rc tag and points at {}",
                result.highest, result.commit_id
            ));
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
