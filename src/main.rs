use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::path::PathBuf;

use poetry_release::cli::{CancelPoint, Outcome, ReleaseWorkflow, VcsState};
use poetry_release::config;
use poetry_release::git::Git2Repository;
use poetry_release::tools::SystemRunner;
use poetry_release::ui::{self, TerminalPrompter};

#[derive(clap::Parser)]
#[command(
    name = "poetry-release",
    version,
    about = "Interactively bump, build, publish and tag a Poetry package"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Print debug logs")]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    match try_main(args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            ui::display_error(&err.to_string());
            let code = err
                .downcast_ref::<poetry_release::ReleaseError>()
                .map(|e| e.exit_code())
                .unwrap_or(1);
            std::process::exit(code);
        }
    }
}

fn try_main(args: Args) -> Result<i32> {
    let root = std::env::current_dir().context("cannot determine working directory")?;
    let config = config::load_config(args.config.as_deref(), &root)?;
    debug!("configuration: {:?}", config);

    let repo = Git2Repository::discover(&root);
    let vcs = match &repo {
        Ok(repo) => VcsState::Available(repo),
        Err(e) => VcsState::Unavailable(e.to_string()),
    };

    let tools = SystemRunner::new();
    let prompter = TerminalPrompter::new();
    let workflow = ReleaseWorkflow::new(&config, &root, &tools, vcs, &prompter);

    match workflow.run()? {
        Outcome::Released { context, tag } => {
            let tagged = tag
                .map(|tag| format!(" (tag {})", tag))
                .unwrap_or_default();
            ui::display_success(&format!(
                "Released {} {}{}",
                context.package, context.next_version, tagged
            ));
        }
        Outcome::Cancelled(point) => {
            debug!("cancelled at {:?}", point);
            if point == CancelPoint::Publish {
                ui::display_status("Built artifacts were left in place.");
            }
        }
    }

    Ok(0)
}
