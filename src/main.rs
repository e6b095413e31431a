use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use metadata_update::cli::{run_update, UpdateArgs};
use metadata_update::domain::DEFAULT_CONTRACT;
use metadata_update::ui;
use metadata_update::MetadataUpdateError;

/// Environment variable carrying the pushed tag name
const TAG_ENV_VAR: &str = "GITHUB_REF_NAME";

#[derive(clap::Parser)]
#[command(
    name = "metadata-update",
    version,
    about = "Register a new release series in metadata.yaml when a minor release tag is published"
)]
struct Args {
    #[arg(long, default_value = DEFAULT_CONTRACT, help = "Contract value for new release entry")]
    contract: String,

    #[arg(long, default_value = ".", help = "Root directory of the repository")]
    repo_dir: PathBuf,

    #[arg(long, help = "Preview what would happen without writing metadata.yaml")]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let tag = match read_tag() {
        Ok(tag) => tag,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_status(&format!("Processing tag: {}", tag));

    let update_args = UpdateArgs {
        tag,
        contract: args.contract,
        repo_dir: args.repo_dir,
        dry_run: args.dry_run,
    };

    match run_update(&update_args) {
        Ok(outcome) => {
            ui::display_outcome(&outcome);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn read_tag() -> metadata_update::Result<String> {
    match std::env::var(TAG_ENV_VAR) {
        Ok(tag) if !tag.is_empty() => Ok(tag),
        _ => Err(MetadataUpdateError::config(format!(
            "{} environment variable not set",
            TAG_ENV_VAR
        ))),
    }
}
