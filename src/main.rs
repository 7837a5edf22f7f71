//! pixiv-sync - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use pixiv_sync::{
    api::PixivClient,
    cli::{Args, Command},
    config::Config,
    error::{exit_codes, Error, Result},
    fs::{find_artifacts, remove_artifact, scan_library},
    output::{
        print_error, print_global_stats, print_info, print_library_counts, print_success,
        print_warning,
    },
    sync::run_sync,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::ConfigParse(_)
                | Error::ConfigWrite(_)
                | Error::ConfigValidation { .. }
                | Error::Yaml(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::MissingCredential
                | Error::AuthExpired(_)
                | Error::Api(_)
                | Error::Http(_) => ExitCode::from(exit_codes::API_ERROR as u8),
                Error::ItemFetch { .. } | Error::Io(_) => {
                    ExitCode::from(exit_codes::SYNC_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    match args.command {
        Command::SetToken { token } => {
            let mut config = Config::load(&args.config)?;
            config.set_token(&token)?;
            config.save(&args.config)?;
            print_success(&format!("Token written to {}", args.config.display()));
            Ok(())
        }

        Command::Sync => {
            let config = Config::load(&args.config)?;
            print_info(&format!(
                "Syncing to {} ({} bookmark target(s), {} author target(s))",
                config.download_dir.display(),
                config.bookmarks.len(),
                config.authors.len()
            ));

            let token = config.token().ok_or(Error::MissingCredential)?.to_string();
            let client = PixivClient::new(token)?;

            let stats = run_sync(&config, &client).await?;
            print_global_stats(&stats);

            if stats.targets_failed > 0 {
                let detail = stats
                    .first_error
                    .clone()
                    .unwrap_or_else(|| "see log for details".to_string());
                return Err(Error::Api(format!(
                    "{} target(s) failed ({})",
                    stats.targets_failed, detail
                )));
            }
            Ok(())
        }

        Command::Remove { ids, dry_run } => {
            let config = Config::load(&args.config)?;
            let artifacts = find_artifacts(&config.download_dir)?;

            let mut removed = 0u64;
            for id in ids {
                match artifacts.iter().find(|a| a.record.id == id) {
                    Some(artifact) if dry_run => {
                        print_info(&format!(
                            "Would remove {} ({} file(s))",
                            id,
                            artifact.record.page_count + 1
                        ));
                    }
                    Some(artifact) => {
                        let files = remove_artifact(artifact)?;
                        print_info(&format!("Removed {} ({} file(s))", id, files));
                        removed += 1;
                    }
                    None => {
                        print_warning(&format!("Illust {} not found in local library", id));
                    }
                }
            }

            if !dry_run {
                print_success(&format!("Removed {} illust(s)", removed));
            }
            Ok(())
        }

        Command::RemoveExcluded { dry_run } => {
            let config = Config::load(&args.config)?;
            let artifacts = find_artifacts(&config.download_dir)?;

            let excluded: Vec<_> = artifacts
                .iter()
                .filter(|a| a.is_excluded(&config.filters))
                .collect();

            if excluded.is_empty() {
                print_info("No local illusts match the exclusion filters");
                return Ok(());
            }

            for artifact in &excluded {
                if dry_run {
                    print_info(&format!(
                        "Would remove {} \"{}\" by {}",
                        artifact.record.id, artifact.record.title, artifact.record.author_name
                    ));
                } else {
                    remove_artifact(artifact)?;
                    print_info(&format!(
                        "Removed {} \"{}\" by {}",
                        artifact.record.id, artifact.record.title, artifact.record.author_name
                    ));
                }
            }

            if !dry_run {
                print_success(&format!("Removed {} excluded illust(s)", excluded.len()));
            }
            Ok(())
        }

        Command::Count => {
            let config = Config::load(&args.config)?;
            let counts = scan_library(&config.download_dir)?;
            print_library_counts(&counts);
            Ok(())
        }
    }
}
