//! `dep-checkr` — inspect Java dependency listings.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]) and start logging ([`logging`]).
//! 3. Run the subcommand:
//!    - `tree` — classify a `mvn dependency:tree` listing and report transitive
//!      dependencies missing from the direct ones ([`tree`]);
//!    - `duplicates` / `split` — jar filename analyses ([`jars`]);
//!    - `resolve` — look jar filenames up on Maven Central ([`registry`]) and
//!      write `<dependency>` declarations ([`report::pom`]).
//! 4. Render the result as terminal text or JSON ([`report`]).
//! 5. Exit `0`, or `1` for `tree --strict` when a groupId:artifactId gap is found.

mod cli;
mod config;
mod input;
mod jars;
mod logging;
mod models;
mod registry;
mod report;
mod tree;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use cli::{Cli, Command, ReportFormat};
use config::{load_config, Config};
use models::{ResolveSummary, ResolvedJar};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    logging::init(&config.logging, cli.verbose, cli.quiet);
    debug!("{:?}", config);

    match cli.command {
        Command::Tree { ref file, strict } => {
            let lines = input::read_lines(file)?;
            let analysis = tree::analyze(&lines);
            info!(
                "{} mains with groupId:artifactId gaps, {} with artifactId gaps",
                analysis.group_artifact.len(),
                analysis.artifact_only.len()
            );

            match cli.report {
                ReportFormat::Terminal => report::terminal::render_tree(&analysis, cli.quiet),
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
            }

            if strict && !analysis.group_artifact.is_empty() {
                std::process::exit(1);
            }
        }
        Command::Duplicates { ref file } => {
            let names = input::read_jar_names(file)?;
            let groups = jars::duplicates::find_duplicates(&names);

            match cli.report {
                ReportFormat::Terminal => report::terminal::render_duplicates(&groups, cli.quiet),
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&groups)?),
            }
        }
        Command::Split {
            ref file,
            ref out_dir,
        } => {
            let names = input::read_jar_names(file)?;
            let summary = jars::splitter::split_to_files(
                &names,
                &out_dir.join(&config.files.with_version),
                &out_dir.join(&config.files.without_version),
            )?;

            match cli.report {
                ReportFormat::Terminal => report::terminal::render_split(&summary),
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
        }
        Command::Resolve {
            ref file,
            ref out_dir,
        } => {
            let names = input::read_jar_names(file)?;
            let summary = resolve_online(&names, &config, out_dir, cli.quiet).await?;

            match cli.report {
                ReportFormat::Terminal => report::terminal::render_resolve(&summary),
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
        }
    }

    Ok(())
}

/// Look every jar up on the search service, one request at a time, and write
/// the generated declarations and the unresolved names under `out_dir`.
///
/// A failed lookup only marks that jar as unresolved.
async fn resolve_online(
    names: &[String],
    config: &Config,
    out_dir: &Path,
    quiet: bool,
) -> Result<ResolveSummary> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.search.timeout_secs))
        .build()?;

    let pb = if !quiet {
        let pb = ProgressBar::new(names.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let outcomes: Vec<(&str, Option<ResolvedJar>)> = stream::iter(names)
        .then(|jar| {
            let client = &client;
            let pb = &pb;
            async move {
                if let Some(pb) = pb {
                    pb.set_message(jar.clone());
                }
                let resolved = resolve_one(client, config, jar).await;
                if let Some(pb) = pb {
                    pb.inc(1);
                }
                (jar.as_str(), resolved)
            }
        })
        .collect()
        .await;

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let mut resolved = Vec::new();
    let mut unresolved = Vec::new();
    for (jar, outcome) in outcomes {
        match outcome {
            Some(r) => resolved.push(r),
            None => unresolved.push(jar),
        }
    }

    let output_file = out_dir.join(&config.files.generated_dependencies);
    let unresolved_file = out_dir.join(&config.files.unresolved);
    report::pom::write_dependencies(&output_file, &resolved)?;
    jars::splitter::write_names(&unresolved_file, &unresolved)?;

    if !quiet && !unresolved.is_empty() {
        eprintln!(
            "  {} {} jar(s) could not be resolved, see {}",
            "!".yellow(),
            unresolved.len(),
            unresolved_file.display()
        );
    }

    Ok(ResolveSummary {
        total: names.len(),
        resolved: resolved.len(),
        failed: unresolved.len(),
        output_file,
        unresolved_file,
    })
}

async fn resolve_one(
    client: &reqwest::Client,
    config: &Config,
    jar: &str,
) -> Option<ResolvedJar> {
    let Some((artifact_id, version)) = registry::maven::parse_jar_name(jar) else {
        warn!("{}: not a versioned jar name", jar);
        return None;
    };

    match registry::maven::search_group_id(client, &config.search, artifact_id, version).await {
        Ok(Some(group_id)) => {
            debug!("{} -> {}:{}:{}", jar, group_id, artifact_id, version);
            Some(ResolvedJar {
                jar: jar.to_string(),
                group_id,
                artifact_id: artifact_id.to_string(),
                version: version.to_string(),
            })
        }
        Ok(None) => {
            warn!("{}: no match for a:{} v:{}", jar, artifact_id, version);
            None
        }
        Err(e) => {
            warn!("{}: lookup failed: {:#}", jar, e);
            None
        }
    }
}
