// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Gather the target URLs (arguments, or one line from stdin)
// 3. For each target: normalize -> robots.txt -> run the chosen tool
// 4. Write the text/CSV/JSON reports
// 5. Exit with proper code (0 = success, 1 = broken links, 2 = error)
//
// Targets are processed one after another. A target that is empty, blocked
// by robots.txt or unreachable never stops the rest of the batch.
// =============================================================================

mod checker;
mod cli;
mod config;
mod error;
mod logging;
mod output;
mod robots;
mod tools;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use checker::{check_page, normalize_url, Fetch, HttpFetcher};
use cli::{split_targets, Cli, Commands};
use error::TargetError;
use output::{render_console, Formats, ReportLayout, ReportRow};
use robots::RobotsGate;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = nothing broken
//   Ok(1) = broken links found
//   Err   = unexpected error (reported as exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.quiet);

    let config = cli.config();
    let targets = cli.command.targets();

    let mut urls = split_targets(&targets.urls);
    if urls.is_empty() {
        urls = prompt_for_targets()?;
    }
    if urls.is_empty() {
        println!("\nNo URL(s) provided. Exiting program.");
        return Ok(0);
    }

    let fetcher = HttpFetcher::new(&config)?;
    let mut gate = RobotsGate::new();
    let layout = layout_for(&cli.command);

    log::info!("Inspecting {} target(s)", urls.len());

    let mut rows = Vec::new();
    let mut found_broken = false;

    for raw in &urls {
        let page_url = match admit_target(&fetcher, &mut gate, config.ignore_robots, raw).await {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Skipping {:?}: {}", raw, e);
                println!("\nSkipping {}: {}", raw, e);
                continue;
            }
        };

        let row = match &cli.command {
            Commands::Broken(_) => {
                let report = check_page(&fetcher, &page_url).await;
                found_broken |= report.has_broken_links();
                ReportRow::from_link_report(&report)
            }
            Commands::Pages(_) => ReportRow::from_found_links(&tools::find_pages(&fetcher, &page_url).await),
            Commands::Social(_) => {
                ReportRow::from_found_links(&tools::find_social_links(&fetcher, &page_url).await)
            }
        };

        println!("\n{}", render_console(layout, &row).trim_end());
        rows.push(row);
    }

    let formats = Formats {
        csv: targets.csv,
        json: targets.json,
    };
    let written = output::write_reports(&config.output_dir, layout, &rows, formats)?;
    println!();
    for path in written {
        println!("Results saved to {}", path.display());
    }

    log::info!("Finished {} of {} target(s)", rows.len(), urls.len());

    Ok(if found_broken { 1 } else { 0 })
}

// Normalizes one raw target and checks robots.txt for it
async fn admit_target(
    fetcher: &dyn Fetch,
    gate: &mut RobotsGate,
    ignore_robots: bool,
    raw: &str,
) -> Result<String, TargetError> {
    let page_url = normalize_url(raw)?;

    if !ignore_robots {
        match gate.is_allowed(fetcher, &page_url).await {
            Ok(true) => {}
            Ok(false) => return Err(TargetError::RobotsDisallowed(page_url)),
            Err(e) => return Err(TargetError::RobotsUnreachable(page_url, e)),
        }
    }

    Ok(page_url)
}

fn layout_for(command: &Commands) -> &'static ReportLayout {
    match command {
        Commands::Broken(_) => &output::BROKEN_LINKS,
        Commands::Pages(_) => &output::PAGES,
        Commands::Social(_) => &output::SOCIAL_LINKS,
    }
}

// Reads one comma separated line of URLs from stdin
fn prompt_for_targets() -> Result<Vec<String>> {
    print!("\nEnter URL(s) to check (separated by commas): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(split_targets(&[line]))
}
