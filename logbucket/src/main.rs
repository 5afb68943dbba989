use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use logbucket_core::logging::init_logging;
use logbucket_core::pipeline::process_logs;
use logbucket_core::pipeline::types::ProcessRequest;
use std::fs;

#[derive(Parser, Debug)]
#[command(
    name = "logbucket",
    version,
    about = "Merge remote log files into a time-bucketed summary"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the given log files and print the aggregated report as JSON
    Process {
        /// Upper bound on simultaneously in-flight fetches (1-30)
        #[arg(long, default_value_t = 4)]
        concurrency: usize,

        /// Path to a JSON request file ({"concurrency": .., "sources": [..]});
        /// overrides the command-line sources
        #[arg(long)]
        request: Option<String>,

        /// Log file URLs
        sources: Vec<String>,
    },
}

fn load_request(
    concurrency: usize,
    request: Option<String>,
    sources: Vec<String>,
) -> Result<ProcessRequest> {
    if let Some(path) = request {
        if !sources.is_empty() {
            bail!("pass either --request or source URLs, not both");
        }

        let body = fs::read_to_string(&path)
            .with_context(|| format!("failed to read request file {path}"))?;
        let parsed: ProcessRequest = serde_json::from_str(&body)
            .with_context(|| format!("failed to parse request file {path}"))?;
        return Ok(parsed);
    }

    Ok(ProcessRequest {
        concurrency,
        sources,
    })
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Command::Process {
            concurrency,
            request,
            sources,
        } => {
            let request = match load_request(concurrency, request, sources) {
                Ok(request) => request,
                Err(e) => {
                    eprintln!("logbucket: {e:#}");
                    std::process::exit(1);
                }
            };

            match process_logs(&request).await {
                Ok(report) => {
                    // The report itself is the program output; logs go to stderr.
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&report).expect("report serialization failed")
                    );
                }
                Err(e) => {
                    eprintln!("logbucket: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
