//! truncate-lines: trim text files in place to their first N lines
//! Jobs come from PATH:N arguments and/or a TOML job file; each runs once, in order.

use anyhow::Result;
use clap::{Arg, ArgAction, Command as ClapCommand};
use std::path::PathBuf;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use truncate_lines::commands::run::{handle_run_command, RunArgs};
use truncate_lines::truncate::{parse_job_arg, TruncationJob};

fn build_cli() -> ClapCommand {
    ClapCommand::new("truncate-lines")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Trim text files in place so each keeps only its first N lines")
        .arg(
            Arg::new("job")
                .value_name("PATH:N")
                .help("File to truncate and the number of lines to keep")
                .value_parser(parse_job_arg)
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML job file ([[job]] entries with path and keep_lines)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Report what would be truncated without writing anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the report as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Print a summary after the per-file lines")
                .conflicts_with("json")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log output on stderr (repeatable)")
                .action(ArgAction::Count),
        )
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    let args = RunArgs {
        config: matches.get_one::<PathBuf>("config").cloned(),
        jobs: matches
            .get_many::<TruncationJob>("job")
            .map(|jobs| jobs.cloned().collect())
            .unwrap_or_default(),
        dry_run: matches.get_flag("dry-run"),
        json: matches.get_flag("json"),
        summary: matches.get_flag("summary"),
    };

    // Job failures are reported, not turned into an exit status
    handle_run_command(args)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_parses_jobs_in_order() {
        let matches = build_cli()
            .try_get_matches_from(["truncate-lines", "a.txt:2", "b.txt:0", "--dry-run"])
            .unwrap();
        let jobs: Vec<TruncationJob> = matches
            .get_many::<TruncationJob>("job")
            .unwrap()
            .cloned()
            .collect();
        assert_eq!(
            jobs,
            vec![TruncationJob::new("a.txt", 2), TruncationJob::new("b.txt", 0)]
        );
        assert!(matches.get_flag("dry-run"));
    }

    #[test]
    fn test_rejects_malformed_job() {
        assert!(build_cli()
            .try_get_matches_from(["truncate-lines", "a.txt"])
            .is_err());
    }

    #[test]
    fn test_summary_conflicts_with_json() {
        assert!(build_cli()
            .try_get_matches_from(["truncate-lines", "--json", "--summary", "a:1"])
            .is_err());
    }
}
