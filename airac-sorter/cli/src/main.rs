use std::path::PathBuf;
use std::process::ExitCode;

use airac_sorter_lib::{
    ChangelogError, Config, DEFAULT_CHANGELOG_URL, DEFAULT_OUTPUT_FILE, Output, run,
};
use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Sort a sector file changelog into AIRAC, other and contributor sections.
///
/// Only the newest release (everything before the second heading) is read.
///
/// Examples:
///   airac-sorter                                # changelog.md -> output.txt
///   airac-sorter --in CHANGELOG.md --out report.txt
///   airac-sorter --url                          # fetch the published changelog
///   airac-sorter --url https://example.com/CHANGELOG.md --stdout
#[derive(Debug, Parser)]
#[command(name = "airac-sorter")]
#[command(version)]
struct Cli {
    /// Changelog file to read [default: changelog.md]
    #[arg(short = 'i', long = "in", value_name = "FILE")]
    input: Option<PathBuf>,

    /// File to write the report to.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        default_value = DEFAULT_OUTPUT_FILE,
        conflicts_with = "stdout"
    )]
    output: PathBuf,

    /// Write the report to stdout instead of a file.
    #[arg(long)]
    stdout: bool,

    /// Fetch the changelog over HTTP instead of reading a file.
    ///
    /// Without a value the published UK sector file changelog is used.
    /// Ignored when --in is given.
    #[arg(
        short = 'u',
        long,
        value_name = "URL",
        num_args = 0..=1,
        default_missing_value = DEFAULT_CHANGELOG_URL
    )]
    url: Option<String>,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(self) -> Config {
        let output = if self.stdout {
            Output::Stdout
        } else {
            Output::File(self.output)
        };

        Config::resolve(self.input, self.url, output)
    }
}

#[derive(Debug, Error)]
enum SorterError {
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
}

/// Initialize tracing subscriber based on verbosity level.
///
/// `RUST_LOG` takes precedence. Otherwise only warnings are shown unless
/// `-v` is given. Logs go to stderr so `--stdout` reports stay clean.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,airac_sorter=info,airac_sorter_lib=info".to_string(),
            2 => "info,airac_sorter=debug,airac_sorter_lib=debug".to_string(),
            _ => "debug,airac_sorter=trace,airac_sorter_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match sort(cli.config()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn sort(config: Config) -> Result<(), SorterError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("airac-sorter/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(SorterError::Client)?;

    let changelog = run(&config, &client).await?;
    info!(
        output = %config.output,
        cycles = changelog.airacs.len(),
        contributors = changelog.contributors.len(),
        "done"
    );

    Ok(())
}
