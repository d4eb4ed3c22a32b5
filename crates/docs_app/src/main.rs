//! `docs_parser`: scrapes docs.python.org and peps.python.org.
mod cli;
mod logging;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use docs_core::{OutputLayout, SiteConfig};
use docs_engine::{
    control_output, run_mode, ExtractionPatterns, FetchError, LogProgressSink, OutputError,
    ParserError, ResponseCache, ReqwestFetcher, ScrapeContext,
};
use docs_logging::{docs_error, docs_info, docs_warn};

use crate::cli::Cli;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("invalid site url: {0}")]
    Site(#[from] url::ParseError),
    #[error("cannot build http client: {0}")]
    Client(#[from] FetchError),
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error("cannot write results: {0}")]
    Output(#[from] OutputError),
}

impl AppError {
    /// Label used in the final error line.
    fn category(&self) -> &'static str {
        match self {
            AppError::Client(_) | AppError::Parser(ParserError::ConnectionFailure { .. }) => {
                "connection error"
            }
            AppError::Parser(ParserError::TagNotFound(_)) => "tag lookup error",
            _ => "parsing error",
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let layout = OutputLayout::new(cli.root.clone());
    logging::initialize(&layout.logs_dir());

    docs_info!("Parser started");
    docs_info!("Command-line arguments: {:?}", cli);

    let code = match run(&cli, &layout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            docs_error!("Parser failed with {}: {}", err.category(), err);
            ExitCode::FAILURE
        }
    };

    docs_info!("Parser finished");
    code
}

async fn run(cli: &Cli, layout: &OutputLayout) -> Result<(), AppError> {
    let site = SiteConfig::python_org()?;
    let fetcher = open_session(cli, layout).await?;
    let patterns = ExtractionPatterns::compile()?;
    let progress = LogProgressSink;
    let ctx = ScrapeContext {
        fetcher: &fetcher,
        site: &site,
        patterns: &patterns,
        layout,
        progress: &progress,
    };

    if let Some(table) = run_mode(cli.mode, &ctx).await? {
        let at = chrono::Local::now().naive_local();
        let mut console = io::stdout().lock();
        control_output(&table, cli.output, cli.mode, layout, at, &mut console)?;
    }
    Ok(())
}

/// The run's fetcher, with its cache emptied first when asked.
async fn open_session(cli: &Cli, layout: &OutputLayout) -> Result<ReqwestFetcher, AppError> {
    let mut fetcher = ReqwestFetcher::new(cli.fetch_settings())?;
    if !cli.no_cache {
        fetcher = fetcher.with_cache(ResponseCache::new(layout.cache_dir()));
    }

    if cli.clear_cache {
        match fetcher.clear_cache().await {
            Ok(()) => docs_info!("Response cache cleared"),
            Err(err) => docs_warn!("Could not clear response cache: {}", err),
        }
    }
    Ok(fetcher)
}
