use std::io;
use std::sync::Arc;

use algoq_reports::app::App;
use algoq_reports::config::{Cli, Config};
use algoq_reports::infra::contents::GithubContentsClient;
use algoq_reports::infra::opener::SystemOpener;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = Config::try_from(Cli::parse())
        .map_err(|error| io::Error::other(format!("Error: {error}")))?;
    let _log_guard = algoq_reports::logging::init(&config.log_dir)?;
    info!(
        owner = %config.repository.owner,
        repo = %config.repository.name,
        route = %config.initial_route,
        "starting report browser"
    );

    let contents_client =
        GithubContentsClient::new(config.repository.clone()).map_err(io::Error::other)?;
    let mut app = App::new(config, Arc::new(contents_client), Arc::new(SystemOpener));

    algoq_reports::runtime::run(&mut app).await
}
