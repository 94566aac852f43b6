//! Fetch-and-print command, useful for checking what a URL extracts to

use clap::Args;
use respin_engine::Fetcher;
use respin_web::HttpFetcher;

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// URL to fetch
    pub url: String,
}

pub fn execute(args: FetchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let fetcher = HttpFetcher::new();
    let text = fetcher.fetch(&args.url)?;
    println!("{}", text);
    Ok(())
}
