//! Interactive workflow command

use clap::Args;
use respin_core::store::VersionStore;
use respin_engine::run_workflow;
use respin_transform::ReverseSpin;
use respin_web::HttpFetcher;

use crate::prompter::StdinPrompter;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// URL to fetch; prompted for when omitted
    #[arg(long)]
    pub url: Option<String>,

    /// Spin style label (e.g. casual, formal, neutral); prompted for when omitted
    #[arg(long)]
    pub style: Option<String>,
}

pub fn execute(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = VersionStore::new();
    let fetcher = HttpFetcher::new();
    let mut prompter = StdinPrompter::new();

    let outcome = run_workflow(
        &mut store,
        &fetcher,
        &ReverseSpin,
        &mut prompter,
        args.url.as_deref(),
        args.style.as_deref(),
    )?;

    println!("Versions saved:");
    println!("  fetched: {}", outcome.fetched_id);
    println!("  spun:    {}", outcome.spun_id);
    println!("  edited:  {}", outcome.edited_id);

    println!("\n[Diff Between AI and Human Edit]\n");
    if outcome.diff.is_empty() {
        println!("No differences.");
    } else {
        println!("{}", outcome.diff);
    }

    Ok(())
}
