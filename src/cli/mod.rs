// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands each subcommand to its
// use case. All pipeline logic lives in Layer 2 (application).
//
// Subcommands:
//   1. `scrape`   — fetch source pages into a structured buffer
//   2. `clean`    — normalise the buffer (sentences | citations)
//   3. `generate` — chunk the cleaned text and generate questions
//   4. `run`      — all three, hand-off through the default files

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::Commands;

use crate::application::{
    clean_use_case::{CleanConfig, CleanUseCase},
    generate_use_case::{GenerateConfig, GenerateUseCase},
    scrape_use_case::{ScrapeConfig, ScrapeUseCase},
};

#[derive(Parser, Debug)]
#[command(
    name = "agile-qa",
    version,
    about = "Scrape Agile articles, clean the text, and generate a Q&A dataset with T5."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Scrape(args)   => run_scrape(args.into()),
            Commands::Clean(args)    => run_clean(args.into()),
            Commands::Generate(args) => run_generate(args.into()),
            Commands::Run => {
                run_scrape(ScrapeConfig::default())?;
                run_clean(CleanConfig::default())?;
                run_generate(GenerateConfig::default())
            }
        }
    }
}

fn run_scrape(config: ScrapeConfig) -> Result<()> {
    let use_case = ScrapeUseCase::new(config);
    let summary  = use_case.execute()?;

    if summary.failed > 0 {
        println!("{} of the URLs could not be scraped (see log).", summary.failed);
    }
    println!("Scraping completed! Data saved in '{}'", use_case.config().output);
    Ok(())
}

fn run_clean(config: CleanConfig) -> Result<()> {
    let use_case = CleanUseCase::new(config);
    use_case.execute()?;

    println!("Data cleaning completed! Cleaned text saved to '{}'", use_case.config().output);
    Ok(())
}

fn run_generate(config: GenerateConfig) -> Result<()> {
    let use_case = GenerateUseCase::new(config);
    let pairs    = use_case.execute()?;

    println!(
        "Q&A dataset created with {} pairs! Check '{}'",
        pairs,
        use_case.config().output
    );
    Ok(())
}
