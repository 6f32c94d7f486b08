use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use headline_scraper::{Extraction, FetchConfig, HeadlineService, ScrapeError};

#[derive(Parser, Debug)]
#[command(name = "headline-scraper", version, about = "Pull headline links out of a news page")]
struct Args {
    /// Page to scrape. Prompted for when omitted.
    url: Option<String>,

    /// Print the JSON payload instead of a readable listing
    #[arg(long)]
    json: bool,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Override the User-Agent header
    #[arg(long)]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = FetchConfig::from_env();
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Some(agent) = args.user_agent {
        config = config.with_user_agent(agent);
    }

    let url = match args.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };
    if url.is_empty() {
        println!("No URL entered. Exiting.");
        return Ok(());
    }

    info!("Starting headline scrape of {}", url);
    let service = HeadlineService::new(config)?;
    let outcome = service.scrape_all(&url).await;

    if args.json {
        print_json(&outcome)?;
    } else {
        print_listing(&outcome);
    }

    match outcome {
        Ok(_) => Ok(()),
        Err(e) => std::process::exit(if e.status_code().is_client_error() { 2 } else { 1 }),
    }
}

fn prompt_for_url() -> Result<String> {
    print!("Enter the news website URL to scrape (e.g., https://www.bbc.com/news): ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read URL from stdin")?;
    Ok(line.trim().to_string())
}

fn print_json(outcome: &Result<Extraction, ScrapeError>) -> Result<()> {
    let payload = match outcome {
        Ok(extraction) => serde_json::to_string_pretty(&extraction.headlines),
        Err(e) => serde_json::to_string_pretty(&serde_json::json!({ "error": e.to_string() })),
    }
    .context("Failed to serialize output")?;
    println!("{}", payload);
    Ok(())
}

fn print_listing(outcome: &Result<Extraction, ScrapeError>) {
    let extraction = match outcome {
        Ok(extraction) => extraction,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    if extraction.matched > 0 {
        println!("Found {} possible headlines:\n", extraction.matched);
    }
    for headline in &extraction.headlines {
        println!("{}", headline.title);
        println!("   -> {}\n", headline.link);
    }
    println!("{}", summary(extraction));
}

fn summary(extraction: &Extraction) -> String {
    if extraction.matched == 0 {
        "No headlines found with the current generic selectors.\n\
         Consider inspecting the website's HTML to find a more specific selector."
            .to_string()
    } else if extraction.headlines.is_empty() {
        "No valid headlines could be extracted after filtering.".to_string()
    } else {
        format!("Extracted {} unique headlines.", extraction.headlines.len())
    }
}
