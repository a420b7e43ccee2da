use bms_scrape::{ScrapeError, Scraper};
use clap::Parser;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();
    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let scraper = match Scraper::new(&config) {
        Ok(scraper) => scraper,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!("Scraping {} listing pages", config.urls.len());
    let start_time = std::time::Instant::now();

    let outcome = scraper.run_all(&config.urls, print_result).await;

    match outcome {
        Ok(pages) => {
            ::log::info!(
                "Scraping complete - processed {} pages in {:.2} seconds",
                pages,
                start_time.elapsed().as_secs_f64()
            );
            ExitCode::SUCCESS
        }
        Err(e @ ScrapeError::Fetch { .. }) => {
            // Fail fast: nothing is printed for the failing URL or any after it
            println!("{}. Exiting...", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_result(result: bms_scrape::ResultSet) {
    match result.to_pretty_json() {
        Ok(json) => println!("{}", json),
        Err(e) => ::log::error!("Failed to serialize results for {}: {}", result.url, e),
    }
}
