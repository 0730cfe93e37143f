//! Country Explorer - browse country data from the terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use cex_api::HttpCountryService;
use cex_app::config::{self, Settings, API_URL_ENV};
use cex_app::Engine;
use cex_core::{CountryCode, ResultExt, Route};
use clap::Parser;
use color_eyre::eyre::eyre;
use country_explorer::{HeadlessRequest, DEFAULT_HEADLESS_PAGE_SIZE};

/// Country Explorer - browse country data from the terminal
#[derive(Parser, Debug)]
#[command(name = "cex", version)]
#[command(about = "A terminal browser for country data served by a REST API", long_about = None)]
struct Args {
    /// Base URL of the country service (overrides API_URL and the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Fixed page size instead of following the terminal height
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Start on this country's detail view
    #[arg(long, value_name = "CODE")]
    country: Option<String>,

    /// Listing page to print in headless mode
    #[arg(long, value_name = "N", default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    page: u64,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(config::default_config_path)
    }

    fn initial_route(&self) -> cex_core::Result<Route> {
        match &self.country {
            Some(code) => Ok(Route::Country(CountryCode::parse(code)?)),
            None => Ok(Route::Home),
        }
    }
}

fn load_settings(args: &Args) -> Settings {
    let mut settings = match args.config_path() {
        Some(path) => config::load_settings(&path),
        None => Settings::default(),
    };

    if args.page_size.is_some() {
        settings.listing.page_size = args.page_size;
    }
    if args.headless && settings.listing.page_size.is_none() {
        settings.listing.page_size = Some(DEFAULT_HEADLESS_PAGE_SIZE);
    }
    settings
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config_path()
            .ok_or_else(|| eyre!("No config directory on this platform; pass --config"))?;
        config::init_config_file(&path)?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    dotenvy::dotenv().ok();
    cex_core::logging::init()?;

    let settings = load_settings(&args);
    let env_url = std::env::var(API_URL_ENV).ok();
    let api_url = config::resolve_api_url(args.api_url.as_deref(), env_url.as_deref(), &settings);
    let service = HttpCountryService::new(&api_url, settings.api.timeout())
        .context("Creating country service client")?;
    let initial_route = args
        .initial_route()
        .with_context(|| format!("Parsing --country {:?}", args.country))?;

    let engine = Engine::new(settings, api_url, service);

    if args.headless {
        let request = match initial_route {
            Route::Country(code) => HeadlessRequest::Country(code),
            Route::Home => HeadlessRequest::Page(args.page as usize),
        };
        if !country_explorer::run_headless(engine, request).await? {
            std::process::exit(1);
        }
        return Ok(());
    }

    cex_tui::run(engine, initial_route).await?;
    Ok(())
}
