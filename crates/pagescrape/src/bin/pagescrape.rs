// ABOUTME: CLI binary for the pagescrape web content scraper.
// ABOUTME: Scrapes URLs, local HTML files, or raw JSON request bodies and prints the extracted data.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pagescrape::{handle_scrape, Client, ScrapeResponse, ScrapedPage};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
    #[value(alias = "md")]
    Markdown,
}

#[derive(Parser, Debug)]
#[command(name = "pagescrape")]
#[command(about = "Fetch web pages and extract title, metadata, and main text")]
struct Args {
    /// Output format for scraped pages
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long = "compact")]
    compact: bool,

    /// HTML file to extract from (requires --url)
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// URL echoed back for --html extraction
    #[arg(long = "url")]
    url: Option<String>,

    /// JSON request body file to run through the request handler ("-" for stdin)
    #[arg(long = "request")]
    request: Option<String>,

    /// Fetch timeout in seconds
    #[arg(long = "timeout-secs", env = "PAGESCRAPE_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Override the User-Agent header
    #[arg(long = "user-agent", env = "PAGESCRAPE_USER_AGENT")]
    user_agent: Option<String>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// URLs to scrape
    #[arg()]
    urls: Vec<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn build_client(args: &Args) -> Client {
    let mut builder = Client::builder().timeout(Duration::from_secs(args.timeout_secs));
    if let Some(ua) = &args.user_agent {
        builder = builder.user_agent(ua.clone());
    }
    builder.build()
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(out)
}

/// Render scraped pages in the requested format.
fn format_pages(pages: &[ScrapedPage], format: Format, compact: bool) -> Result<String> {
    match format {
        Format::Json if pages.len() == 1 => to_json(&pages[0], compact),
        Format::Json => to_json(&pages, compact),
        Format::Text => Ok(pages
            .iter()
            .map(|p| p.result.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")),
        Format::Markdown => Ok(pages
            .iter()
            .map(ScrapedPage::format_markdown)
            .collect::<Vec<_>>()
            .join("\n\n")),
    }
}

fn read_request_body(source: &str) -> Result<Vec<u8>> {
    if source == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read request body from stdin")?;
        Ok(buf)
    } else {
        fs::read(source).with_context(|| format!("failed to read request body {:?}", source))
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("failed to write {:?}", path))
        }
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

async fn run(args: &Args) -> Result<bool> {
    let client = build_client(args);

    if let Some(source) = &args.request {
        let body = read_request_body(source)?;
        let response: ScrapeResponse = handle_scrape(&client, &body).await;
        write_output(args.output.as_deref(), &to_json(&response, args.compact)?)?;
        return Ok(response.is_success());
    }

    let mut pages = Vec::new();
    let mut had_error = false;

    if let Some(html_path) = &args.html {
        let url = args.url.as_deref().unwrap_or_default();
        let html = fs::read_to_string(html_path)
            .with_context(|| format!("error reading file {:?}", html_path))?;
        match client.scrape_html(&html, url) {
            Ok(page) => pages.push(page),
            Err(e) => {
                eprintln!("error extracting {:?}: {}", html_path, e.message());
                had_error = true;
            }
        }
    } else {
        for url in &args.urls {
            match client.scrape(url).await {
                Ok(page) => pages.push(page),
                Err(e) => {
                    eprintln!("error scraping {}: {} {}", url, e.status(), e.message());
                    had_error = true;
                }
            }
        }
    }

    if !pages.is_empty() {
        let rendered = format_pages(&pages, args.format, args.compact)?;
        write_output(args.output.as_deref(), &rendered)?;
    }

    Ok(!had_error)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    if args.html.is_some() && args.url.is_none() {
        eprintln!("error: --url is required when using --html");
        return ExitCode::from(1);
    }

    let modes = [args.html.is_some(), args.request.is_some(), !args.urls.is_empty()];
    match modes.iter().filter(|m| **m).count() {
        0 => {
            eprintln!("error: at least one URL is required, or use --html with --url, or --request");
            return ExitCode::from(1);
        }
        1 => {}
        _ => {
            eprintln!("error: positional URLs, --html, and --request are mutually exclusive");
            return ExitCode::from(1);
        }
    }

    let start = Instant::now();
    let outcome = run(&args).await;
    let elapsed = start.elapsed();

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
