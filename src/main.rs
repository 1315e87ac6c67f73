//! qa-search CLI - ask a programming question, get extracted answers.

use std::sync::{Arc, LazyLock};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use regex::Regex;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use qa_search::{
    HttpFetcher, Link, PageFetcher, Pipeline, SearchEngine, SearchOutput, SearchQuery,
};

/// qa-search - search a Q&A site and extract answers
#[derive(Parser)]
#[command(name = "qa-search")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search query
    #[arg(required = true)]
    query: Vec<String>,

    /// Search engine to use
    #[arg(short, long, default_value = "google")]
    engine: EngineArg,

    /// Site to restrict the search to
    #[arg(short, long, default_value = "stackoverflow.com")]
    site: String,

    /// Number of search results to load
    #[arg(short, long, default_value = "1")]
    results: usize,

    /// Number of answers to load per result
    #[arg(short, long, default_value = "1")]
    answers: usize,

    /// Show only the search result at this index (zero-based)
    #[arg(long)]
    result: Option<usize>,

    /// Show only the answer at this index (zero-based)
    #[arg(long)]
    answer: Option<usize>,

    /// Extract only code
    #[arg(long)]
    code_only: bool,

    /// Show links only, without fetching answers
    #[arg(short, long)]
    links: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Proxy URL (e.g., http://127.0.0.1:8080 or socks5://127.0.0.1:1080);
    /// falls back to the HTTP_PROXY environment variable
    #[arg(short, long)]
    proxy: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum EngineArg {
    Google,
    Duck,
    Bing,
}

impl From<EngineArg> for SearchEngine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Google => SearchEngine::Google,
            EngineArg::Duck => SearchEngine::Duck,
            EngineArg::Bing => SearchEngine::Bing,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    // '^' doubles as '-' so dash-leading terms survive shell option parsing.
    let query_text = cli.query.join(" ").replace('^', "-");

    let proxy = cli
        .proxy
        .clone()
        .or_else(|| std::env::var("HTTP_PROXY").ok());

    let fetcher: Arc<dyn PageFetcher> = match &proxy {
        Some(proxy_url) => {
            if matches!(cli.format, OutputFormat::Text) {
                eprintln!("Using proxy: {}", proxy_url);
            }
            Arc::new(HttpFetcher::with_proxy(proxy_url)?)
        }
        None => Arc::new(HttpFetcher::new()),
    };
    let pipeline = Pipeline::with_fetcher(fetcher);

    let mut query = SearchQuery::new(query_text)
        .with_engine(cli.engine.into())
        .with_site(cli.site.clone())
        .with_results(cli.results)
        .with_answers(cli.answers)
        .code_only(cli.code_only)
        .results_only(cli.links);
    if let Some(index) = cli.result {
        query = query.with_result(index);
    }
    if let Some(index) = cli.answer {
        query = query.with_answer(index);
    }

    let output = pipeline.run(query).await?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Text => print_output(&output),
    }

    Ok(())
}

fn print_output(output: &SearchOutput) {
    if output.is_empty() {
        println!("{}", "No results found".red());
        return;
    }

    match output {
        SearchOutput::Link(Some(link)) => print_link(0, link),
        SearchOutput::Links(links) => {
            for (i, link) in links.iter().enumerate() {
                print_link(i, link);
            }
        }
        SearchOutput::Results(results) => {
            for (i, result) in results.iter().enumerate() {
                println!(
                    "{} {}",
                    format!("#{} {}", i + 1, result.title).yellow().bold(),
                    format!("@{}", result.url).bold()
                );

                if result.answers.is_empty() {
                    println!(
                        "{}",
                        "Result has no answers. Try some other results e.g. --result 2".red()
                    );
                    continue;
                }

                for (j, answer) in result.answers.iter().enumerate() {
                    let n = j + 1;
                    let header = if answer.is_accepted {
                        format!("✔ Answer {}", n).green().bold()
                    } else {
                        format!("• Answer {}", n).yellow().bold()
                    };
                    println!("{}", header);

                    match &answer.text {
                        Some(text) => println!("{}", collapse_blank_runs(text)),
                        None => println!("{}", answer.code.green()),
                    }
                }
            }
        }
        // Covered by the is_empty early return.
        SearchOutput::Link(None) => {}
    }
}

fn print_link(index: usize, link: &Link) {
    println!(
        "{} {}",
        format!("#{} {}", index + 1, link.title).yellow().bold(),
        format!("@{}", link.url).bold()
    );
}

/// Collapses runs of three or more newlines in converted markdown.
fn collapse_blank_runs(text: &str) -> String {
    static BLANK_RUNS: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\n\n\n+").expect("valid regex"));
    BLANK_RUNS.replace_all(text, "\n\n").into_owned()
}
