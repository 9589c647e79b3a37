use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use veriscan_client::ApiClient;
use veriscan_core::AUTO_DETECT;
use veriscan_session::AnalysisSession;

mod display;

#[derive(Parser)]
#[command(name = "veriscan", version, about = "Client for the remote news-analysis service")]
struct Cli {
    /// Base URL of the analysis service.
    #[arg(
        long,
        global = true,
        env = "VERISCAN_API_URL",
        default_value = "http://localhost:8080"
    )]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit an article for classification.
    Analyze {
        #[arg(long)]
        title: String,
        /// Article body, inline.
        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,
        /// Read the article body from a file instead.
        #[arg(long)]
        content_file: Option<PathBuf>,
        #[arg(long, default_value = "")]
        source_url: String,
        #[arg(long, default_value = "")]
        author: String,
        /// Language code, or auto-detect.
        #[arg(long, default_value = AUTO_DETECT)]
        language: String,
    },
    /// Show service-wide analysis statistics.
    Stats,
    /// List past analyses in server order.
    History {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
    },
    /// List supported languages with model availability.
    Languages,
    /// Detect the language of a text sample.
    Detect {
        #[arg(long)]
        text: String,
    },
    /// Rate a stored analysis.
    Feedback {
        #[arg(long)]
        id: i64,
        /// Rating from 1 to 5.
        #[arg(long)]
        rating: i32,
        #[arg(long)]
        comment: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    tracing::debug!(base_url = %cli.base_url, "veriscan v{}", env!("CARGO_PKG_VERSION"));
    let client = ApiClient::new(cli.base_url);

    match cli.command {
        Command::Analyze {
            title,
            content,
            content_file,
            source_url,
            author,
            language,
        } => {
            let content = match (content, content_file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading article body from {}", path.display()))?,
                (None, None) => anyhow::bail!("provide --content or --content-file"),
            };
            run_analyze(client, title, content, source_url, author, language).await
        }
        Command::Stats => {
            let stats = client.statistics().await.context("fetching statistics")?;
            display::print_statistics(&stats);
            Ok(())
        }
        Command::History { page, size } => {
            let entries = match (page, size) {
                (None, None) => client.history().await,
                (page, size) => {
                    client
                        .history_page(page.unwrap_or(0), size.unwrap_or(10))
                        .await
                }
            }
            .context("fetching history")?;
            display::print_history(&entries);
            Ok(())
        }
        Command::Languages => {
            let languages = client.languages().await.context("fetching languages")?;
            display::print_languages(&languages);
            Ok(())
        }
        Command::Detect { text } => {
            let outcome = client
                .detect_language(&text)
                .await
                .context("detecting language")?;
            display::print_detection(&outcome);
            Ok(())
        }
        Command::Feedback {
            id,
            rating,
            comment,
        } => {
            client
                .submit_feedback(id, rating, comment.as_deref())
                .await
                .context("submitting feedback")?;
            println!("Feedback recorded for analysis {id}");
            Ok(())
        }
    }
}

/// Drive one analyze submission through a hosted session and render the
/// outcome. Blocking errors (validation or transport) exit non-zero.
async fn run_analyze(
    client: ApiClient,
    title: String,
    content: String,
    source_url: String,
    author: String,
    language: String,
) -> anyhow::Result<()> {
    let mut session = AnalysisSession::new(client);
    {
        let form = session.form_mut();
        form.title = title;
        form.content = content;
        form.source_url = source_url;
        form.author = author;
        form.language = language;
    }

    session.submit().await;

    if let Some(message) = session.error() {
        anyhow::bail!("{message}");
    }
    let report = session
        .result()
        .context("analysis finished without a result")?;
    display::print_report(report);
    if let Some(stats) = session.statistics() {
        display::print_statistics_line(stats);
    }
    Ok(())
}
