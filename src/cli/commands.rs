use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::analytics::{Analyzer, summary_stats};
use crate::filters::{ALL_PARTICIPANTS, ParticipantSelector, apply_selector};
use crate::lexicon::{Lexicon, Stopwords};
use crate::models::{AnalysisReport, LabeledCount, SummaryStats, Transcript};
use crate::parsers::parse_transcript;
use crate::utils::format::format_count;
use crate::utils::read_transcript;

#[derive(Parser)]
#[command(name = "whatsapp-chat-analyzer")]
#[command(version = "0.1.0")]
#[command(about = "Statistics and text analysis for exported WhatsApp chats", long_about = None)]
pub struct Cli {
    /// Stopword list replacing the built-in one (one word per line)
    #[arg(long, global = true, env = "WA_ANALYZER_STOPWORDS")]
    pub stopwords: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show headline statistics for a chat export
    Summary {
        /// Exported chat (.txt)
        file: PathBuf,
        /// Participant to analyze, or "All"
        #[arg(short, long, default_value = ALL_PARTICIPANTS)]
        user: String,
    },
    /// Run every analysis and print the full report
    Report {
        /// Exported chat (.txt)
        file: PathBuf,
        /// Participant to analyze, or "All"
        #[arg(short, long, default_value = ALL_PARTICIPANTS)]
        user: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the participants of a chat export
    Participants {
        /// Exported chat (.txt)
        file: PathBuf,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Summary { file, user }) => {
            show_summary(file, user)?;
        }
        Some(Commands::Report { file, user, json }) => {
            show_report(file, user, *json, cli.stopwords.as_deref())?;
        }
        Some(Commands::Participants { file }) => {
            show_participants(file)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Read and parse a transcript, turning format errors into a single user-facing message
pub fn load_transcript(path: &Path) -> Result<Transcript> {
    let raw = read_transcript(path)?;
    let transcript = parse_transcript(&raw).map_err(|e| {
        let message = e.user_message();
        anyhow::Error::new(e).context(message)
    })?;
    Ok(transcript)
}

fn build_lexicon(stopwords: Option<&Path>) -> Result<Lexicon> {
    match stopwords {
        Some(path) => {
            let list = Stopwords::load(path).context("Failed to load custom stopwords")?;
            Ok(Lexicon::with_stopwords(list))
        }
        None => Ok(Lexicon::builtin()),
    }
}

fn selector(user: &str) -> ParticipantSelector {
    // FromStr for ParticipantSelector is infallible
    user.parse().unwrap_or_default()
}

fn show_summary(file: &Path, user: &str) -> Result<()> {
    let transcript = load_transcript(file)?;
    let selector = selector(user);
    let selection = apply_selector(transcript.messages(), &selector);
    let stats = summary_stats(&selection);

    print_summary(&selector, &stats);
    Ok(())
}

fn show_report(file: &Path, user: &str, json: bool, stopwords: Option<&Path>) -> Result<()> {
    let transcript = load_transcript(file)?;
    let analyzer = Analyzer::new(build_lexicon(stopwords)?, Default::default());
    let selector = selector(user);
    let report = analyzer.analyze(&transcript, &selector);

    if json {
        let rendered =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", rendered);
    } else {
        print_report(&selector, &report);
    }
    Ok(())
}

fn show_participants(file: &Path) -> Result<()> {
    let transcript = load_transcript(file)?;
    for option in transcript.selector_options() {
        println!("{}", option);
    }
    Ok(())
}

fn print_summary(selector: &ParticipantSelector, stats: &SummaryStats) {
    let formatted = stats.formatted();

    println!("WhatsApp Chat Summary ({})", selector);
    println!("================================");
    println!("Messages");
    println!("  Total messages: {}", formatted.total_messages);
    println!("  Total words: {}", formatted.total_words);
    println!("  Media shared: {}", formatted.media_messages);
    println!("  Links shared: {}", formatted.links);
    println!("Message details");
    println!("  Total characters: {}", formatted.characters);
    println!("  Avg. words per message: {}", formatted.average_words);
    println!("  Longest message: {}", formatted.longest_message);
    println!("  Shortest message: {}", formatted.shortest_message);
    println!("Activity");
    println!("  Most active day: {}", formatted.most_active_day);
    println!("  Active days: {}", formatted.active_days);
    println!("  Longest streak: {} days", formatted.longest_streak);
    println!("  Longest inactive gap: {} days", formatted.longest_gap);
}

fn print_report(selector: &ParticipantSelector, report: &AnalysisReport) {
    print_summary(selector, &report.summary);

    let [month, day, week, hour] = report.averages.formatted();
    println!();
    println!("Averages");
    println!("  Messages per month: {}", month);
    println!("  Messages per day of month: {}", day);
    println!("  Messages per week: {}", week);
    println!("  Messages per hour: {}", hour);

    println!();
    println!("Busiest participants");
    for share in &report.busiest_participants {
        println!("  {}: {} ({:.2}%)", share.participant, format_count(share.messages), share.percent);
    }

    print_histogram("Busiest months", &report.busiest_months);
    print_histogram("Busiest days", &report.busiest_weekdays);
    print_histogram("Busiest weeks", &report.busiest_weeks);
    print_histogram("Busiest hours", &report.busiest_hours);

    println!();
    println!("Activity heatmap");
    println!("  {:<10} {}", "", report.heatmap.columns.join(" | "));
    for (row, cells) in report.heatmap.rows.iter().zip(&report.heatmap.cells) {
        let cells: Vec<String> = cells.iter().map(u64::to_string).collect();
        println!("  {:<10} {}", row, cells.join(" | "));
    }

    println!();
    println!("Top words and emojis");
    for entry in &report.top_terms {
        println!("  {}: words [{}] emojis [{}]", entry.participant, entry.top_words, entry.top_emojis);
    }

    println!();
    println!("Sentiment");
    for entry in &report.sentiment {
        println!(
            "  {}: {} (positive {:.2}%, neutral {:.2}%, negative {:.2}%)",
            entry.participant,
            entry.mood,
            entry.positive_percent,
            entry.neutral_percent,
            entry.negative_percent
        );
    }

    println!();
    println!("Most mentioned");
    for entry in &report.mentions {
        println!("  {}: {}", entry.participant, entry.mentions);
    }
}

fn print_histogram(title: &str, rows: &[LabeledCount]) {
    println!();
    println!("{}", title);
    for row in rows {
        println!("  {}: {}", row.label, format_count(row.count));
    }
}
