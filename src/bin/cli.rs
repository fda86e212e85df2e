use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use hive_ai_engine::{
    AiEngine, ContentItem, EngineOptions, RankOptions, Ranker, TfidfRanker, TokenPattern,
};

#[derive(Parser)]
#[command(name = "hive-ai-cli")]
#[command(about = "Hive AI CLI", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tokenizer used to build the vector space
    #[arg(short, long, value_enum, default_value = "whitespace")]
    tokens: Tokens,
}

#[derive(Clone, Copy, ValueEnum)]
enum Tokens {
    Whitespace,
    Word,
}

impl From<Tokens> for TokenPattern {
    fn from(tokens: Tokens) -> Self {
        match tokens {
            Tokens::Whitespace => TokenPattern::Whitespace,
            Tokens::Word => TokenPattern::Word,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidate texts against a query
    Rank {
        /// Query text
        query: String,

        /// Candidate texts
        #[arg(required = true)]
        candidates: Vec<String>,

        /// Keep only scores strictly above this value
        #[arg(long)]
        threshold: Option<f64>,

        /// Maximum results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Run keyword moderation on a text
    Moderate {
        /// Text to check
        text: String,
    },

    /// Smart search over a JSON array of content objects
    Search {
        /// Search query
        query: String,

        /// Path to the JSON file
        #[arg(short, long)]
        file: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let pattern = TokenPattern::from(cli.tokens);

    match cli.command {
        Commands::Rank {
            query,
            candidates,
            threshold,
            limit,
        } => {
            println!("🔍 Ranking {} candidates for: {}", candidates.len(), query);

            let ranker = TfidfRanker::new(pattern)?;
            let options = RankOptions { threshold, limit };
            let texts: Vec<&str> = candidates.iter().map(String::as_str).collect();
            let ranked = ranker.rank(&query, &texts, &options)?;

            if ranked.is_empty() {
                println!("\n❌ No candidate passed the threshold");
            }
            for (i, candidate) in ranked.iter().enumerate() {
                println!(
                    "   {}. {} - {:.4} ({}%)",
                    i + 1,
                    candidates[candidate.index],
                    candidate.score,
                    hive_ai_engine::core::to_percentage(candidate.score)
                );
            }
        }

        Commands::Moderate { text } => {
            let engine = AiEngine::new(EngineOptions::default())?;
            let report = engine.moderate(&text);

            println!("🛡️  Moderation:");
            println!("   Safe: {}", report.is_safe);
            println!("   Toxicity: {:.1}", report.toxicity_score);
            println!("   Flags: {}", report.flags.join(", "));
            println!("   Action: {:?}", report.action);
        }

        Commands::Search { query, file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file))?;
            let content: Vec<ContentItem> = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not a JSON array of objects", file))?;

            let engine = AiEngine::new(EngineOptions {
                token_pattern: pattern,
                ..EngineOptions::default()
            })?;
            let results = engine.smart_search(&query, content)?;

            println!("🔍 {} results for: {}", results.len(), query);
            for (i, item) in results.iter().enumerate() {
                let title = item.get("title").and_then(|t| t.as_str()).unwrap_or("(untitled)");
                println!("   {}. {} - {}%", i + 1, title, item["match_percentage"]);
            }
        }
    }

    Ok(())
}
