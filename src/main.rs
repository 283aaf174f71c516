//! Reviewlens CLI - pros/cons digests for product reviews
//!
//! The application logic is contained in lib.rs, and this file is
//! responsible for parsing arguments and handling top-level errors.

use clap::{Parser, Subcommand};
use colored::Colorize;
use reviewlens::{digest, themes, Config, LlmClient, ReviewStore, Source, StaticStore};

#[derive(Parser)]
#[command(name = "reviewlens")]
#[command(author, version, about = "Pros/cons digest of recent product reviews", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Digest a product's reviews from a JSON data file
    Digest {
        /// Path to the review data file
        data: String,
        /// Product id to digest; omit to list available products
        #[arg(long)]
        product: Option<u64>,
    },
    /// Print the theme catalog used by the local summariser
    Themes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Digest { data, product } => {
            let store = StaticStore::load(&data)?;

            let Some(product_id) = product else {
                println!("Products in {}:", data);
                for p in store.products() {
                    println!(
                        "  {} {} ({:.1}/5, {} reviews)",
                        p.id, p.name, p.average_rating, p.review_count
                    );
                }
                return Ok(());
            };

            let config = Config::load()?;
            if config.api_key().is_none() {
                eprintln!("Note: no API key configured, digest will use the local summariser.");
            }
            let client = LlmClient::new(config)?;
            let result = digest(&store, &client, product_id).await?;

            let tag = match result.source {
                Source::Ai => "AI".green(),
                Source::Local => "LOCAL".yellow(),
            };
            println!(
                "=== {} ({:.1}/5 from {} reviews) [{}] ===\n",
                store
                    .product(product_id)
                    .map(|p| p.name)
                    .unwrap_or_default(),
                result.average_rating,
                result.review_count,
                tag
            );

            println!("👍 Pros:");
            if result.pros.is_empty() {
                println!("  (none)");
            }
            for pro in &result.pros {
                println!("  • {}", pro);
            }

            println!("\n👎 Cons:");
            if result.cons.is_empty() {
                println!("  (none)");
            }
            for con in &result.cons {
                println!("  • {}", con);
            }
        }
        Commands::Themes => {
            println!("Theme keywords and their labels:\n");
            for theme in themes::THEMES {
                println!("  {:12} → {}", theme, themes::humanize(theme));
            }
        }
    }

    Ok(())
}
