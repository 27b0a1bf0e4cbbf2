//! Folio CLI - terminal front end for the folio book viewer

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a book interactively in the terminal
    Read {
        /// Input HTML file
        input: String,

        /// CSS selector of the container holding the page blocks
        #[arg(long, default_value = "#book-pages")]
        container: String,
    },

    /// Print the synthesized table of contents
    Toc {
        /// Input HTML file
        input: String,

        /// CSS selector of the container holding the page blocks
        #[arg(long, default_value = "#book-pages")]
        container: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a single spread to HTML
    Render {
        /// Input HTML file
        input: String,

        /// Absolute page index to open the spread at
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        page: isize,

        /// CSS selector of the container holding the page blocks
        #[arg(long, default_value = "#book-pages")]
        container: String,

        /// Output the full spread view as JSON
        #[arg(long)]
        json: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "folio_cli=debug,folio_core=debug"
    } else {
        "folio_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Read { input, container } => commands::read(&input, &container),

        Commands::Toc {
            input,
            container,
            json,
        } => commands::toc(&input, &container, json),

        Commands::Render {
            input,
            page,
            container,
            json,
            output,
        } => commands::render(&input, &container, page, json, output.as_deref()),
    }
}
