use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Terminal reading companion with translation, search, and analysis")]
#[command(version)]
pub struct Args {
    /// Document to open in the reader (added to the library if new).
    /// Lists the library when omitted.
    pub file: Option<PathBuf>,

    /// Suppress progress notes on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a document to the library without opening it
    Add {
        /// Path to a text or markdown file
        file: PathBuf,

        /// Title to file the document under (defaults to the file name)
        #[arg(short, long)]
        title: Option<String>,

        /// Document language code (ISO 639-1, e.g., en, fr, yo)
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// List the library
    List,
    /// Open a library document in the reader
    Read {
        /// Document id or title (a unique prefix works)
        document: String,
    },
    /// Remove a document from the library
    Remove {
        /// Document id or title (a unique prefix works)
        document: String,
    },
    /// Translate a file or stdin without touching the library
    Translate {
        /// File to translate (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// Target language code (ISO 639-1, e.g., fr, yo, sw)
        #[arg(short = 't', long = "to")]
        to: String,

        /// Source language code (defaults to the configured language)
        #[arg(short = 'f', long = "from")]
        from: Option<String>,

        /// Skip the translation cache lookup
        #[arg(short = 'n', long)]
        no_cache: bool,
    },
    /// Search the web for a topic
    Search {
        /// What to look for
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Look up a word
    Define {
        /// Word to define
        word: String,
    },
    /// Analyze a document's readability, key points, and topics
    Analyze {
        /// File to analyze (reads from stdin if not provided)
        file: Option<PathBuf>,
    },
    /// Show enrichment providers and whether they are configured
    Providers,
    /// List supported language codes
    Languages,
}
