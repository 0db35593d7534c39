use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snipz", bin_name = "snipz", version)]
#[command(about = "Local code-snippet manager with public listing and private links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a new snippet
    #[command(alias = "s")]
    Save {
        /// Title of the snippet ("Untitled" when omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Language tag (javascript, python, html, css, markdown, cpp, java, xml)
        #[arg(short, long)]
        lang: Option<String>,

        /// Keep it out of the public list; prints a direct link instead
        #[arg(short, long)]
        private: bool,

        /// Code to save (otherwise read from --file, stdin, or $EDITOR)
        #[arg(short, long, conflicts_with = "file")]
        code: Option<String>,

        /// Read the code from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Browse public snippets
    #[command(alias = "ls", alias = "browse")]
    List {
        /// Case-insensitive search over titles and code
        #[arg(short, long)]
        search: Option<String>,

        /// Only show snippets with this language tag
        #[arg(short, long)]
        lang: Option<String>,

        /// Render the cards as HTML
        #[arg(long)]
        html: bool,
    },

    /// Load a snippet by id
    #[command(alias = "v")]
    View {
        /// Snippet id
        id: String,
    },

    /// Copy a snippet's direct link to the clipboard
    Link {
        /// Snippet id
        id: String,
    },

    /// Resolve a direct link (full URL or "#s-<id>")
    Open {
        /// The link to open
        link: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (origin, path, default-lang)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
