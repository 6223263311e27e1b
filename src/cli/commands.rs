use clap::{Args, Parser, Subcommand};
use datazen::extract::ExtractionOptions;
use std::path::PathBuf;

/// `DataZen` - extract structured data from web pages.
#[derive(Parser, Debug)]
#[command(name = "datazen")]
#[command(version)]
#[command(
    about = "Extract text, links, images, emails and phone numbers from HTML and export them as JSON or CSV.",
    long_about = None
)]
pub struct Cli {
    /// Config file (default: ~/.datazen/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract from an HTML page and print the full result as JSON
    Extract {
        /// HTML file to read (stdin when omitted)
        input: Option<PathBuf>,

        /// Address of the page, recorded in the result
        #[arg(long)]
        url: Option<String>,

        #[command(flatten)]
        categories: CategoryFlags,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Extract one category and write it as a JSON or CSV export
    Export {
        /// HTML file to read (stdin when omitted)
        input: Option<PathBuf>,

        /// Address of the page, recorded in the export metadata
        #[arg(long)]
        url: Option<String>,

        /// text, links, images, emails or phone_numbers
        #[arg(short, long)]
        category: String,

        /// json or csv
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Directory to write `<product>-<category>-<date>.<ext>` into (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Convert a JSON array of records (or a {"data": [...]} envelope) to JSON or CSV
    Convert {
        /// JSON file holding the records
        input: PathBuf,

        /// json or csv
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Column to place first in CSV output
        #[arg(long)]
        priority_key: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct CategoryFlags {
    /// Text snippets from paragraphs, headings, spans and divs
    #[arg(long)]
    pub text: bool,

    /// Anchor targets (absolute or root-relative)
    #[arg(long)]
    pub links: bool,

    /// Image sources (absolute or root-relative)
    #[arg(long)]
    pub images: bool,

    /// Email addresses in the page text
    #[arg(long)]
    pub emails: bool,

    /// Phone numbers in the page text
    #[arg(long)]
    pub phones: bool,

    /// Every category
    #[arg(long)]
    pub all: bool,
}

impl CategoryFlags {
    pub fn options(self) -> ExtractionOptions {
        if self.all {
            return ExtractionOptions::all();
        }
        ExtractionOptions {
            text: self.text,
            links: self.links,
            images: self.images,
            emails: self.emails,
            phones: self.phones,
        }
    }

    pub fn is_empty(self) -> bool {
        self.options() == ExtractionOptions::none()
    }
}
