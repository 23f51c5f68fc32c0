//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use quill_llm::ProviderKind;
use std::path::PathBuf;

/// Quill CLI - Extract key points and draft articles from interviews.
#[derive(Debug, Parser)]
#[command(name = "quill")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs or paths only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract key points from a transcript and sources
    Extract(ExtractArgs),

    /// Draft an article from approved key points
    Draft(DraftArgs),

    /// Export the draft and its provenance
    Export(ExportArgs),

    /// Manage provider profiles
    Profile(ProfileArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Project JSON file; its key points are replaced with the result
    #[arg(long, conflicts_with = "transcript", required_unless_present = "transcript")]
    pub project: Option<PathBuf>,

    /// Plain-text transcript file
    #[arg(short, long)]
    pub transcript: Option<PathBuf>,

    /// JSON file with an array of sources
    #[arg(short, long, requires = "transcript", conflicts_with = "project")]
    pub sources: Option<PathBuf>,
}

/// Arguments for the draft command.
#[derive(Debug, Parser)]
pub struct DraftArgs {
    /// Project JSON file
    #[arg(long)]
    pub project: PathBuf,

    /// Tone of the article (e.g. informative, conversational)
    #[arg(long)]
    pub tone: Option<String>,

    /// Angle of the article (e.g. balanced, critical)
    #[arg(long)]
    pub angle: Option<String>,

    /// Target length
    #[arg(long, value_enum)]
    pub length: Option<LengthArg>,

    /// Use every key point, not only approved ones
    #[arg(long)]
    pub include_unapproved: bool,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Project JSON file
    #[arg(long)]
    pub project: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Write the Markdown article
    #[arg(long)]
    pub markdown: bool,

    /// Write the provenance JSON
    #[arg(long)]
    pub provenance: bool,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Use {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// Completion vendor
        #[arg(long, value_enum)]
        provider: ProviderArg,
        /// Environment variable holding the API key
        #[arg(long)]
        api_key_env: Option<String>,
        /// Model override
        #[arg(long)]
        model: Option<String>,
        /// Endpoint override
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

/// Story length argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LengthArg {
    /// 300-500 words
    Short,
    /// 600-900 words
    Medium,
    /// 1000-1500 words
    Long,
}

impl LengthArg {
    /// Name stored in the story direction
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthArg::Short => "short",
            LengthArg::Medium => "medium",
            LengthArg::Long => "long",
        }
    }
}

/// Provider argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ProviderArg {
    /// OpenAI chat completions
    Openai,
    /// Perplexity chat completions
    Perplexity,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ProviderArg> for ProviderKind {
    fn from(provider: ProviderArg) -> Self {
        match provider {
            ProviderArg::Openai => ProviderKind::OpenAi,
            ProviderArg::Perplexity => ProviderKind::Perplexity,
        }
    }
}
