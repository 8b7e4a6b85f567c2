//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// wikiden - notes connected by [[wiki links]]
#[derive(Parser, Debug)]
#[command(name = "wikiden", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Owner whose notes are used (overrides config file and $USER)
    #[arg(long, global = true)]
    pub owner: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    New(NewArgs),

    /// Change a note's title or content
    Edit(EditArgs),

    /// Delete a note and every link touching it
    Rm(RmArgs),

    /// Show a note with its related notes
    Show(ShowArgs),

    /// List notes, most recently updated first
    #[command(name = "ls")]
    List(ListArgs),

    /// Resolve wiki-link text to a note
    Resolve(ResolveArgs),

    /// Show a note's links, backlinks and two-hop links
    Links(LinksArgs),

    /// Recompute every note's links
    Reindex(ReindexArgs),

    /// Import Markdown files as notes, titled by file name
    Import(ImportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where a note body comes from.
#[derive(clap::Args, Debug, Default)]
#[group(multiple = false)]
pub struct ContentSource {
    /// Note body as a literal string
    #[arg(short, long)]
    pub content: Option<String>,

    /// Read the note body from a file ("-" for stdin)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title (default: "Untitled Note")
    pub title: Option<String>,

    #[command(flatten)]
    pub source: ContentSource,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID, ID prefix or title
    pub note: String,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub source: ContentSource,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Note ID, ID prefix or title
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID, ID prefix or title
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `resolve` command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Link text, as written between [[ and ]]
    pub text: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `links` command
#[derive(Parser, Debug)]
pub struct LinksArgs {
    /// Note ID, ID prefix or title
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `reindex` command
#[derive(Parser, Debug)]
pub struct ReindexArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `import` command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Markdown files or directories to import
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
