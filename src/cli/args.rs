//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Open Graph, Twitter Card and Schema.org markup for rendered pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = crate::config::CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a config template and activate the store
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Print the config template to stdout without writing anything
        #[arg(long)]
        dry: bool,
    },

    /// Print the markup for a page
    #[command(visible_alias = "r")]
    Render {
        /// Page context file (TOML)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        page: PathBuf,

        /// Which render point to print
        #[arg(short, long, value_enum, default_value_t = PointArg::All)]
        point: PointArg,
    },

    /// Insert the markup for a page into an HTML document
    Inject {
        /// HTML document to modify
        #[arg(value_hint = clap::ValueHint::FilePath)]
        html: PathBuf,

        /// Page context file (TOML)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        page: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Read and change global settings
    #[command(visible_alias = "s")]
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Read and change per-document SEO metadata
    #[command(visible_alias = "m")]
    Meta {
        #[command(subcommand)]
        action: MetaAction,
    },

    /// Delete every setting and every SEO metadata entry
    Uninstall {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Render point selection for `render`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointArg {
    Head,
    Footer,
    All,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SettingsAction {
    /// List every setting
    Show,

    /// Print one setting
    Get { key: String },

    /// Sanitize and store one setting
    Set {
        key: String,
        value: String,

        /// Settings token printed by `settings form`
        #[arg(long)]
        nonce: Option<String>,

        #[command(flatten)]
        user: UserArg,
    },

    /// Print the settings page HTML
    Form {
        #[command(flatten)]
        user: UserArg,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum MetaAction {
    /// List the stored SEO metadata of a document
    Show {
        /// Document id
        doc: u64,
    },

    /// Print the meta box HTML for the document of a page
    Form {
        /// Page context file (TOML)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        page: PathBuf,

        #[command(flatten)]
        user: UserArg,
    },

    /// Submit the meta box for a document
    Save {
        #[command(flatten)]
        args: SaveArgs,
    },
}

/// Acting user.
#[derive(clap::Args, Debug, Clone)]
pub struct UserArg {
    /// Acting user id
    #[arg(short, long, default_value_t = 1)]
    pub user: u64,
}

/// Meta box submission. Omitted fields are left untouched.
#[derive(clap::Args, Debug, Clone)]
pub struct SaveArgs {
    /// Document id
    #[arg(long)]
    pub doc: u64,

    /// Document post type (`page` requires edit_page)
    #[arg(long, default_value = "post")]
    pub post_type: String,

    /// Edit token printed by `meta form`
    #[arg(long)]
    pub nonce: Option<String>,

    #[command(flatten)]
    pub user: UserArg,

    /// Treat the submission as a background autosave
    #[arg(long)]
    pub autosave: bool,

    /// Custom title
    #[arg(long)]
    pub title: Option<String>,

    /// Custom description
    #[arg(long)]
    pub description: Option<String>,

    /// Custom image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Open Graph type
    #[arg(long)]
    pub og_type: Option<String>,
}
