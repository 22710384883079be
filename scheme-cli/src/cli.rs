use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Manage game scheme presets")]
pub struct Cli {
    /// Path to the schemes file (defaults to SCHEMES_PATH or ~/.game_schemes.yaml)
    #[clap(long, short = 'f')]
    pub file: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all schemes, built-ins marked
    List,

    /// Show every field of a scheme
    Show {
        /// Name of the scheme to show
        name: String,
    },

    /// Create a scheme with every field at its default value
    New {
        /// Name for the new scheme
        #[clap(default_value = "New scheme")]
        name: String,
    },

    /// Duplicate an existing scheme (built-ins included)
    Copy {
        /// Name of the scheme to copy
        name: String,

        /// Name for the copy (defaults to the original's name)
        #[clap(long = "as")]
        new_name: Option<String>,
    },

    /// Delete a user scheme
    Del {
        /// Name of the scheme to delete
        name: String,

        /// Skip the confirmation prompt
        #[clap(long, short = 'y')]
        yes: bool,
    },

    /// Set a single field on a user scheme
    Set {
        /// Name of the scheme to edit
        name: String,

        /// Field name, e.g. turn_time or low_gravity
        field: String,

        /// New value: an integer, or true/false for toggles
        value: String,
    },

    /// Rename a user scheme
    Rename {
        /// Current name
        name: String,

        /// New name
        new_name: String,
    },

    /// List every editable field with its range and default
    Fields,

    /// Export all schemes as JSON
    Export {
        /// Write to a file instead of stdout
        #[clap(long, short = 'o')]
        output: Option<PathBuf>,
    },
}
