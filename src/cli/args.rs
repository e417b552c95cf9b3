// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Backend to operate on (defaults to the configured backend)
    #[arg(short, long, value_name = "BACKEND", global = true)]
    pub backend: Option<String>,

    /// Path to the configuration file (optional)
    #[arg(long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Path to the preference store (optional)
    #[arg(short, long, value_name = "STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List registered backends and the preference keys they own
    Backends,

    /// Check the format of an API key
    CheckKey {
        #[arg(value_name = "KEY")]
        key: String,

        /// Also ask the backend whether the key is live
        #[arg(long)]
        online: bool,
    },

    /// Validate and store an API key
    SetKey {
        #[arg(value_name = "KEY")]
        key: String,

        /// Only store the key if the backend accepts it
        #[arg(long)]
        online: bool,
    },

    /// Remove the stored API key
    ClearKey,

    /// Check whether a search URL is accepted by the backend
    CheckUrl {
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Check whether a text is a valid saved-query description
    CheckDescription {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Save a search URL under a description
    AddQuery {
        #[arg(value_name = "URL")]
        url: String,

        #[arg(value_name = "DESCRIPTION")]
        description: String,
    },

    /// List saved queries with their index
    ListQueries {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove the saved query at INDEX
    RemoveQuery {
        #[arg(value_name = "INDEX")]
        index: usize,
    },

    /// Write a default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
