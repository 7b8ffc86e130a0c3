//! Command-line interface.

pub mod completions;
pub mod output;
pub mod secrets;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::{FileConfig, Overrides, Settings};
use crate::core::constants;
use crate::error::Result;

/// cihelper - E-kirjasto CI helper.
#[derive(Parser, Debug)]
#[command(
    name = "cihelper",
    about = "E-kirjasto CI helper: manage encrypted GitHub Actions repository secrets",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// GitHub API version [default: 2022-11-28]
    #[arg(long, global = true)]
    pub api_version: Option<String>,

    /// GitHub repository owner [default: NatLibFi]
    #[arg(long, global = true)]
    pub owner: Option<String>,

    /// GitHub repository [default: ekirjasto-android-core]
    #[arg(long, global = true)]
    pub repo: Option<String>,

    /// GitHub personal access token
    #[arg(long, global = true, env = constants::TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL [default: https://api.github.com]
    #[arg(long, global = true, env = constants::API_URL_ENV)]
    pub api_url: Option<String>,

    /// Config file (defaults to ./.cihelper.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Resolve flags, environment, config file and defaults.
    pub fn settings(&self) -> Result<Settings> {
        let file = FileConfig::load(self.config.as_deref())?;
        let overrides = Overrides {
            api_url: self.api_url.clone(),
            api_version: self.api_version.clone(),
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            token: self.token.clone(),
        };
        Ok(Settings::resolve(overrides, file))
    }
}

/// Top-level commands. Without one, a connection diagnostic is printed.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List repository secrets
    ListSecrets {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a repository secret
    SetSecret {
        /// Secret name (e.g., ANDROID_KEYSTORE_PASSWORD)
        secret_name: String,
        /// Secret value
        #[arg(allow_hyphen_values = true)]
        secret_value: String,
    },

    /// Set a repository secret from a file (will be base64 encoded)
    SetSecretFile {
        /// Secret name
        secret_name: String,
        /// File to read the secret from
        secret_filepath: PathBuf,
    },

    /// Set a repository secret from a file (raw content, not base64 encoded)
    SetSecretFileRaw {
        /// Secret name
        secret_name: String,
        /// File to read the secret from
        secret_filepath: PathBuf,
    },

    /// Delete a repository secret
    DeleteSecret {
        /// Secret name
        secret_name: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    let global = cli.global;
    match cli.command {
        None => secrets::overview(global.settings()?),
        Some(ListSecrets { json }) => secrets::list(global.settings()?, json),
        Some(SetSecret {
            secret_name,
            secret_value,
        }) => secrets::set(global.settings()?, &secret_name, secret_value),
        Some(SetSecretFile {
            secret_name,
            secret_filepath,
        }) => secrets::set_file(global.settings()?, &secret_name, &secret_filepath),
        Some(SetSecretFileRaw {
            secret_name,
            secret_filepath,
        }) => secrets::set_file_raw(global.settings()?, &secret_name, &secret_filepath),
        Some(DeleteSecret { secret_name }) => secrets::delete(global.settings()?, &secret_name),
        Some(Completions { shell }) => completions::execute(shell),
    }
}
