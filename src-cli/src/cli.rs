//! 命令行参数定义

use std::path::PathBuf;

use acmedns_provider::ChallengeOperation;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "acmedns")]
#[command(about = "Set and unset ACME DNS-01 challenge records")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults to ./config.toml when present)
    #[arg(short, long, env = "ACMEDNS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not mirror log output to the system log
    #[arg(long, global = true)]
    pub no_syslog: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a challenge record
    Set(ChallengeArgs),
    /// Remove a challenge record
    Unset(ChallengeArgs),
}

#[derive(Debug, Args)]
pub struct ChallengeArgs {
    /// Fully qualified domain name of the challenge record
    pub fqdn: String,

    /// Challenge digest to publish or withdraw
    pub digest: String,

    /// Request timeout in seconds [default: 60]
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl Command {
    pub fn operation(&self) -> ChallengeOperation {
        match self {
            Self::Set(_) => ChallengeOperation::Set,
            Self::Unset(_) => ChallengeOperation::Unset,
        }
    }

    pub fn args(&self) -> &ChallengeArgs {
        match self {
            Self::Set(args) | Self::Unset(args) => args,
        }
    }
}
