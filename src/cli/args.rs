//! CLI argument definitions using Clap

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

use crate::domain::config::{PresenterConfig, ToastConfig};
use crate::domain::confirm::{ConfirmIcon, ConfirmOptions};

/// Herald - toast notifications and confirmation prompts from the shell
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(version)]
#[command(about = "Show toast notifications and confirmation prompts from the shell")]
#[command(long_about = None)]
pub struct Cli {
    /// Show toasts as desktop notifications instead of terminal lines
    #[arg(long, global = true)]
    pub desktop: bool,

    /// Config file (defaults to the XDG config directory)
    #[arg(long = "config", value_name = "PATH", global = true, env = "HERALD_CONFIG")]
    pub config_file: Option<PathBuf>,

    /// Toast lifetime in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a success toast
    Success(ToastArgs),
    /// Show a warning toast
    Warning(ToastArgs),
    /// Show an info toast
    Info(ToastArgs),
    /// Report an error, as text or as a JSON error payload
    Error(ErrorArgs),
    /// Ask for confirmation (exit 0 when confirmed, 1 otherwise)
    Confirm(ConfirmArgs),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments shared by the plain toast commands
#[derive(Args, Debug, Clone)]
pub struct ToastArgs {
    /// Toast body
    pub text: String,

    /// Toast title (defaults per level)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Stay until the toast expires, showing the countdown
    #[arg(short, long)]
    pub wait: bool,
}

/// Arguments for the error command
#[derive(Args, Debug, Clone)]
pub struct ErrorArgs {
    /// Error text, or a JSON payload with --json ("-" reads stdin)
    pub input: String,

    /// Parse the input as a JSON error payload
    #[arg(long)]
    pub json: bool,

    /// Toast title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Stay until the toasts expire, showing the countdown
    #[arg(short, long)]
    pub wait: bool,
}

/// Arguments for the confirm command
#[derive(Args, Debug, Clone, Default)]
pub struct ConfirmArgs {
    /// Dialog title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Dialog body
    #[arg(long)]
    pub text: Option<String>,

    /// Dialog icon: success, error, warning, info or question
    #[arg(long, value_name = "ICON", value_parser = ConfirmIcon::from_str)]
    pub icon: Option<ConfirmIcon>,

    /// Confirm button label
    #[arg(long, value_name = "LABEL")]
    pub confirm_text: Option<String>,

    /// Cancel button label
    #[arg(long, value_name = "LABEL")]
    pub cancel_text: Option<String>,

    /// Hide the cancel button
    #[arg(long)]
    pub no_cancel: bool,
}

impl From<ConfirmArgs> for ConfirmOptions {
    fn from(args: ConfirmArgs) -> Self {
        ConfirmOptions {
            title: args.title,
            text: args.text,
            icon: args.icon,
            confirm_button_text: args.confirm_text,
            cancel_button_text: args.cancel_text,
            show_cancel_button: if args.no_cancel { Some(false) } else { None },
            ..Default::default()
        }
    }
}

/// Config action subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Show config file path
    Path,
    /// Print the effective configuration
    Show,
}

impl Cli {
    /// Configuration given on the command line, to merge over the file
    pub fn config_overrides(&self) -> PresenterConfig {
        PresenterConfig {
            toast: self.timeout.map(|ms| ToastConfig {
                timeout_ms: Some(ms),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}
