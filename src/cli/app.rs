//! Main app runner

use std::path::PathBuf;
use std::process::ExitCode;

use colored::*;
use tokio::io::AsyncReadExt;

use crate::application::ports::ConfigStore;
use crate::application::NotificationPresenter;
use crate::domain::config::PresenterConfig;
use crate::domain::confirm::ConfirmOptions;
use crate::domain::error::ConfigError;
use crate::domain::error_payload::ErrorInput;
use crate::infrastructure::{create_toast_renderer, TerminalDialogRenderer, XdgConfigStore};

use super::args::{Cli, Commands, ConfigAction, ErrorArgs, ToastArgs};
use super::countdown::wait_for_toasts;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Presenter wired to the CLI's adapters
type CliPresenter =
    NotificationPresenter<Box<dyn crate::application::ports::ToastRenderer>, TerminalDialogRenderer>;

/// Run a parsed command line
pub async fn run(cli: Cli) -> ExitCode {
    let store = config_store(cli.config_file.clone());

    if let Commands::Config { action } = cli.command {
        return match handle_config_command(action, &store, cli.config_overrides()).await {
            Ok(()) => ExitCode::from(EXIT_SUCCESS),
            Err(e) => {
                report_error(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    let config = match load_merged_config(&store, cli.config_overrides()).await {
        Ok(config) => config,
        Err(e) => {
            report_error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let presenter: CliPresenter = NotificationPresenter::with_config(
        create_toast_renderer(cli.desktop),
        TerminalDialogRenderer::new(),
        config,
    );

    match cli.command {
        Commands::Success(args) => {
            show_toast(&presenter, &args, |p, text, title| match title {
                Some(title) => p.success_with_title(text, title),
                None => p.success(text),
            })
            .await
        }
        Commands::Warning(args) => {
            show_toast(&presenter, &args, |p, text, title| match title {
                Some(title) => p.warning_with_title(text, title),
                None => p.warning(text),
            })
            .await
        }
        Commands::Info(args) => {
            show_toast(&presenter, &args, |p, text, title| match title {
                Some(title) => p.info_with_title(text, title),
                None => p.info(text),
            })
            .await
        }
        Commands::Error(args) => show_error(&presenter, args).await,
        Commands::Confirm(args) => {
            if presenter.confirm(ConfirmOptions::from(args)).await {
                ExitCode::from(EXIT_SUCCESS)
            } else {
                ExitCode::from(EXIT_ERROR)
            }
        }
        Commands::Config { .. } => ExitCode::from(EXIT_SUCCESS),
    }
}

async fn show_toast<F>(presenter: &CliPresenter, args: &ToastArgs, show: F) -> ExitCode
where
    F: FnOnce(&CliPresenter, &str, Option<&str>),
{
    show(presenter, &args.text, args.title.as_deref());
    if args.wait {
        wait_for_toasts(presenter).await;
    }
    ExitCode::from(EXIT_SUCCESS)
}

async fn show_error(presenter: &CliPresenter, args: ErrorArgs) -> ExitCode {
    let raw = if args.input == "-" {
        match read_stdin().await {
            Ok(raw) => raw,
            Err(e) => {
                report_error(&format!("Failed to read stdin: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        args.input
    };

    let input = if args.json {
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => ErrorInput::from(value),
            Err(e) => {
                report_error(&format!("Invalid JSON payload: {}", e));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        }
    } else {
        ErrorInput::Text(raw.trim_end_matches('\n').to_string())
    };

    match args.title.as_deref() {
        Some(title) => presenter.error_with_title(input, title),
        None => presenter.error(input),
    }

    if args.wait {
        wait_for_toasts(presenter).await;
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Handle config subcommand
async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    overrides: PresenterConfig,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_merged_config(store, overrides).await?;
            let content = toml::to_string_pretty(&config)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            print!("{}", content);
            Ok(())
        }
    }
}

/// Load and merge configuration: defaults < file < CLI
pub async fn load_merged_config<S: ConfigStore>(
    store: &S,
    cli_config: PresenterConfig,
) -> Result<PresenterConfig, ConfigError> {
    let file_config = store.load().await?;
    let merged = PresenterConfig::defaults()
        .merge(file_config)
        .merge(cli_config);
    merged.validate()?;
    Ok(merged)
}

fn config_store(path: Option<PathBuf>) -> XdgConfigStore {
    match path {
        Some(path) => XdgConfigStore::with_path(path),
        None => XdgConfigStore::new(),
    }
}

async fn read_stdin() -> std::io::Result<String> {
    let mut raw = String::new();
    tokio::io::stdin().read_to_string(&mut raw).await?;
    Ok(raw)
}

fn report_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
