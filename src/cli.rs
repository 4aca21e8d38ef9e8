//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `statreg`.
#[derive(Debug, Parser)]
#[command(name = "statreg", version, about = "Register an installation for usage statistics")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct AppArgs {
    /// Application name; also the directory under the config root.
    #[arg(long = "app")]
    pub app_name: String,
    /// Directory holding per-application config (defaults to `$HOME/.config`).
    #[arg(long)]
    pub config_root: Option<PathBuf>,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register this installation unless it is already registered.
    Register {
        /// Application and config-root selection.
        #[command(flatten)]
        app: AppArgs,
        /// Base URL of the statistics endpoint (defaults to `$STATREG_ENDPOINT`).
        #[arg(long)]
        endpoint: Option<String>,
        /// Accept any response status from the endpoint.
        #[arg(long)]
        lenient: bool,
        /// Report the identifier before writing it to disk.
        #[arg(long)]
        send_first: bool,
        /// Request timeout in seconds.
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },
    /// Show the identifier file and its contents.
    Show {
        /// Application and config-root selection.
        #[command(flatten)]
        app: AppArgs,
    },
}

impl Command {
    /// Application and config-root options of the command.
    #[must_use]
    pub fn app(&self) -> &AppArgs {
        match self {
            Self::Register { app, .. } | Self::Show { app } => app,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_register_with_defaults() {
        let cli = Cli::parse_from(["statreg", "register", "--app", "myapp"]);
        match cli.command {
            Command::Register { app, endpoint, lenient, send_first, timeout_secs } => {
                assert_eq!(app.app_name, "myapp");
                assert!(app.config_root.is_none());
                assert!(endpoint.is_none());
                assert!(!lenient);
                assert!(!send_first);
                assert_eq!(timeout_secs, 10);
            }
            Command::Show { .. } => panic!("expected register"),
        }
    }

    #[test]
    fn parses_register_flags() {
        let cli = Cli::parse_from([
            "statreg",
            "register",
            "--app",
            "myapp",
            "--endpoint",
            "https://stats.example.com",
            "--config-root",
            "/tmp/root",
            "--lenient",
            "--send-first",
            "--timeout-secs",
            "3",
        ]);
        assert!(matches!(
            cli.command,
            Command::Register { lenient: true, send_first: true, timeout_secs: 3, .. }
        ));
        assert_eq!(cli.command.app().config_root.as_deref(), Some("/tmp/root".as_ref()));
    }

    #[test]
    fn parses_show_subcommand() {
        let cli = Cli::parse_from(["statreg", "show", "--app", "myapp"]);
        assert!(matches!(cli.command, Command::Show { .. }));
    }

    #[test]
    fn app_is_required() {
        assert!(Cli::try_parse_from(["statreg", "show"]).is_err());
    }
}
