use crate::commands;
use crate::log_debug;
use crate::request::{DEFAULT_TARGET_REF, KNOWN_DESTINATIONS, KNOWN_PRESETS};
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, crate_version};
use colored::Colorize;
use std::path::PathBuf;

const LOG_FILE: &str = "ship-note-client-debug.log";

/// CLI structure defining the available commands and global arguments
#[derive(Parser)]
#[command(
    author,
    version = crate_version!(),
    about = "ship-note-client: draft release notes from your commit history",
    long_about = "Client for the hosted ship-note service. Sends a repository and a ref range to /api/generate and prints the drafted release notes.",
    after_help = get_dynamic_help(),
    styles = get_styles(),
)]
pub struct Cli {
    /// Subcommands available for the CLI
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log debug messages to a file
    #[arg(
        short = 'l',
        long = "log",
        global = true,
        help = "Log debug messages to a file"
    )]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(
        long = "log-file",
        global = true,
        help = "Specify a custom log file path"
    )]
    pub log_file: Option<PathBuf>,

    /// Suppress everything except the generated output
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress everything except the generated output"
    )]
    pub quiet: bool,
}

/// Enumeration of available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a release-notes draft for a ref range
    #[command(
        about = "Generate a release-notes draft for a ref range",
        long_about = "Send the repository and ref range to the ship-note service and print the draft. By default prints the response schema version and the `what_shipped` section, matching the documented API example."
    )]
    Generate {
        /// Repository slug in owner/name form
        #[arg(short, long, help = "Repository slug in owner/name form")]
        repo: String,

        /// Ref marking the start of the range (e.g. v0.1.10)
        #[arg(long, help = "Ref marking the start of the range (e.g. v0.1.10)")]
        base_ref: String,

        /// Ref marking the end of the range (defaults to HEAD)
        #[arg(
            long,
            default_value = DEFAULT_TARGET_REF,
            help = "Ref marking the end of the range"
        )]
        target_ref: String,

        /// Formatting preset (server-defined; config default otherwise)
        #[arg(short, long, help = "Formatting preset (server-defined set)")]
        preset: Option<String>,

        /// Audience for the notes (server-defined; config default otherwise)
        #[arg(short, long, help = "Audience for the notes (server-defined set)")]
        destination: Option<String>,

        /// Include a "why it matters" section in the draft
        #[arg(
            long,
            overrides_with = "no_include_why",
            help = "Include a \"why it matters\" section in the draft"
        )]
        include_why: bool,

        /// Omit the "why it matters" section even when the config enables it
        #[arg(
            long,
            overrides_with = "include_why",
            help = "Omit the \"why it matters\" section even when the config enables it"
        )]
        no_include_why: bool,

        /// Link to the published release, added to the draft's Links section
        #[arg(long, help = "Link to the published release")]
        release_url: Option<String>,

        /// Override the service endpoint URL
        #[arg(long, help = "Override the service endpoint URL")]
        endpoint: Option<String>,

        /// Override the request timeout in seconds
        #[arg(long, help = "Override the request timeout in seconds")]
        timeout: Option<u64>,

        /// Print the full markdown draft instead of the summary fields
        #[arg(
            long,
            help = "Print the full markdown draft instead of the summary fields"
        )]
        full: bool,
    },

    /// Display or update the stored client configuration
    #[command(
        about = "Display or update the stored client configuration",
        long_about = "Show the effective configuration, or persist new defaults for the endpoint, timeout, preset, destination, or include-why flag."
    )]
    Config {
        /// Set the service endpoint URL
        #[arg(long, help = "Set the service endpoint URL")]
        endpoint: Option<String>,

        /// Set the request timeout in seconds
        #[arg(long, help = "Set the request timeout in seconds")]
        timeout: Option<u64>,

        /// Set the default formatting preset
        #[arg(long, help = "Set the default formatting preset")]
        preset: Option<String>,

        /// Set the default audience
        #[arg(long, help = "Set the default audience")]
        destination: Option<String>,

        /// Set whether drafts include rationale text by default
        #[arg(long, help = "Set whether drafts include rationale text by default")]
        include_why: Option<bool>,
    },
}

/// Styles for the help menu
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Generate dynamic help listing the presets and destinations the service
/// currently accepts
fn get_dynamic_help() -> String {
    let presets = KNOWN_PRESETS
        .iter()
        .map(|p| format!("{}", p.bold()))
        .collect::<Vec<_>>()
        .join(" | ");
    let destinations = KNOWN_DESTINATIONS
        .iter()
        .map(|d| format!("{}", d.bold()))
        .collect::<Vec<_>>()
        .join(" | ");

    format!("\nKnown presets: {presets}\nKnown destinations: {destinations}")
}

/// Main function to parse arguments and handle the command
pub async fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    if cli.log {
        crate::logger::enable_logging();
        let log_file = cli
            .log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(LOG_FILE));
        crate::logger::set_log_file(&log_file)?;
        if !cli.quiet {
            crate::logger::set_log_to_stdout(true);
        }
        log_debug!("Logging enabled, writing to {log_file:?}");
    } else {
        crate::logger::disable_logging();
    }

    if let Some(command) = cli.command {
        handle_command(command, cli.quiet).await
    } else {
        // If no subcommand is provided, print the help
        let _ = Cli::parse_from(["ship-note-client", "--help"]);
        Ok(())
    }
}

/// Handle the command based on the CLI arguments
async fn handle_command(command: Commands, quiet: bool) -> anyhow::Result<()> {
    match command {
        Commands::Generate {
            repo,
            base_ref,
            target_ref,
            preset,
            destination,
            include_why,
            no_include_why,
            release_url,
            endpoint,
            timeout,
            full,
        } => {
            // Neither flag given means "defer to the config default".
            let include_why = if no_include_why {
                Some(false)
            } else if include_why {
                Some(true)
            } else {
                None
            };

            commands::handle_generate_command(commands::GenerateArgs {
                repo,
                base_ref,
                target_ref,
                preset,
                destination,
                include_why,
                release_url,
                endpoint,
                timeout,
                full,
                quiet,
            })
            .await
        }
        Commands::Config {
            endpoint,
            timeout,
            preset,
            destination,
            include_why,
        } => commands::handle_config_command(commands::ConfigArgs {
            endpoint,
            timeout,
            preset,
            destination,
            include_why,
        }),
    }
}
