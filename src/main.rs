// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use designate_manifest::{
    ini::{apply_to_file, render},
    os_family::OS_FAMILY_PROFILES,
    params::ApiParams,
    resolver::{resolve, ApiManifest},
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolve package, service and config for the Designate API server
#[derive(Parser, Debug)]
#[command(name = "designate-manifest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the manifest resolved from a parameter file
    Resolve {
        /// Parameter file (YAML, or JSON with a .json extension)
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// OS family tag of the target host (e.g. Debian, RedHat)
        #[arg(short, long)]
        os_family: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },

    /// Apply the resolved config to a designate.conf file
    Apply {
        /// Parameter file (YAML, or JSON with a .json extension)
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// OS family tag of the target host (e.g. Debian, RedHat)
        #[arg(short, long)]
        os_family: String,

        /// Config file to update
        #[arg(short, long, default_value = "/etc/designate/designate.conf")]
        config: PathBuf,
    },

    /// Print the JSON schema of the parameter file
    Schema,

    /// List supported OS families and their default names
    Families,

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Rendered designate.conf directives only
    Ini,
    Json,
    Yaml,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    debug!(command = ?cli.command, "Parsed command line");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Resolve {
            params,
            os_family,
            format,
        } => {
            let manifest = load_and_resolve(params.as_deref(), &os_family)?;
            out.write_all(format_manifest(&manifest, format)?.as_bytes())?;
        }
        Commands::Apply {
            params,
            os_family,
            config,
        } => {
            let manifest = load_and_resolve(params.as_deref(), &os_family)?;
            let report = apply_to_file(&config, &manifest.config)
                .with_context(|| format!("Failed to apply config to {}", config.display()))?;

            info!(
                path = %config.display(),
                changed = report.is_changed(),
                "Config application finished"
            );

            writeln!(out, "fingerprint: {}", manifest.config.fingerprint())?;
            out.write_all(serde_yaml::to_string(&report)?.as_bytes())?;
        }
        Commands::Schema => {
            let schema = schemars::schema_for!(ApiParams);
            writeln!(out, "{}", serde_json::to_string_pretty(&schema)?)?;
        }
        Commands::Families => {
            for profile in OS_FAMILY_PROFILES {
                writeln!(
                    out,
                    "{}\tpackage={}\tservice={}",
                    profile.os_family, profile.package_name_default, profile.service_name_default
                )?;
            }
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "designate-manifest", &mut out);
        }
    }

    Ok(())
}

/// Initialize logging
///
/// Respects RUST_LOG (default INFO) and RUST_LOG_FORMAT (text or json).
/// Logs go to stderr so stdout stays machine-readable.
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .compact()
                .init();
        }
    }
}

fn load_and_resolve(params_path: Option<&Path>, os_family: &str) -> Result<ApiManifest> {
    let params = match params_path {
        Some(path) => ApiParams::from_file(path)
            .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
        None => {
            debug!("No parameter file given, using defaults");
            ApiParams::default()
        }
    };

    resolve(&params, os_family).context("Failed to resolve Designate API manifest")
}

fn format_manifest(manifest: &ApiManifest, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Ini => render(&manifest.config),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(manifest)?),
        OutputFormat::Yaml => serde_yaml::to_string(manifest)?,
    })
}
