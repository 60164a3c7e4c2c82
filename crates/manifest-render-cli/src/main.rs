// crates/manifest-render-cli/src/main.rs
// ============================================================================
// Module: Manifest Render CLI Entry Point
// Description: Command dispatcher for rendering job artifacts.
// Purpose: Load deployment properties, render the requested artifact, and
//          write it to stdout or a file; all I/O lives here, not in core.
// Dependencies: clap, manifest-render-core, serde_json, serde_yaml, thiserror
// ============================================================================

//! ## Overview
//! The CLI loads a YAML properties file, converts it into the core's
//! configuration tree, and renders one artifact per invocation: a start
//! line, the certificate files, a lifecycle body, or the broker's app
//! manifest env block. Properties input is untrusted; a hard size cap is
//! enforced before parsing and the core's depth and kind limits apply
//! during conversion.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use manifest_render_core::CertificateSlot;
use manifest_render_core::ConfigTree;
use manifest_render_core::RenderMode;
use manifest_render_core::jobs;
use manifest_render_core::render_certificate;
use manifest_render_core::render_env_block;
use manifest_render_core::render_invocation;
use manifest_render_core::render_lifecycle;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum properties file size in bytes, enforced before parsing.
const MAX_PROPERTIES_FILE_SIZE: u64 = 1024 * 1024;

// ============================================================================
// SECTION: Command Line Definition
// ============================================================================

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "manifest-render", version, disable_help_subcommand = true)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Render subcommands, one per artifact kind.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a job's start invocation line.
    Invocation(InvocationCommand),
    /// Render the certificate and key files for the driver job.
    Certificates(CertificatesCommand),
    /// Render a lifecycle script body.
    Lifecycle(LifecycleCommand),
    /// Render the broker app manifest env block.
    AppManifest(AppManifestCommand),
}

/// Arguments for the invocation renderer.
#[derive(Args, Debug)]
struct InvocationCommand {
    /// Job whose start line to render.
    #[arg(long, value_enum, value_name = "JOB")]
    job: JobArg,
    /// Path to the YAML properties file.
    #[arg(long, value_name = "PATH")]
    properties: PathBuf,
    /// Suppress sensitive flags entirely.
    #[arg(long, action = ArgAction::SetTrue)]
    redact: bool,
    /// Optional output path (defaults to stdout).
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

/// Arguments for the certificate renderer.
#[derive(Args, Debug)]
struct CertificatesCommand {
    /// Path to the YAML properties file.
    #[arg(long, value_name = "PATH")]
    properties: PathBuf,
    /// Directory receiving the rendered cert/key files.
    #[arg(long, value_name = "DIR")]
    output_dir: PathBuf,
}

/// Arguments for the lifecycle renderer.
#[derive(Args, Debug)]
struct LifecycleCommand {
    /// Lifecycle script to render.
    #[arg(long, value_enum, value_name = "SCRIPT")]
    script: ScriptArg,
    /// Path to the YAML properties file.
    #[arg(long, value_name = "PATH")]
    properties: PathBuf,
    /// Optional output path (defaults to stdout).
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

/// Arguments for the app-manifest env block renderer.
#[derive(Args, Debug)]
struct AppManifestCommand {
    /// Path to the YAML properties file.
    #[arg(long, value_name = "PATH")]
    properties: PathBuf,
    /// Suppress sensitive entries entirely.
    #[arg(long, action = ArgAction::SetTrue)]
    redact: bool,
    /// Optional output path (defaults to stdout).
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

/// Jobs with a built-in start template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum JobArg {
    /// The volume driver's start script.
    DriverStart,
    /// The pushed broker's start script.
    BrokerStart,
}

/// Lifecycle scripts with a built-in template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScriptArg {
    /// The driver's pre-start hook.
    PreStart,
    /// The driver's drain hook.
    Drain,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a formatted message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a formatted message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Parses the command line and dispatches to the selected renderer.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Invocation(command) => command_invocation(&command),
        Commands::Certificates(command) => command_certificates(&command),
        Commands::Lifecycle(command) => command_lifecycle(&command),
        Commands::AppManifest(command) => command_app_manifest(&command),
    }
}

// ============================================================================
// SECTION: Command Handlers
// ============================================================================

/// Renders a start invocation line.
fn command_invocation(command: &InvocationCommand) -> CliResult<ExitCode> {
    let tree = load_properties(&command.properties)?;
    let template = match command.job {
        JobArg::DriverStart => jobs::driver_start_template(),
        JobArg::BrokerStart => jobs::broker_start_template(),
    }
    .map_err(|err| CliError::new(format!("template: {err}")))?;
    let artifact = render_invocation(&template, &tree, render_mode(command.redact))
        .map_err(|err| CliError::new(format!("render: {err}")))?;
    let mut text = artifact.into_string();
    text.push('\n');
    write_artifact(command.output.as_deref(), &text)?;
    Ok(ExitCode::SUCCESS)
}

/// Renders the certificate files, skipping absent slots.
fn command_certificates(command: &CertificatesCommand) -> CliResult<ExitCode> {
    let tree = load_properties(&command.properties)?;
    fs::create_dir_all(&command.output_dir)
        .map_err(|err| CliError::new(format!("{}: {err}", command.output_dir.display())))?;
    for slot in CertificateSlot::ALL {
        let artifact = render_certificate(slot, &tree)
            .map_err(|err| CliError::new(format!("render: {err}")))?;
        if artifact.is_empty() {
            continue;
        }
        let path = command.output_dir.join(slot.file_name());
        fs::write(&path, artifact.as_str())
            .map_err(|err| CliError::new(format!("{}: {err}", path.display())))?;
        write_stdout_line(&format!("wrote {}", path.display()))
            .map_err(|err| CliError::new(format!("stdout: {err}")))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Renders a lifecycle script body.
fn command_lifecycle(command: &LifecycleCommand) -> CliResult<ExitCode> {
    let tree = load_properties(&command.properties)?;
    let template = match command.script {
        ScriptArg::PreStart => jobs::driver_prestart_template(),
        ScriptArg::Drain => jobs::driver_drain_template(),
    }
    .map_err(|err| CliError::new(format!("template: {err}")))?;
    let artifact = render_lifecycle(&template, &tree)
        .map_err(|err| CliError::new(format!("render: {err}")))?;
    write_artifact(command.output.as_deref(), artifact.as_str())?;
    Ok(ExitCode::SUCCESS)
}

/// Renders the broker app manifest env block.
fn command_app_manifest(command: &AppManifestCommand) -> CliResult<ExitCode> {
    let tree = load_properties(&command.properties)?;
    let template = jobs::broker_env_template()
        .map_err(|err| CliError::new(format!("template: {err}")))?;
    let artifact = render_env_block(&template, &tree, render_mode(command.redact))
        .map_err(|err| CliError::new(format!("render: {err}")))?;
    write_artifact(command.output.as_deref(), artifact.as_str())?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Properties Loading
// ============================================================================

/// Maps the redact toggle to a core render mode.
const fn render_mode(redact: bool) -> RenderMode {
    if redact {
        RenderMode::Redact
    } else {
        RenderMode::Expose
    }
}

/// Loads a YAML properties file into a configuration tree.
///
/// The file size is checked against a hard cap before any parsing; the
/// core's depth and value-kind limits apply during conversion.
fn load_properties(path: &Path) -> CliResult<ConfigTree> {
    let metadata = fs::metadata(path)
        .map_err(|err| CliError::new(format!("{}: {err}", path.display())))?;
    if metadata.len() > MAX_PROPERTIES_FILE_SIZE {
        return Err(CliError::new(format!(
            "{}: properties file exceeds {MAX_PROPERTIES_FILE_SIZE} bytes",
            path.display()
        )));
    }
    let raw = fs::read_to_string(path)
        .map_err(|err| CliError::new(format!("{}: {err}", path.display())))?;
    let value: serde_json::Value = serde_yaml::from_str(&raw)
        .map_err(|err| CliError::new(format!("{}: {err}", path.display())))?;
    ConfigTree::from_json(&value)
        .map_err(|err| CliError::new(format!("{}: {err}", path.display())))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes an artifact to the output path, or to stdout when none is given.
fn write_artifact(output: Option<&Path>, text: &str) -> CliResult<()> {
    match output {
        Some(path) => fs::write(path, text)
            .map_err(|err| CliError::new(format!("{}: {err}", path.display()))),
        None => write_stdout_bytes(text.as_bytes())
            .map_err(|err| CliError::new(format!("stdout: {err}"))),
    }
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Reports a fatal error on stderr and maps it to a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
