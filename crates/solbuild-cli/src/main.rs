// crates/solbuild-cli/src/main.rs
// ============================================================================
// Module: Solbuild CLI Entry Point
// Description: Command dispatcher for configuration and artifact workflows.
// Purpose: Provide a safe, localized CLI for build-config and artifact tasks.
// Dependencies: clap, serde_json, solbuild-config, solbuild-core, thiserror, toml.
// ============================================================================

//! ## Overview
//! The solbuild CLI validates and renders build configurations and inspects
//! compiled contract artifacts. All user-facing strings are routed through
//! the i18n catalog to prepare for future localization. Inputs are untrusted
//! and read through hard size limits before any parsing happens.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use solbuild_cli::i18n::Locale;
use solbuild_cli::i18n::MessageArg;
use solbuild_cli::i18n::set_locale;
use solbuild_cli::i18n::translate;
use solbuild_cli::t;
use solbuild_config::BuildConfig;
use solbuild_config::DEFAULT_CONFIG_NAME;
use solbuild_config::config_docs_markdown;
use solbuild_config::config_schema;
use solbuild_config::config_toml_example;
use solbuild_core::Bytecode;
use solbuild_core::ContractArtifact;
use solbuild_core::MAX_ARTIFACT_FILE_SIZE;
use solbuild_core::MetadataTrailer;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a contract artifact input file.
const MAX_ARTIFACT_INPUT_BYTES: usize = MAX_ARTIFACT_FILE_SIZE;
/// Maximum size of a raw hex bytecode input file.
const MAX_BYTECODE_INPUT_BYTES: usize = 4 * 1024 * 1024;
/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "SOLBUILD_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "solbuild", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `SOLBUILD_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Contract artifact utilities.
    Artifact {
        /// Selected artifact subcommand.
        #[command(subcommand)]
        command: ArtifactCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a solbuild configuration file.
    Validate(ConfigValidateCommand),
    /// Render the resolved configuration.
    Show(ConfigShowCommand),
    /// Write the example configuration file.
    Init(ConfigInitCommand),
    /// Print the configuration JSON schema.
    Schema,
    /// Print the configuration reference documentation.
    Docs,
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to solbuild.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `config show`.
#[derive(Args, Debug)]
struct ConfigShowCommand {
    /// Optional config file path (defaults to solbuild.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output format for the resolved configuration.
    #[arg(long, value_enum, default_value_t = ShowFormatArg::Toml)]
    format: ShowFormatArg,
}

/// Arguments for `config init`.
#[derive(Args, Debug)]
struct ConfigInitCommand {
    /// Output path for the example configuration.
    #[arg(long, value_name = "PATH")]
    path: Option<PathBuf>,
    /// Overwrite an existing file.
    #[arg(long, action = ArgAction::SetTrue)]
    force: bool,
}

/// Artifact subcommands.
#[derive(Subcommand, Debug)]
enum ArtifactCommand {
    /// Inspect a contract artifact or raw hex bytecode file.
    Inspect(ArtifactInspectCommand),
    /// Strip the metadata trailer from compiled code.
    Strip(ArtifactStripCommand),
}

/// Arguments for `artifact inspect`.
#[derive(Args, Debug)]
struct ArtifactInspectCommand {
    /// Input path: a `.json` contract artifact or a raw hex bytecode file.
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
}

/// Arguments for `artifact strip`.
#[derive(Args, Debug)]
struct ArtifactStripCommand {
    /// Input path: a `.json` contract artifact or a raw hex bytecode file.
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
    /// Output path for the stripped result.
    #[arg(long, value_name = "PATH")]
    output: PathBuf,
}

/// Output formats for `config show`.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum ShowFormatArg {
    /// TOML output (the configuration wire form).
    Toml,
    /// Pretty JSON output.
    Json,
}

impl ShowFormatArg {
    /// Returns a stable label for error messages.
    const fn as_str(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

/// CLI locale argument values.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

/// Input kinds accepted by artifact commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArtifactInputKind {
    /// JSON contract artifact.
    Artifact,
    /// Raw hex bytecode file.
    RawHex,
}

/// Resolves the artifact input kind from the file extension.
fn artifact_input_kind(path: &Path) -> ArtifactInputKind {
    match path.extension() {
        Some(extension) if extension.eq_ignore_ascii_case("json") => ArtifactInputKind::Artifact,
        _ => ArtifactInputKind::RawHex,
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
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

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Config {
            command,
        } => command_config(command),
        Commands::Artifact {
            command,
        } => command_artifact(command),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
        ConfigCommand::Show(command) => command_config_show(&command),
        ConfigCommand::Init(command) => command_config_init(&command),
        ConfigCommand::Schema => command_config_schema(),
        ConfigCommand::Docs => command_config_docs(),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = BuildConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the config show command.
fn command_config_show(command: &ConfigShowCommand) -> CliResult<ExitCode> {
    let config = BuildConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let rendered = render_config(&config, command.format)?;
    write_stdout_bytes(rendered.as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Renders the resolved configuration in the requested format.
fn render_config(config: &BuildConfig, format: ShowFormatArg) -> CliResult<String> {
    let mut rendered = match format {
        ShowFormatArg::Toml => toml::to_string(config).map_err(|err| {
            CliError::new(t!("config.show.render_failed", format = format.as_str(), error = err))
        })?,
        ShowFormatArg::Json => serde_json::to_string_pretty(config).map_err(|err| {
            CliError::new(t!("config.show.render_failed", format = format.as_str(), error = err))
        })?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Executes the config init command.
fn command_config_init(command: &ConfigInitCommand) -> CliResult<ExitCode> {
    let target = command.path.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME));
    if target.exists() && !command.force {
        return Err(CliError::new(t!("config.init.exists", path = target.display())));
    }
    fs::write(&target, config_toml_example()).map_err(|err| {
        CliError::new(t!("config.init.write_failed", path = target.display(), error = err))
    })?;
    write_stdout_line(&t!("config.init.ok", path = target.display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the config schema command.
fn command_config_schema() -> CliResult<ExitCode> {
    let rendered = serde_json::to_string_pretty(&config_schema())
        .map_err(|err| CliError::new(t!("config.schema.render_failed", error = err)))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the config docs command.
fn command_config_docs() -> CliResult<ExitCode> {
    let docs = config_docs_markdown()
        .map_err(|err| CliError::new(t!("config.docs.render_failed", error = err)))?;
    write_stdout_bytes(docs.as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Artifact Commands
// ============================================================================

/// Dispatches artifact subcommands.
fn command_artifact(command: ArtifactCommand) -> CliResult<ExitCode> {
    match command {
        ArtifactCommand::Inspect(command) => command_artifact_inspect(&command),
        ArtifactCommand::Strip(command) => command_artifact_strip(&command),
    }
}

/// Executes the artifact inspect command.
fn command_artifact_inspect(command: &ArtifactInspectCommand) -> CliResult<ExitCode> {
    write_stdout_line(&t!("artifact.inspect.header", path = command.input.display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    match artifact_input_kind(&command.input) {
        ArtifactInputKind::Artifact => {
            let artifact = load_artifact(&command.input)?;
            let name = artifact
                .contract_name
                .clone()
                .unwrap_or_else(|| t!("artifact.inspect.name.unknown"));
            write_stdout_line(&t!("artifact.inspect.name", name = name))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            write_stdout_line(&code_report("artifact.inspect.creation", &artifact.bytecode))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            write_stdout_line(&code_report(
                "artifact.inspect.runtime",
                &artifact.deployed_bytecode,
            ))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            let validation = match artifact.validate() {
                Ok(()) => t!("artifact.inspect.validation.ok"),
                Err(err) => t!("artifact.inspect.validation.failed", error = err),
            };
            write_stdout_line(&validation)
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
        ArtifactInputKind::RawHex => {
            let code = load_bytecode(&command.input)?;
            write_stdout_line(&code_report("artifact.inspect.bytecode", &code))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Renders a single code report line for the given catalog key.
fn code_report(key: &str, code: &Bytecode) -> String {
    let stripped = code.strip_metadata();
    let args = vec![
        MessageArg::new("bytes", code.len().to_string()),
        MessageArg::new("trailer", trailer_label(code)),
        MessageArg::new("stripped", stripped.len().to_string()),
    ];
    translate(key, args)
}

/// Returns the localized label for a code's metadata trailer.
fn trailer_label(code: &Bytecode) -> String {
    match code.trailer() {
        Some(MetadataTrailer::Swarm {
            ..
        }) => t!("artifact.trailer.swarm"),
        Some(MetadataTrailer::Legacy) => t!("artifact.trailer.legacy"),
        None => t!("artifact.trailer.none"),
    }
}

/// Executes the artifact strip command.
fn command_artifact_strip(command: &ArtifactStripCommand) -> CliResult<ExitCode> {
    let removed = match artifact_input_kind(&command.input) {
        ArtifactInputKind::Artifact => {
            let artifact = load_artifact(&command.input)?;
            let stripped = ContractArtifact {
                contract_name: artifact.contract_name.clone(),
                bytecode: artifact.bytecode.strip_metadata(),
                deployed_bytecode: artifact.deployed_bytecode.strip_metadata(),
            };
            let removed = (artifact.bytecode.len() - stripped.bytecode.len())
                + (artifact.deployed_bytecode.len() - stripped.deployed_bytecode.len());
            let mut rendered = serde_json::to_string_pretty(&stripped).map_err(|err| {
                CliError::new(t!(
                    "artifact.strip.write_failed",
                    path = command.output.display(),
                    error = err
                ))
            })?;
            rendered.push('\n');
            write_output(&command.output, rendered.as_bytes())?;
            removed
        }
        ArtifactInputKind::RawHex => {
            let code = load_bytecode(&command.input)?;
            let stripped = code.strip_metadata();
            let removed = code.len() - stripped.len();
            let mut rendered = stripped.to_hex();
            rendered.push('\n');
            write_output(&command.output, rendered.as_bytes())?;
            removed
        }
    };
    write_stdout_line(&t!(
        "artifact.strip.ok",
        path = command.output.display(),
        removed = removed
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Writes a stripped artifact or bytecode result to disk.
fn write_output(path: &Path, bytes: &[u8]) -> CliResult<()> {
    fs::write(path, bytes).map_err(|err| {
        CliError::new(t!("artifact.strip.write_failed", path = path.display(), error = err))
    })
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Loads and parses a JSON contract artifact input.
fn load_artifact(path: &Path) -> CliResult<ContractArtifact> {
    let kind = t!("artifact.kind.artifact");
    let bytes = read_input(path, MAX_ARTIFACT_INPUT_BYTES, &kind)?;
    let content = std::str::from_utf8(&bytes)
        .map_err(|_| CliError::new(t!("artifact.utf8_invalid", path = path.display())))?;
    ContractArtifact::from_json_str(content).map_err(|err| {
        CliError::new(t!("artifact.parse_failed", path = path.display(), error = err))
    })
}

/// Loads and decodes a raw hex bytecode input.
fn load_bytecode(path: &Path) -> CliResult<Bytecode> {
    let kind = t!("artifact.kind.bytecode");
    let bytes = read_input(path, MAX_BYTECODE_INPUT_BYTES, &kind)?;
    let content = std::str::from_utf8(&bytes)
        .map_err(|_| CliError::new(t!("artifact.utf8_invalid", path = path.display())))?;
    Bytecode::from_hex(content).map_err(|err| {
        CliError::new(t!("artifact.decode_failed", path = path.display(), error = err))
    })
}

/// Reads an input file while mapping read failures to localized messages.
fn read_input(path: &Path, limit: usize, kind: &str) -> CliResult<Vec<u8>> {
    read_bytes_with_limit(path, limit).map_err(|err| match err {
        ReadLimitError::Io(err) => CliError::new(t!(
            "artifact.read_failed",
            kind = kind,
            path = path.display(),
            error = err
        )),
        ReadLimitError::TooLarge {
            size,
            limit,
        } => CliError::new(t!(
            "input.read_too_large",
            kind = kind,
            path = path.display(),
            size = size,
            limit = limit
        )),
    })
}

/// Errors from bounded file reads.
#[derive(Debug)]
enum ReadLimitError {
    /// File I/O failure.
    Io(std::io::Error),
    /// File size exceeds the configured limit.
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        size,
        limit: max_bytes,
    })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let read_limit = limit.saturating_add(1);
    let mut limited = file.take(read_limit);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        return Err(ReadLimitError::TooLarge {
            size: actual,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Locale Helpers
// ============================================================================

/// Resolves the CLI locale from flags or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

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

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
