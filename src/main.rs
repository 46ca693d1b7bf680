use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use soapfmt::utils::{format_file, path_in_file, read_file, strip_file, write_file};
use soapfmt::{format_xml, get_path, get_path_at_char, strip_causality_data, FormatConfig};

#[derive(Debug, Parser)]
#[command(
    name = "soapfmt",
    version,
    about = "Format SOAP/XML payloads and resolve structural paths"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pretty print XML
    Format(FormatArgs),
    /// Remove VsDebuggerCausalityData comments and elements
    Strip(IoArgs),
    /// Print the structural path at an offset
    Path(PathArgs),
}

#[derive(Debug, Args)]
struct IoArgs {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct FormatArgs {
    #[command(flatten)]
    io: IoArgs,
    /// Align second and later attributes under the first one
    #[arg(long)]
    align_attributes: bool,
    /// Keep single-value elements on one line
    #[arg(long)]
    inline_values: bool,
    /// Strip VsDebuggerCausalityData before formatting
    #[arg(long)]
    hide_causality_data: bool,
    /// Spaces per nesting level
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=16))]
    indent: Option<u8>,
    /// Settings JSON file whose `ui` section provides defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct PathArgs {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Offset into the input, in bytes unless --chars is given
    #[arg(long)]
    offset: usize,
    /// Count the offset in characters
    #[arg(long)]
    chars: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Format(args) => {
            let config = load_config(&args)?;
            debug!(?config, "formatting");
            let formatted = match &args.io.input {
                Some(path) => format_file(path, &config)?,
                None => format_xml(&read_stdin()?, &config),
            };
            write_output(args.io.output.as_deref(), &formatted)?;
        }
        Command::Strip(args) => {
            let stripped = match &args.input {
                Some(path) => strip_file(path)?,
                None => strip_causality_data(&read_stdin()?),
            };
            write_output(args.output.as_deref(), &stripped)?;
        }
        Command::Path(args) => {
            let path = match (&args.input, args.chars) {
                (Some(input), false) => path_in_file(input, args.offset)?,
                (Some(input), true) => get_path_at_char(&read_file(input)?, args.offset),
                (None, false) => get_path(&read_stdin()?, args.offset),
                (None, true) => get_path_at_char(&read_stdin()?, args.offset),
            };
            match path {
                Some(path) => println!("{path}"),
                None => {
                    error!("no element at offset {}", args.offset);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn load_config(args: &FormatArgs) -> Result<FormatConfig> {
    let mut config = match &args.config {
        #[cfg(feature = "serde")]
        Some(path) => soapfmt::Settings::from_path(path)?.ui,
        #[cfg(not(feature = "serde"))]
        Some(_) => bail!("--config requires the `serde` feature"),
        None => FormatConfig::default(),
    };
    config.align_attributes |= args.align_attributes;
    config.inline_element_values |= args.inline_values;
    config.hide_causality_data |= args.hide_causality_data;
    if let Some(indent) = args.indent {
        config.indent_spaces = usize::from(indent);
    }
    Ok(config)
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    if buffer.trim().is_empty() {
        bail!("no input provided on stdin");
    }
    Ok(buffer)
}

fn write_output(path: Option<&Path>, data: &str) -> Result<()> {
    match path {
        Some(path) => write_file(path, data)?,
        None => io::stdout()
            .write_all(data.as_bytes())
            .context("failed to write stdout")?,
    }
    Ok(())
}
