use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "sdhcpd-conf")]
#[command(about = "Inspect, validate, and convert simple-dhcpd configuration files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Show the parsed structure of a configuration file.
    Inspect(InspectArgs),
    /// Check a configuration for errors and warnings.
    Validate(ValidateArgs),
    /// Convert a configuration to the format implied by the output extension.
    Convert(ConvertArgs),
    /// List standard DHCP option definitions.
    Options(OptionsArgs),
    /// Print the platform default configuration path.
    DefaultPath,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    pub file: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    pub file: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Fail on warnings as well as errors.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    pub input: PathBuf,
    /// Destination file; its extension selects the output format.
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Parser, Debug)]
pub struct OptionsArgs {
    /// Show a single option by numeric code.
    #[arg(long)]
    pub code: Option<u16>,
    /// Show a single option by canonical name.
    #[arg(long, conflicts_with = "code")]
    pub name: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
