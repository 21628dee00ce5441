use anyhow::{Context, Result};
use clap::Parser;
use dhcp_config_core::catalog::{definition_for_code, definition_for_name, STANDARD_OPTIONS};
use dhcp_config_core::{default_config_path, load_configuration};

mod cli;
mod convert_cmd;
mod path_guard;
mod report;
mod validate_cmd;

use cli::{Cli, Command, InspectArgs, OptionsArgs, OutputFormat};
use report::{render_config_summary, render_option_definition, render_option_line};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Inspect(args) => run_inspect(args),
        Command::Validate(args) => validate_cmd::run_validate(args),
        Command::Convert(args) => convert_cmd::run_convert(args),
        Command::Options(args) => run_options(args),
        Command::DefaultPath => {
            println!("{}", default_config_path().display());
            Ok(())
        }
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let config = load_configuration(&args.file);

    match args.format {
        OutputFormat::Text => println!("{}", render_config_summary(&args.file, &config)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}

fn run_options(args: OptionsArgs) -> Result<()> {
    if let Some(code) = args.code {
        let def = definition_for_code(code)
            .with_context(|| format!("no standard option with code {code}"))?;
        println!("{}", render_option_definition(def));
        return Ok(());
    }

    if let Some(name) = args.name.as_deref() {
        let def = definition_for_name(name)
            .with_context(|| format!("no standard option named '{name}'"))?;
        println!("{}", render_option_definition(def));
        return Ok(());
    }

    for def in STANDARD_OPTIONS {
        println!("{}", render_option_line(def));
    }
    Ok(())
}
