use anyhow::{bail, Result};
use dhcp_config_core::{load_configuration, validate};

use crate::cli::{OutputFormat, ValidateArgs};
use crate::report::render_validation_text;

pub fn run_validate(args: ValidateArgs) -> Result<()> {
    let config = load_configuration(&args.file);
    let report = validate(&config);

    match args.format {
        OutputFormat::Text => println!("{}", render_validation_text(&args.file, &report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !report.valid {
        bail!("validation failed: {} errors", report.errors.len());
    }
    if args.strict && !report.warnings.is_empty() {
        bail!(
            "validation failed in strict mode: {} warnings",
            report.warnings.len()
        );
    }
    Ok(())
}
