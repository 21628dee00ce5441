use anyhow::{bail, Context, Result};
use dhcp_config_core::{load_configuration, save_configuration, SaveError};

use crate::cli::ConvertArgs;
use crate::path_guard::ensure_output_not_same;

pub fn run_convert(args: ConvertArgs) -> Result<()> {
    ensure_output_not_same(&args.output, &args.input)?;

    let config = load_configuration(&args.input);

    match save_configuration(&config, &args.output) {
        Ok(()) => {
            println!("wrote {}", args.output.display());
            Ok(())
        }
        Err(SaveError::RequiresElevation { path }) => bail!(
            "writing {} requires elevated privileges; convert to an unprivileged \
             path and install the file with your privilege helper",
            path.display()
        ),
        Err(err) => Err(err)
            .with_context(|| format!("failed to write {}", args.output.display())),
    }
}
