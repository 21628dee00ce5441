use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Refuse to write the conversion output over its own input.
pub fn ensure_output_not_same(output: &Path, input: &Path) -> Result<()> {
    let out_norm = normalize_for_compare(output)
        .with_context(|| format!("failed to normalize output path {}", output.display()))?;
    let in_norm = normalize_for_compare(input)
        .with_context(|| format!("failed to normalize input path {}", input.display()))?;

    if out_norm == in_norm {
        bail!(
            "refusing to overwrite the conversion input: {} and {} are the same file",
            output.display(),
            input.display()
        );
    }
    Ok(())
}

fn normalize_for_compare(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        // canonicalize resolves symlinks and `..` for paths that exist.
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // The output file usually does not exist yet, so fall back to joining
    // with the working directory. `..` sequences are not resolved on this
    // branch; the operator controls both paths, so that is acceptable.
    let base = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().context("current_dir")?
    };

    Ok(base.join(path))
}
