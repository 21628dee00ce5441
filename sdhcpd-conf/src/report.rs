use std::path::Path;

use colored::Colorize;
use dhcp_config_core::catalog::OptionDefinition;
use dhcp_config_core::{DhcpConfig, ValidationReport};

/// Render a validation report for terminal output.
pub fn render_validation_text(path: &Path, report: &ValidationReport) -> String {
    let mut out = Vec::new();
    out.push(format!("validate {}", path.display()));
    out.push(format!(
        "result errors={} warnings={}",
        report.errors.len(),
        report.warnings.len()
    ));

    for error in &report.errors {
        out.push(format!("- {} {error}", "[error]".red()));
    }
    for warning in &report.warnings {
        out.push(format!("- {} {warning}", "[warning]".yellow()));
    }

    let summary = if report.valid {
        report.summary().green().to_string()
    } else {
        report.summary().red().to_string()
    };
    out.push(summary);
    out.join("\n")
}

/// Render a one-screen structure summary of a parsed configuration.
pub fn render_config_summary(path: &Path, config: &DhcpConfig) -> String {
    let mut out = Vec::new();
    out.push(format!("inspect {}", path.display()));

    let Some(dhcp) = config.dhcp.as_ref() else {
        out.push("no server section".to_string());
        return out.join("\n");
    };

    out.push("listen".to_string());
    match dhcp.listen.as_ref().filter(|listen| !listen.is_empty()) {
        Some(listen) => {
            for endpoint in listen {
                out.push(format!("- {endpoint}"));
            }
        }
        None => out.push("- none".to_string()),
    }

    let subnets = dhcp.subnets.as_deref().unwrap_or(&[]);
    out.push(format!("subnets ({})", subnets.len()));
    for subnet in subnets {
        let range = subnet.range_string();
        out.push(format!(
            "- {} network={} range={} gateway={} options={} reservations={} exclusions={}",
            subnet.name.as_deref().unwrap_or("(unnamed)"),
            subnet.network.as_deref().unwrap_or("-"),
            if range.is_empty() { "-".to_string() } else { range },
            subnet.gateway.as_deref().unwrap_or("-"),
            subnet.options.as_ref().map_or(0, Vec::len),
            subnet.reservations.as_ref().map_or(0, Vec::len),
            subnet.exclusions.as_ref().map_or(0, Vec::len),
        ));
    }

    let options = dhcp.global_options.as_deref().unwrap_or(&[]);
    out.push(format!("global options ({})", options.len()));
    for option in options {
        out.push(format!(
            "- {} = {}",
            option.name.as_deref().unwrap_or("(unnamed)"),
            option.effective_value().unwrap_or("-")
        ));
    }

    out.push(format!(
        "sections security={} performance={} logging={} monitoring={}",
        presence(dhcp.security.is_some()),
        presence(dhcp.performance.is_some()),
        presence(dhcp.logging.is_some()),
        presence(dhcp.monitoring.is_some()),
    ));

    out.join("\n")
}

/// Render one catalog entry in full.
pub fn render_option_definition(def: &OptionDefinition) -> String {
    format!(
        "option {} ({})\n  {}\n  value: {}\n  example: {}",
        def.name, def.code, def.description, def.value_hint, def.example
    )
}

/// Render one catalog entry as a table line.
pub fn render_option_line(def: &OptionDefinition) -> String {
    format!("{:>3}  {:<24} {}", def.code, def.name, def.description)
}

fn presence(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "no"
    }
}
