//! The `scope` command: list supported provider/service pairs.

use h2v_providers::ValidatorRegistry;

use crate::ui::{self, colors};

/// Prints a table of every enabled provider/service pair.
pub fn run() {
    let registry = ValidatorRegistry::builtin();
    let rows: Vec<(&str, &str, &str)> = registry
        .enabled_services()
        .map(|(provider, service)| (provider, service.id, service.display_name))
        .collect();

    ui::print_command_header("scope");

    if rows.is_empty() {
        println!("  No enabled services found.");
        return;
    }

    let provider_width = rows.iter().map(|(p, ..)| p.len()).max().unwrap_or(0).max("Provider".len());
    let service_width = rows
        .iter()
        .map(|(_, s, _)| s.len())
        .max()
        .unwrap_or(0)
        .max("Service".len());

    println!(
        "  {}  {}  {}",
        colors::primary().apply_to(format!("{:<provider_width$}", "Provider")),
        colors::primary().apply_to(format!("{:<service_width$}", "Service")),
        colors::primary().apply_to("Name")
    );

    for (provider, service_id, display_name) in rows {
        println!(
            "  {}  {service_id:<service_width$}  {}",
            colors::accent().apply_to(format!("{provider:<provider_width$}")),
            colors::muted().apply_to(display_name)
        );
    }
    println!();
}
