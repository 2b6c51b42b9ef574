use anyhow::{Context, Result};
use colored::Colorize;
use fsroute::{BoundParams, ParamValue, RequestContext, Resolution, RouteTable};

use super::kind_label;
use crate::config::Config;

pub fn execute(
    table: &RouteTable,
    config: &Config,
    uri: &str,
    same_origin: bool,
    json: bool,
) -> Result<()> {
    let mut request = RequestContext::new(uri).with_same_origin(same_origin);
    if let Some(base) = &config.project.base_path {
        request = request.with_base_path(base);
    }

    let resolution = table.resolve(&request);

    if json {
        let output =
            serde_json::to_string_pretty(&resolution).context("Failed to serialize resolution")?;
        println!("{}", output);
    } else {
        print_human(&resolution);
    }

    Ok(())
}

fn print_human(resolution: &Resolution<'_>) {
    println!("Request:  {}", resolution.uri);
    println!("Pathname: {}", format!("/{}", resolution.pathname).cyan());

    match resolution.content {
        Some(file) => println!("Content:  {}  {}", kind_label(file.kind), file.path.green()),
        None => {
            println!("Content:  {}", "not found".red().bold());
            if let Some(view) = resolution.not_found {
                println!("View:     {}", view.path);
            }
        }
    }

    if !resolution.params.is_empty() {
        println!("Params:   {}", format_params(&resolution.params));
    }

    if let Some(root) = resolution.root_layout {
        println!("Shell:    {}", root.path);
    }

    if resolution.layouts.is_empty() {
        println!("Layouts:  {}", "none".dimmed());
    } else {
        println!("Layouts:  (root to leaf)");
        for (depth, layout) in resolution.layouts.iter().enumerate() {
            println!("  {}. {}", depth + 1, layout.path);
        }
    }
}

/// Renders bound parameters as `id=42, slug=[a, b]`
fn format_params(params: &BoundParams) -> String {
    params
        .iter()
        .map(|(name, value)| match value {
            ParamValue::One(value) => format!("{}={}", name, value),
            ParamValue::Many(values) => format!("{}=[{}]", name, values.join(", ")),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
