//! Command-line front end: price a job from flags or a JSON form snapshot.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use serde::Serialize;
use thiserror::Error;

use garden_cost_estimator::{
    config::{AppConfig, ConfigError, OutputFormat},
    domain::{estimate_breakdown, BudgetCeiling, Estimate, Extra, FormSnapshot, LineItem, Selections},
    util::{
        format::{format_amount, format_price},
        logging,
    },
};

#[derive(Parser, Debug)]
#[command(name = "estimate")]
#[command(about = "Estimate the price of a landscaping job")]
#[command(version)]
struct Cli {
    /// JSON form snapshot to start from; `-` reads stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(long)]
    service_type: Option<String>,

    /// `residential` or `commercial`
    #[arg(long)]
    property_type: Option<String>,

    /// Area in square metres
    #[arg(long)]
    area_size: Option<String>,

    #[arg(long)]
    garden_style: Option<String>,

    #[arg(long)]
    number_of_plants: Option<String>,

    #[arg(long)]
    project_urgency: Option<String>,

    #[arg(long)]
    soil_type: Option<String>,

    /// Add-on service; repeat for several
    #[arg(long = "extra", value_parser = parse_extra)]
    extras: Vec<Extra>,

    /// Budget band, e.g. `1000-5000`
    #[arg(long)]
    budget: Option<String>,

    /// Print line items as well as the total
    #[arg(short, long)]
    breakdown: bool,

    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid form snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Serialize)]
struct JsonReport<'a> {
    price: f64,
    formatted: String,
    subtotal: f64,
    ceiling: BudgetCeiling,
    capped: bool,
    items: &'a [LineItem],
    selections: &'a Selections,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    logging::init(
        config
            .as_ref()
            .map(|config| config.log_filter.as_str())
            .unwrap_or("info"),
    );

    match config.map_err(CliError::from).and_then(|config| run(cli, config)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "estimate failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: AppConfig) -> Result<String, CliError> {
    let format = cli.format.unwrap_or(config.output);
    let breakdown = cli.breakdown || config.show_breakdown;

    let base = match cli.input.as_deref() {
        Some(path) => load_snapshot(path)?,
        None => FormSnapshot::default(),
    };
    let snapshot = apply_flags(base, &cli);
    tracing::debug!(?snapshot, "pricing form snapshot");

    let selections = Selections::from(&snapshot);
    let estimate = estimate_breakdown(&selections);
    render(&selections, &estimate, format, breakdown)
}

fn load_snapshot(path: &Path) -> Result<FormSnapshot, CliError> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read {
                path: "stdin".to_string(),
                source,
            })?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        })?
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Flags override whatever the snapshot file provided.
fn apply_flags(mut snapshot: FormSnapshot, cli: &Cli) -> FormSnapshot {
    let overrides = [
        (&cli.service_type, &mut snapshot.service_type),
        (&cli.property_type, &mut snapshot.property_type),
        (&cli.area_size, &mut snapshot.area_size),
        (&cli.garden_style, &mut snapshot.garden_style),
        (&cli.number_of_plants, &mut snapshot.number_of_plants),
        (&cli.project_urgency, &mut snapshot.project_urgency),
        (&cli.soil_type, &mut snapshot.soil_type),
        (&cli.budget, &mut snapshot.budget),
    ];
    for (flag, field) in overrides {
        if let Some(value) = flag {
            *field = value.clone();
        }
    }
    for extra in &cli.extras {
        snapshot.extras.set(*extra, true);
    }
    snapshot
}

fn render(
    selections: &Selections,
    estimate: &Estimate,
    format: OutputFormat,
    breakdown: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => {
            let report = JsonReport {
                price: estimate.price.value(),
                formatted: format_price(estimate.price),
                subtotal: estimate.subtotal,
                ceiling: estimate.ceiling,
                capped: estimate.capped,
                items: &estimate.items,
                selections,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Text if breakdown => Ok(render_breakdown(estimate)),
        OutputFormat::Text => Ok(format_price(estimate.price)),
    }
}

fn render_breakdown(estimate: &Estimate) -> String {
    let mut lines: Vec<String> = estimate
        .items
        .iter()
        .map(|item| format!("{:<40} {:>12}", item.label, format_amount(item.amount)))
        .collect();
    lines.push(format!(
        "{:<40} {:>12}",
        "Subtotal",
        format_amount(estimate.subtotal)
    ));
    if estimate.capped {
        lines.push(format!("{:<40} {:>12}", "Capped at budget", estimate.ceiling.to_string()));
    }
    lines.push(format!(
        "{:<40} {:>12}",
        "Total",
        format_price(estimate.price)
    ));
    lines.join("\n")
}

fn parse_extra(value: &str) -> Result<Extra, String> {
    Extra::from_key(value.trim()).ok_or_else(|| {
        format!("unknown extra `{value}` (expected irrigation, pathways or seating)")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("estimate").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn prices_flags_only_job() {
        let output = run(
            cli(&[
                "--service-type",
                "garden-design",
                "--property-type",
                "residential",
                "--area-size",
                "50",
                "--garden-style",
                "japanese",
                "--number-of-plants",
                "10",
                "--project-urgency",
                "asap",
                "--soil-type",
                "clay",
                "--extra",
                "irrigation",
                "--budget",
                "1000-5000",
            ]),
            AppConfig::default(),
        )
        .unwrap();
        assert_eq!(output, "$1840.00");
    }

    #[test]
    fn small_budget_caps_the_total() {
        let output = run(
            cli(&["--area-size", "500", "--budget", "under-1000"]),
            AppConfig::default(),
        )
        .unwrap();
        assert_eq!(output, "$1000.00");
    }

    #[test]
    fn unknown_extra_is_rejected_by_parser() {
        let parsed = Cli::try_parse_from(["estimate", "--extra", "pool"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn flags_override_snapshot_fields() {
        let snapshot: FormSnapshot =
            serde_json::from_str(r#"{"service-type": "hardscaping", "area-size": 3}"#).unwrap();
        let merged = apply_flags(snapshot, &cli(&["--area-size", "7", "--extra", "seating"]));
        assert_eq!(merged.service_type, "hardscaping");
        assert_eq!(merged.area_size, "7");
        assert!(merged.extras.seating);
    }

    #[test]
    fn json_output_reports_cap() {
        let output = run(
            cli(&[
                "--extra",
                "seating",
                "--extra",
                "pathways",
                "--extra",
                "irrigation",
                "--budget",
                "under-1000",
                "--format",
                "json",
            ]),
            AppConfig::default(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["price"], 1000.0);
        assert_eq!(value["subtotal"], 1500.0);
        assert_eq!(value["capped"], true);
        assert_eq!(value["formatted"], "$1000.00");
        assert_eq!(value["items"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn json_output_echoes_normalised_selections() {
        let output = run(
            cli(&[
                "--service-type",
                " hardscaping ",
                "--area-size=-20",
                "--number-of-plants",
                "12.7",
                "--extra",
                "pathways",
                "--budget",
                "under-1000",
                "--format",
                "json",
            ]),
            AppConfig::default(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let selections = &value["selections"];
        assert_eq!(selections["service_type"], "hardscaping");
        assert_eq!(selections["area_size"], 0.0);
        assert_eq!(selections["number_of_plants"], 12);
        assert_eq!(selections["extras"], serde_json::json!(["pathways"]));
        assert_eq!(selections["budget_band"], "under-1000");
    }

    #[test]
    fn config_can_request_breakdown() {
        let config = AppConfig {
            show_breakdown: true,
            ..AppConfig::default()
        };
        let output = run(cli(&["--number-of-plants", "4"]), config).unwrap();
        assert!(output.contains("4 plants"));
        assert!(output.contains("Subtotal"));
        assert!(output.trim_end().ends_with("$20.00"));
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let err = run(
            cli(&["--input", "/definitely/not/here.json"]),
            AppConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
