use std::fs;
use std::path::PathBuf;

use marker_chart_rs::api::{LayoutConfig, MarkerChartEngine};
use marker_chart_rs::core::DataPoint;
use marker_chart_rs::render::SvgRenderer;
use marker_chart_rs::telemetry::{LAYOUT_TRACE_DIRECTIVES, init_tracing};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SceneInput {
    width: f64,
    #[serde(default)]
    config: LayoutConfig,
    rows: Vec<DataPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Svg,
}

#[derive(Debug)]
struct CliArgs {
    input_path: PathBuf,
    width_override: Option<f64>,
    format: OutputFormat,
    trace: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    if args.trace && !init_tracing(LAYOUT_TRACE_DIRECTIVES) {
        eprintln!("warning: --trace needs the `telemetry` feature");
    }
    let raw = fs::read_to_string(&args.input_path)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input_path.display()))?;
    let output = render_input(&raw, args.width_override, args.format)?;
    print!("{output}");
    Ok(())
}

/// Lays out one JSON input document and formats the result.
fn render_input(
    raw: &str,
    width_override: Option<f64>,
    format: OutputFormat,
) -> Result<String, String> {
    let input: SceneInput =
        serde_json::from_str(raw).map_err(|err| format!("invalid json: {err}"))?;

    let width = width_override.unwrap_or(input.width);
    let mut engine = MarkerChartEngine::new(SvgRenderer::default(), input.config, width)
        .map_err(|err| err.to_string())?;
    engine.set_data(input.rows).map_err(|err| err.to_string())?;

    match format {
        OutputFormat::Json => {
            let json = engine.scene_json_pretty().map_err(|err| err.to_string())?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Svg => {
            engine.render().map_err(|err| err.to_string())?;
            Ok(engine.into_renderer().into_document())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input_path: Option<PathBuf> = None;
    let mut width_override = None;
    let mut format = OutputFormat::Json;
    let mut trace = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                let width = value
                    .parse::<f64>()
                    .map_err(|err| format!("invalid width `{value}`: {err}"))?;
                width_override = Some(width);
            }
            "--svg" => format = OutputFormat::Svg,
            "--trace" => trace = true,
            "-h" | "--help" => {
                println!("Usage: cargo run --bin scene_dump -- <input.json> [--width <px>] [--svg] [--trace]");
                std::process::exit(0);
            }
            _ if input_path.is_none() && !arg.starts_with('-') => {
                input_path = Some(PathBuf::from(arg));
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        input_path: input_path.ok_or_else(|| "missing input path".to_owned())?,
        width_override,
        format,
        trace,
    })
}
