use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use swimlane::{ConfigError, DiagramError, Editor, EditorConfig, ProcessView, View, resolve_lanes};
use tracing::Level;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Diagram(#[from] DiagramError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "swimlane", about = "Inspect swimlane process diagrams")]
struct Cli {
    #[command(flatten)]
    geometry: GeometryArgs,

    /// Log editor decisions at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Overrides applied on top of `SWIMLANE_*` environment configuration.
#[derive(Args, Debug)]
struct GeometryArgs {
    #[arg(long, global = true)]
    lane_height: Option<f64>,

    #[arg(long, global = true)]
    min_canvas_height: Option<f64>,

    #[arg(long, global = true)]
    canvas_width: Option<f64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print lane bands and the total canvas height.
    Layout { record: PathBuf },
    /// Report dangling edges and nodes outside every known lane.
    Check { record: PathBuf },
    /// Print the draw list for the diagram.
    Scene { record: PathBuf },
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    dangling_edges: Vec<String>,
    orphaned_nodes: Vec<String>,
}

impl CheckReport {
    fn is_clean(&self) -> bool {
        self.dangling_edges.is_empty() && self.orphaned_nodes.is_empty()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let config = resolve_config(&cli.geometry)?;
    let editor = Editor::read_only(config);

    match &cli.command {
        Command::Layout { record } => {
            let view = load(record)?;
            let layout = editor.layout(View::new(&view.diagram, &view.actors));
            print_json(&layout)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { record } => {
            let view = load(record)?;
            let report = check(&view);
            print_json(&report)?;
            if report.is_clean() {
                Ok(ExitCode::SUCCESS)
            } else {
                tracing::warn!(
                    dangling = report.dangling_edges.len(),
                    orphaned = report.orphaned_nodes.len(),
                    "diagram has broken references"
                );
                Ok(ExitCode::from(1))
            }
        }
        Command::Scene { record } => {
            let view = load(record)?;
            let scene = editor.scene(View::new(&view.diagram, &view.actors));
            print_json(&scene)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn resolve_config(args: &GeometryArgs) -> Result<EditorConfig, CliError> {
    let mut config = EditorConfig::from_env()?;
    if let Some(h) = args.lane_height {
        config.lane_height = h;
    }
    if let Some(h) = args.min_canvas_height {
        config.min_canvas_height = h;
    }
    if let Some(w) = args.canvas_width {
        config.canvas_width = w;
    }
    Ok(config.validate()?)
}

fn load(path: &Path) -> Result<ProcessView, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_owned(), source })?;
    let view = ProcessView::from_json(&text)?;
    tracing::debug!(
        path = %path.display(),
        actors = view.actors.len(),
        nodes = view.diagram.nodes.len(),
        edges = view.diagram.edges.len(),
        "record loaded"
    );
    Ok(view)
}

/// Nodes are checked against the lanes as laid out, so a diagram drawn with
/// no actors may still point at the fallback lane.
fn check(view: &ProcessView) -> CheckReport {
    let lanes = resolve_lanes(&view.actors);
    CheckReport {
        dangling_edges: view.diagram.dangling_edges().map(|e| e.id.clone()).collect(),
        orphaned_nodes: view.diagram.orphaned_nodes(&lanes).map(|n| n.id.clone()).collect(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
