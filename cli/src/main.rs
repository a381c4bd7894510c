//! Chromagraph CLI: color an adjacency-list graph and render it
//!
//! Loads a JSON adjacency list, builds the graph (dropping dangling
//! references), colors it with the chosen neighbor policy, verifies the
//! result and optionally renders it through Graphviz.

use anyhow::{Context, Result};
use chromagraph::coloring::{colorize, conflicts, Bidirectional, NeighborPolicy, Outgoing};
use chromagraph::graph::{Graph, GraphType};
use chromagraph::ingest::{build_graph, load_adjacency};
use chromagraph::render::{to_dot, DotOptions, GraphvizRenderer};
use chromagraph::{ColoringOutcome, Palette};
use clap::{Parser, ValueEnum};
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "chromagraph", version, about = "Greedy graph coloring with Graphviz output")]
struct Cli {
    /// JSON adjacency list: {"node": ["neighbor", ...], ...}
    #[arg(long, short)]
    input: PathBuf,

    /// Render the colored graph to this file
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Treat adjacency entries as directed edges
    #[arg(long)]
    directed: bool,

    /// Which neighbors constrain a node's color
    #[arg(long, default_value = "outgoing")]
    policy: PolicyArg,

    /// Output format for the assignment printed to stdout
    #[arg(long, default_value = "table")]
    format: OutputFormat,

    /// Node attribute used as the display label
    #[arg(long, default_value = "label")]
    label_key: String,

    /// Edge attribute used as the edge label
    #[arg(long, default_value = "weight")]
    weight_key: String,

    /// Graphviz executable
    #[arg(long, default_value = "dot", env = "CHROMAGRAPH_DOT")]
    dot_program: String,

    /// Graphviz output format (-T)
    #[arg(long, default_value = "png")]
    image_format: String,
}

#[derive(Clone, ValueEnum)]
enum PolicyArg {
    Outgoing,
    Bidirectional,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Dot,
}

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let data = load_adjacency(&cli.input)
        .with_context(|| format!("loading {}", cli.input.display()))?;

    let graph_type = if cli.directed {
        GraphType::Directed
    } else {
        GraphType::Undirected
    };
    let mut graph = build_graph(&data, graph_type)?;

    let outcome = match cli.policy {
        PolicyArg::Outgoing => color_and_verify(&mut graph, &Outgoing)?,
        PolicyArg::Bidirectional => color_and_verify(&mut graph, &Bidirectional)?,
    };

    let palette = Palette::default();
    let options = DotOptions::new(cli.label_key.as_str(), cli.weight_key.as_str())
        .with_palette(palette.clone());
    let dot = to_dot(&graph, &options);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Dot => println!("{}", dot),
        OutputFormat::Table => print_table(&outcome, &palette),
    }

    if let Some(path) = &cli.output {
        let renderer = GraphvizRenderer::new(cli.dot_program.as_str(), cli.image_format.as_str());
        renderer
            .render_to_file(&dot, path)
            .with_context(|| format!("rendering {}", path.display()))?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}

fn color_and_verify<P: NeighborPolicy>(graph: &mut Graph, policy: &P) -> Result<ColoringOutcome> {
    let outcome = colorize(graph, policy)?;
    let found = conflicts(graph, policy)?;
    if found.is_empty() {
        info!("No color conflicts found");
    } else {
        for (a, b) in &found {
            warn!("Color conflict: {} and {}", a, b);
        }
    }
    Ok(outcome)
}

fn print_table(outcome: &ColoringOutcome, palette: &Palette) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "node", "color", "name"]);

    for (step, (node, color)) in outcome.assignments.iter().enumerate() {
        table.add_row(vec![
            (step + 1).to_string(),
            node.to_string(),
            color.to_string(),
            palette.resolve(*color).to_string(),
        ]);
    }

    println!("{}", table);
    println!(
        "{} node(s), {} color(s)",
        outcome.iterations(),
        outcome.color_count()
    );
}
