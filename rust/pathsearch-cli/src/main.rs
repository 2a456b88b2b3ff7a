use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use pathsearch_core::{load_graph, samples, save_graph, search, Graph, SearchMode, SearchOptions};

#[derive(Parser, Debug)]
#[command(name = "pathsearch", version, about = "Shortest path over a labeled weighted graph (uniform-cost or A*)")]
struct Args {
    /// Graph document (JSON)
    #[arg(long = "graph", value_name = "PATH", conflicts_with = "sample")]
    graph: Option<PathBuf>,

    /// Bundled sample graph: twelve-node, seven-node, eight-node
    #[arg(long = "sample", value_name = "NAME")]
    sample: Option<String>,

    /// uniform-cost (dijkstra) or heuristic (astar)
    #[arg(long = "mode", value_name = "MODE")]
    mode: Option<SearchMode>,

    #[arg(long = "max-expansions", value_name = "N")]
    max_expansions: Option<u64>,

    /// Wall-clock bound in milliseconds, 0 disables
    #[arg(long = "timeout-ms", value_name = "MS")]
    timeout_ms: Option<u64>,

    /// SearchOptions as JSON; missing fields take defaults
    #[arg(long = "options", value_name = "PATH")]
    options: Option<PathBuf>,

    /// Write the loaded graph back out as a JSON document
    #[arg(long = "write-graph", value_name = "PATH")]
    write_graph: Option<PathBuf>,

    /// Print the full report as JSON instead of the solution line
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long = "log-json")]
    log_json: bool,
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn resolve_options(args: &Args) -> Result<SearchOptions> {
    let base: SearchOptions = match &args.options {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
            serde_json::from_str(&text).with_context(|| format!("parsing options {:?}", path))?
        }
        None => SearchOptions::default(),
    };
    let mut opts = base.with_env();
    if let Some(mode) = args.mode {
        opts.mode = mode;
    }
    if let Some(n) = args.max_expansions {
        opts.max_expansions = n;
    }
    if let Some(ms) = args.timeout_ms {
        opts.timeout_ms = ms;
    }
    Ok(opts)
}

fn resolve_graph(args: &Args) -> Result<Graph> {
    match (&args.graph, &args.sample) {
        (Some(path), _) => load_graph(path).with_context(|| format!("loading graph {:?}", path)),
        (None, Some(name)) => match samples::by_name(name) {
            Some(g) => Ok(g),
            None => bail!("unknown sample '{}', expected one of {:?}", name, samples::NAMES),
        },
        (None, None) => bail!("either --graph or --sample is required"),
    }
}

fn run(args: Args) -> Result<bool> {
    let opts = resolve_options(&args)?;
    let graph = resolve_graph(&args)?;
    info!(nodes = graph.len(), mode = %opts.mode, max_expansions = opts.max_expansions, timeout_ms = opts.timeout_ms, "loaded graph");

    if let Some(out) = &args.write_graph {
        save_graph(out, &graph).with_context(|| format!("writing graph {:?}", out))?;
        info!(path = ?out, "wrote graph document");
    }

    let report = search(&graph, &opts)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let (true, Some(cost)) = (report.is_found(), report.cost) {
        println!("solution: {} (cost {})", report.path_line(), cost);
    } else {
        println!("no path: {}", report.reason.as_deref().unwrap_or("unknown"));
    }
    Ok(report.is_found())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_json);
    info!(core_version = %pathsearch_core::version(), "starting pathsearch");

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!(error = ?e, "search failed");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
