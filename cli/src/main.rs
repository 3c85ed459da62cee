mod alloc;
mod config;
mod instrument;
mod render;
mod report;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use graph_dls_core::Graph;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::alloc::PeakAlloc;
use crate::config::{OutputFormat, Settings};
use crate::instrument::Instrumentation;
use crate::report::RunReport;

#[global_allocator]
static ALLOC: PeakAlloc = PeakAlloc::new();

/// Depth-limited search over a fixed weighted graph, checked against Dijkstra
#[derive(Parser, Debug)]
#[command(name = "graph-dls")]
#[command(about = "Depth-limited search demo with optimality check", long_about = None)]
struct Args {
    /// Start node (prompted for if omitted)
    #[arg(long)]
    start: Option<String>,

    /// Goal node (prompted for if omitted)
    #[arg(long)]
    goal: Option<String>,

    /// Maximum search depth in edges (prompted for if omitted)
    #[arg(long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Where to write the traversal image
    #[arg(short, long, default_value = "dls_traversal.svg")]
    output: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    format: OutputFormat,

    /// Disable ANSI colors in the console report
    #[arg(long)]
    no_color: bool,

    /// Skip writing the traversal image
    #[arg(long)]
    no_render: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let color_capable = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    execute(
        &args,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr(),
        color_capable,
    )
}

/// One full run. Prompts go to `prompt` so that `out` carries only the report.
fn execute<R: BufRead, O: Write, P: Write>(
    args: &Args,
    input: &mut R,
    out: &mut O,
    prompt: &mut P,
    color_capable: bool,
) -> Result<()> {
    let settings = Settings::resolve(args, input, prompt, color_capable)?;
    info!(
        start = %settings.request.start,
        goal = %settings.request.goal,
        limit = settings.request.limit,
        "request resolved"
    );

    let graph = Graph::sample();
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        memory_bytes = graph.memory_usage(),
        "graph ready"
    );

    let mut probe = Instrumentation::new(&ALLOC);
    let outcome = graph_dls_core::run_with_probe(&graph, &settings.request, &mut probe)
        .context("search aborted")?;
    let report = RunReport::new(outcome, probe.stats());

    let reporter = report::reporter_for(settings.format, settings.color);
    let text = reporter
        .generate(&report)
        .map_err(|e| anyhow!("{} reporter failed: {e}", reporter.name()))?;
    writeln!(out, "{text}")?;

    if settings.render {
        let svg = render::render_svg(&graph, &report.outcome);
        render::write_svg(&settings.output, &svg)?;
        info!(path = %settings.output.display(), "traversal image written");
        if settings.format == OutputFormat::Console {
            writeln!(out, "Traversal image saved to '{}'", settings.output.display())?;
        }
    }

    out.flush()?;
    Ok(())
}
