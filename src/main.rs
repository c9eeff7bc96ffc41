//! cgp2svg CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cgp2svg::activity::compute_active;
use cgp2svg::annotate::annotate;
use cgp2svg::chromosome::decode;
use cgp2svg::summary::summarize;
use cgp2svg::svg::SvgDocument;
use cgp2svg::RenderPolicy;

/// Render a CGP chromosome into an SVG circuit template.
#[derive(Parser, Debug)]
#[command(
    name = "cgp2svg",
    version = env!("CGP2SVG_VERSION"),
    about = "Render a CGP chromosome into an SVG circuit template"
)]
struct Cli {
    /// CGP circuit (.chr); reads stdin if not provided
    #[arg(short = 'c', long = "circuit")]
    circuit: Option<PathBuf>,

    /// SVG template
    #[arg(short = 't', long = "template")]
    template: PathBuf,

    /// Write output SVG to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output primary-input connections as text, not lines
    #[arg(short = 'a', long = "primary-as-text")]
    primary_as_text: bool,

    /// Output primary-input connections of inactive nodes as text, not lines
    #[arg(short = 'i', long = "primary-inactive-as-text")]
    primary_inactive_as_text: bool,

    /// Print a chromosome summary to stderr
    #[arg(long = "summary")]
    summary: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_circuit(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("cannot read circuit '{}'", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read circuit from stdin")?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let text = read_circuit(cli.circuit.as_deref())?;
    let chromosome = decode(&text).context("cannot decode circuit")?;
    let active = compute_active(&chromosome);
    tracing::debug!(
        nodes = chromosome.node_count(),
        active = active.len(),
        output = %chromosome.output(),
        "decoded chromosome"
    );

    if cli.summary {
        eprint!("{}", summarize(&chromosome, &active));
    }

    let template = fs::read_to_string(&cli.template)
        .with_context(|| format!("cannot read template '{}'", cli.template.display()))?;
    let mut document = SvgDocument::parse(&template)
        .with_context(|| format!("cannot parse template '{}'", cli.template.display()))?;

    let policy = RenderPolicy {
        primary_as_text: cli.primary_as_text,
        primary_inactive_as_text: cli.primary_inactive_as_text,
    };
    annotate(&chromosome, &active, policy, &mut document)
        .context("template does not match the circuit layout")?;
    let rendered = document.to_svg_string();

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("cannot write '{}'", path.display()))?;
            tracing::debug!(path = %path.display(), "wrote svg");
        }
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush().context("cannot flush stdout")?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
