use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use is_terminal::IsTerminal;
use jsongraph::{highlight, is_valid_path, JsonGraphOptions, Visualizer};

/// Convert JSON documents into positioned node-link tree diagrams.
///
/// jgraph reads JSON from stdin or a file and emits a diagram as JSON: a
/// flat list of positioned nodes plus parent-to-child edges, ready for a
/// graph-drawing surface. A path query can highlight matching nodes.
#[derive(Parser, Debug)]
#[command(name = "jgraph")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file. If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path query to highlight, e.g. "$.user.name" or "user.name".
    #[arg(short, long, value_name = "PATH")]
    query: Option<String>,

    /// Validate PATH against the path grammar and exit.
    #[arg(long, value_name = "PATH")]
    check_path: Option<String>,

    /// X coordinate of the root node.
    #[arg(long, default_value = "0")]
    origin_x: f64,

    /// Y coordinate of the root node.
    #[arg(long, default_value = "0")]
    origin_y: f64,

    /// Horizontal distance between sibling nodes.
    #[arg(long, default_value = "180")]
    horizontal_gap: f64,

    /// Vertical distance between depth levels.
    #[arg(long, default_value = "120")]
    vertical_gap: f64,

    /// Maximum nesting depth before refusing the document.
    #[arg(long, default_value = "500")]
    max_depth: usize,

    /// Emit single-line JSON instead of pretty-printed.
    #[arg(short, long)]
    compact: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("jgraph: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &args.check_path {
        if is_valid_path(path) {
            println!("valid path: {}", path.trim());
            return Ok(());
        }
        return Err(format!("invalid path expression: {}", path.trim()).into());
    }

    // Read input
    let input = match &args.file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?,
        None => {
            if io::stdin().is_terminal() {
                return Err("no input file and stdin is a terminal \
                     (try: echo '{\"a\":1}' | jgraph)"
                    .into());
            }
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if input.trim().is_empty() {
        return Err("nothing to visualize: input is empty".into());
    }

    // Configure and generate
    let mut visualizer = Visualizer::new();
    configure_options(&mut visualizer.options, &args);
    let mut diagram = visualizer.generate(&input)?;

    if let Some(query) = &args.query {
        let matched = highlight(&mut diagram.nodes, query);
        if matched == 0 {
            // informational, not a failure
            eprintln!("jgraph: no nodes match '{}'", query.trim());
        }
    }

    // Write output
    let serialized = if args.compact {
        serde_json::to_string(&diagram)?
    } else {
        serde_json::to_string_pretty(&diagram)?
    };

    if let Some(path) = args.output {
        fs::write(&path, &serialized)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        let mut stdout = io::stdout();
        stdout.write_all(serialized.as_bytes())?;
        stdout.write_all(b"\n")?;
    }

    Ok(())
}

fn configure_options(opts: &mut JsonGraphOptions, args: &Args) {
    opts.origin_x = args.origin_x;
    opts.origin_y = args.origin_y;
    opts.horizontal_gap = args.horizontal_gap;
    opts.vertical_gap = args.vertical_gap;
    opts.min_child_span = args.horizontal_gap;
    opts.max_depth = args.max_depth;
}
