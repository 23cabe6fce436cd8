#![warn(clippy::all, clippy::pedantic)]

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use csv::Writer;
use netflow::{Edge, EdmondsKarp, FlowNetwork, Solution, SolveOptions};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Maximum flow in a directed capacitated network (Edmonds-Karp).
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input CSV of edges with `from,to,capacity` headers
    input: PathBuf,

    /// Number of vertices; inferred from the largest endpoint when omitted
    #[arg(long)]
    vertices: Option<usize>,

    /// Source vertex
    #[arg(long, default_value_t = 0)]
    source: usize,

    /// Sink vertex; defaults to the last vertex
    #[arg(long)]
    sink: Option<usize>,

    /// Write per-edge `from,to,flow,capacity` results to this CSV path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Abort after this many augmenting iterations
    #[arg(long)]
    max_iterations: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// Read the edge list from a CSV file; negative capacities are rejected while
// deserializing
fn read_edges_csv(filepath: &PathBuf) -> Result<Vec<Edge<i64>>, Box<dyn Error>> {
    let file = File::open(filepath)?;
    let mut rdr = csv::Reader::from_reader(file);
    let rows: Result<Vec<Edge<i64>>, _> = rdr.deserialize().collect();
    Ok(rows?)
}

// Write the solved per-edge flows
fn write_flows_csv(network: &FlowNetwork<i64>, filepath: &PathBuf) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filepath)?;
    wtr.write_record(["from", "to", "flow", "capacity"])?;
    for edge in network.edges() {
        wtr.write_record([
            edge.from().to_string(),
            edge.to().to_string(),
            edge.flow().to_string(),
            edge.capacity().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_report(network: &FlowNetwork<i64>, solution: &Solution<i64>, source: usize, sink: usize) {
    println!("NETWORK STATISTICS:");
    println!("Total vertices: {}", network.num_vertices());
    println!("Total edges: {}", network.num_edges());
    println!("Source vertex: {source}");
    println!("Sink vertex: {sink}\n");

    println!("EDGE FLOW DETAILS:");
    println!("{network}");

    if !solution.paths.is_empty() {
        println!("AUGMENTING PATHS:");
        for (i, record) in solution.paths.iter().enumerate() {
            println!("Path {:2} {record}", i + 1);
        }
        println!("\nTotal paths found: {}", solution.paths.len());
    }

    println!("Min-cut source side: {:?}", network.min_cut(source));
    println!("\nMAXIMUM FLOW: {}", solution.max_flow);
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let edges = read_edges_csv(&args.input)?;

    let num_vertices = args.vertices.unwrap_or_else(|| {
        edges
            .iter()
            .map(|e| e.from().max(e.to()) + 1)
            .max()
            .unwrap_or(0)
    });
    let sink = args.sink.unwrap_or(num_vertices.saturating_sub(1));

    let mut network = FlowNetwork::new(num_vertices);
    for edge in &edges {
        network.add_edge(edge.from(), edge.to(), edge.capacity());
    }

    let solver = EdmondsKarp::new(SolveOptions {
        max_iterations: args.max_iterations,
        ..SolveOptions::default()
    });

    let start = Instant::now();
    let solution = solver
        .solve(&mut network, args.source, sink)
        .map_err(|e| e.to_string())?;
    let elapsed = start.elapsed();

    print_report(&network, &solution, args.source, sink);
    println!("Runtime: {:.2} ms", elapsed.as_secs_f64() * 1000.0);

    if let Some(output) = &args.output {
        write_flows_csv(&network, output)?;
    }

    Ok(())
}
