#![allow(dead_code)]

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::process::exit;

use clap::{Args, Parser, Subcommand};
use log::{error, info};

use crate::error::ProcessError;
use crate::serialization::input::InputDocument;
use crate::test::random_samples::{self, RandomNetworkPlan};
use crate::timer::Timer;

mod catalogue;
mod col;
mod error;
mod geo;
mod graph;
mod indexer;
mod map_renderer;
mod request_handler;
mod routing;
mod serialization;
mod shortest_path;
mod svg;
mod test;
mod timer;
mod weight;

#[derive(Parser, Debug)]
#[command(
    version,
    author,
    about = "Bus statistics, stop listings, SVG maps and fastest itineraries for a transit network"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    #[command(about = "Answer the stat requests of a JSON request document")]
    Process(ProcessArgs),

    #[command(
        about = "Build a router over a random network and answer random route requests"
    )]
    RunRandom(RandomArgs),
}

#[derive(Args, Clone, Debug)]
struct ProcessArgs {
    #[arg(
        short = 'i',
        long,
        help = "The request document. Read from stdin if not given."
    )]
    input: Option<String>,

    #[arg(
        short = 'o',
        long,
        help = "The file to write the answers to. Written to stdout if not given."
    )]
    output: Option<String>,

    #[arg(long, help = "Pretty-print the answers.")]
    pretty: bool,
}

fn main_process(args: &ProcessArgs) -> Result<(), ProcessError> {
    let mut timer = Timer::start();
    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let doc: InputDocument = serde_json::from_reader(reader)?;
    timer.lap("parse");
    info!(
        "Read {} base requests and {} stat requests",
        doc.base_requests.len(),
        doc.stat_requests.len()
    );

    let responses = serialization::process(&doc)?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    if args.pretty {
        serde_json::to_writer_pretty(&mut writer, &responses)?;
    } else {
        serde_json::to_writer(&mut writer, &responses)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    timer.lap("write");

    info!("Done in {:?}", timer.elapsed());
    Ok(())
}

#[derive(Args, Clone, Debug)]
struct RandomArgs {
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(
        long,
        default_value_t = 1000,
        help = "The number of stops to generate."
    )]
    stops: usize,

    #[arg(long, default_value_t = 100, help = "The number of buses.")]
    buses: usize,

    #[arg(
        long,
        default_value_t = 20,
        help = "The maximal number of stops a generated bus calls at."
    )]
    max_stops_per_bus: usize,

    #[arg(long, default_value_t = 10000, help = "The number of route requests.")]
    queries: usize,
}

fn main_run_random(args: &RandomArgs) -> Result<(), ProcessError> {
    let plan = RandomNetworkPlan {
        num_stops: args.stops.max(2),
        num_buses: args.buses,
        max_stops_per_bus: args.max_stops_per_bus,
    };
    random_samples::run(args.seed, &plan, args.queries)
}

fn main() {
    env_logger::builder().parse_env("LOG").init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Process(args) => main_process(args),
        Commands::RunRandom(args) => main_run_random(args),
    };
    result.unwrap_or_else(|it| {
        error!("{}", it);
        exit(1);
    });
}
