/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use log::{warn, LevelFilter};
use std::io;
use std::path::PathBuf;

/* Custom libraries */
use elevator_sim::config::{self, Config};
use elevator_sim::simulation::{ReportFormat, Reporter, SimEvent, Simulator};
use elevator_sim::unwrap_or_exit;

/* Command line */
#[derive(Debug, Parser)]
#[clap(author, version, about = "Single elevator dispatch simulation")]
struct Args {
    /// Configuration file. Defaults to ./config.toml when present
    #[clap(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    #[clap(long)]
    floors: Option<u8>,

    #[clap(long)]
    capacity: Option<usize>,

    #[clap(long)]
    initial_floor: Option<u8>,

    /// How many passengers may be live at the same time
    #[clap(long)]
    max_passengers: Option<usize>,

    /// How many passengers to spawn over the whole run
    #[clap(long)]
    total_passengers: Option<usize>,

    /// Chance in percent that a passenger spawns on a tick
    #[clap(long)]
    spawn_probability: Option<u8>,

    #[clap(long)]
    seed: Option<u64>,

    #[clap(long)]
    max_ticks: Option<u64>,

    /// Print events as JSON lines instead of the console report
    #[clap(long)]
    json: bool,

    #[clap(long, default_value = "warn")]
    log_level: LevelFilter,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(floors) = self.floors {
            config.elevator.n_floors = floors;
        }
        if let Some(capacity) = self.capacity {
            config.elevator.capacity = capacity;
        }
        if let Some(initial_floor) = self.initial_floor {
            config.elevator.initial_floor = initial_floor;
        }
        if let Some(max_passengers) = self.max_passengers {
            config.simulation.max_passengers = max_passengers;
        }
        if let Some(total_passengers) = self.total_passengers {
            config.simulation.total_passengers = total_passengers;
        }
        if let Some(spawn_probability) = self.spawn_probability {
            config.simulation.spawn_probability = spawn_probability;
        }
        if self.seed.is_some() {
            config.simulation.seed = self.seed;
        }
        if self.max_ticks.is_some() {
            config.simulation.max_ticks = self.max_ticks;
        }
    }
}

/* Main */
fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level)
        .init();

    // Load the configuration
    let mut config = unwrap_or_exit!(config::load_config_or_default(args.config.as_deref()));
    args.apply_overrides(&mut config);
    unwrap_or_exit!(config.validate());

    // Reporter channel
    let (events_tx, events_rx) = cbc::unbounded::<SimEvent>();
    let format = if args.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };
    let mut reporter = Reporter::new(events_rx, format, io::stdout());

    // Run the simulation
    let mut simulator = unwrap_or_exit!(Simulator::with_random_source(&config, events_tx));
    let result = simulator.run(|| {
        if let Err(e) = reporter.drain() {
            warn!("Failed to write report: {}", e);
        }
    });
    unwrap_or_exit!(reporter.drain());
    unwrap_or_exit!(result);
}
