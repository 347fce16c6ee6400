use clap::Parser;
use qcsim::algorithms;
use qcsim::error::Result;
use qcsim::sampler::{Sampler, SimulationResult};
use qcsim::visualizer;
use qcsim::Circuit;

const QCSIM_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = "qcsim",
    version = QCSIM_VERSION,
    about = "Dense state-vector quantum circuit simulator with shot-based sampling",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Builds and samples the 2-qubit Bell state.
    Bell {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Builds and samples a GHZ state.
    Ghz {
        /// Number of qubits.
        #[arg(long, default_value_t = 3)]
        qubits: usize,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Applies the quantum Fourier transform to |0...0> and prints the state.
    Qft {
        /// Number of qubits.
        #[arg(long, default_value_t = 3)]
        qubits: usize,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Runs Grover search for a marked basis state.
    Grover {
        /// Marked basis state index.
        #[arg(long, default_value_t = 3)]
        marked: usize,
        /// Number of qubits (1 to 3).
        #[arg(long, default_value_t = 2)]
        qubits: usize,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Runs the quantum teleportation circuit.
    Teleport {
        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Number of measurement shots.
    #[arg(long, default_value_t = 1000)]
    shots: usize,
    /// Seed for reproducible sampling; omitted means entropy-seeded.
    #[arg(long)]
    seed: Option<u64>,
    /// Emit the full result as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Bell { run } => algorithms::bell_state().and_then(|c| sample(&c, &run)),
        Commands::Ghz { qubits, run } => {
            algorithms::ghz_state(qubits).and_then(|c| sample(&c, &run))
        }
        Commands::Qft { qubits, run } => {
            algorithms::quantum_fourier_transform(qubits).and_then(|c| sample(&c, &run))
        }
        Commands::Grover {
            marked,
            qubits,
            run,
        } => algorithms::grover_search(&[marked], qubits).and_then(|c| sample(&c, &run)),
        Commands::Teleport { run } => {
            algorithms::quantum_teleportation().and_then(|c| sample(&c, &run))
        }
    };

    if let Err(err) = outcome {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn sample(circuit: &Circuit, run: &RunArgs) -> Result<()> {
    let mut sampler = match run.seed {
        Some(seed) => Sampler::with_seed(run.shots, seed),
        None => Sampler::new(run.shots),
    };
    let result = sampler.simulate(circuit, 0)?;

    if run.json {
        print_json(&result);
    } else {
        print!("{}", circuit);
        println!();
        print!("{}", visualizer::format_state(&result.final_state, 4));
        println!();
        print!("{}", visualizer::format_probabilities(&result.probabilities, 2));
        println!();
        print!("{}", visualizer::format_counts(&result.counts, result.shots));
        println!("\nElapsed: {:?}", result.elapsed);
    }
    Ok(())
}

fn print_json(result: &SimulationResult) {
    match serde_json::to_string_pretty(result) {
        Ok(rendered) => println!("{}", rendered),
        Err(err) => eprintln!("error: failed to serialize result: {}", err),
    }
}
