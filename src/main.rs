// Command-line driver: loads patterns, trains, then answers predictions on stdin.
// All learning logic lives in the library (src/lib.rs and its modules).
//
//   cargo run -- train --data data/patterns.csv
//   cargo run -- perceptron --data data/patterns.csv

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use perceptron_nn::{
    load_patterns_file, run_prediction_loop, ConfigError, Error, NetworkConfig, ReaderSource,
    SingleLayerPerception, TrainState, Trainer,
};

#[derive(Parser)]
#[command(version, about = "Backpropagation classifier for 2D points")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train the hidden-layer network, then classify points typed on stdin
    Train {
        /// CSV of training records: x,y,label
        #[arg(short, long, value_name = "PATH")]
        data: PathBuf,
        /// JSON file overriding the default network config
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
        #[arg(long, value_name = "INT")]
        hidden: Option<usize>,
        #[arg(long, value_name = "FLOAT")]
        learning_rate: Option<f64>,
        /// Epochs before the weights are re-randomized
        #[arg(long, value_name = "INT")]
        restart_after: Option<usize>,
        #[arg(long, value_name = "INT")]
        seed: Option<u64>,
    },
    /// Train the single-neuron delta-rule perceptron
    Perceptron {
        #[arg(short, long, value_name = "PATH")]
        data: PathBuf,
        /// Input coordinates per record; defaults to the network config's
        #[arg(long, value_name = "INT")]
        input_dims: Option<usize>,
        #[arg(long, value_name = "INT", default_value_t = 1000)]
        max_epochs: usize,
        #[arg(long, value_name = "FLOAT", default_value_t = 0.1)]
        target_error: f64,
        #[arg(long, value_name = "INT")]
        seed: Option<u64>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Error> {
    init_logging();
    let args = Cli::parse();

    match args.command {
        Command::Train { data, config, hidden, learning_rate, restart_after, seed } => {
            let mut config = match config {
                Some(path) => NetworkConfig::load_json(path)?,
                None => NetworkConfig::default(),
            };
            config.hidden_dims = hidden.unwrap_or(config.hidden_dims);
            config.learning_rate = learning_rate.unwrap_or(config.learning_rate);
            config.restart_after = restart_after.unwrap_or(config.restart_after);
            config.seed = seed.or(config.seed);
            config.validate()?;
            run_train(data, config)
        }
        Command::Perceptron { data, input_dims, max_epochs, target_error, seed } => {
            let input_dims = input_dims.unwrap_or(NetworkConfig::default().input_dims);
            run_perceptron(data, input_dims, max_epochs, target_error, seed)
        }
    }
}

fn run_train(data: PathBuf, config: NetworkConfig) -> Result<(), Error> {
    let patterns = load_patterns_file(&data, config.input_dims)?;
    info!(path = %data.display(), count = patterns.len(), "patterns loaded");

    let mut trainer = Trainer::new(config);
    println!("Network Initialised");
    trainer.train(&patterns, |stats| {
        println!("Iteration {} Error {:.3}", stats.iteration, stats.error);
        if stats.state == TrainState::Restarting {
            println!("Network Initialised");
        }
    });

    println!("Begin network testing");
    println!("Press Ctrl C to exit");
    let stdin = io::stdin();
    let mut source = ReaderSource::new(stdin.lock());
    let mut stdout = io::stdout();
    let predictions = run_prediction_loop(trainer.network_mut(), &mut source, &mut stdout)?;
    stdout.flush()?;
    info!(predictions, "prediction loop finished");
    Ok(())
}

fn run_perceptron(
    data: PathBuf,
    input_dims: usize,
    max_epochs: usize,
    target_error: f64,
    seed: Option<u64>,
) -> Result<(), Error> {
    if input_dims == 0 {
        return Err(ConfigError::Invalid("input_dims must be at least 1".into()).into());
    }
    let patterns = load_patterns_file(&data, input_dims)?;
    let mut perceptron = match seed {
        Some(seed) => SingleLayerPerception::with_seed(seed),
        None => SingleLayerPerception::default(),
    };

    for iteration in 0..max_epochs {
        let error = perceptron.train_epoch(&patterns);
        println!("Iteration {} Error {:.3}", iteration, error);
        if error <= target_error {
            break;
        }
    }

    // the Blue/Red grid only makes sense for 2D points
    if input_dims != 2 {
        return Ok(());
    }
    println!();
    println!("X, Y, Output");
    for i in 0..5 {
        for j in 0..5 {
            let (x, y) = (-1.0 + 0.5 * i as f64, -1.0 + 0.5 * j as f64);
            let output = perceptron.predict(&[x, y]);
            println!("{}, {}, {}", x, y, if output >= 0.0 { "Blue" } else { "Red" });
        }
    }
    Ok(())
}
