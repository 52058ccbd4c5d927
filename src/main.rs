//! Headless front end for the three-layer network.
//!
//! Run with:
//!   cargo run -- train --file xor.txt --save-state trained.txt
//!   cargo run -- evaluate --inputs 1,0 --targets 1 --start-values trained.txt
//!   RUST_LOG=debug cargo run -- show

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use trilayer_nn::io::{load_start_values, load_training_file, save_start_values};
use trilayer_nn::{ActivationFunction, Network, NetworkConfig, TrainConfig, replay};

#[derive(Parser, Debug)]
#[command(author, version, about = "Three-layer feed-forward network with online backpropagation")]
struct Cli {
    #[command(flatten)]
    network: NetworkArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct NetworkArgs {
    /// JSON network configuration; flags below override its fields
    #[arg(long, global = true)]
    config: Option<String>,

    /// Activation function (LINEAR or SIGMOID)
    #[arg(long, global = true)]
    activation: Option<String>,

    /// Share of the previous weight change added to the next one
    #[arg(long, global = true)]
    momentum: Option<f64>,

    /// Number of input neurons
    #[arg(long, global = true)]
    inputs_count: Option<usize>,

    /// Number of hidden neurons
    #[arg(long, global = true)]
    hidden: Option<usize>,

    /// Number of output neurons
    #[arg(long, global = true)]
    outputs_count: Option<usize>,

    /// Seed for the initial weights
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Start-values file applied after construction
    #[arg(long, global = true)]
    start_values: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a training file against the network
    Train {
        /// Training file: one example per line, `*K` sets the repeat count
        #[arg(long)]
        file: String,

        /// Write the trained state in start-values format
        #[arg(long)]
        save_state: Option<String>,

        /// Log the error every this many epochs
        #[arg(long, default_value = "100")]
        log_interval: usize,
    },
    /// Run one forward and one backward pass on a single example
    Evaluate {
        /// Comma-separated input values
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        inputs: Vec<f64>,

        /// Comma-separated target values
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        targets: Vec<f64>,

        /// Write the updated state in start-values format
        #[arg(long)]
        save_state: Option<String>,
    },
    /// Print every neuron of the network
    Show,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut network = build_network(&cli.network)?;

    match cli.command {
        Command::Train { file, save_state, log_interval } => {
            let set = load_training_file(&file)
                .with_context(|| format!("failed to read training file {file}"))?;
            let history = replay(&mut network, &set, &TrainConfig::new(log_interval));
            match history.last() {
                Some(last) => println!(
                    "Trained {} epochs, final mse = {:.6}, result = {}",
                    history.len(),
                    last.mse,
                    network.result
                ),
                None => println!("Nothing to train"),
            }
            if let Some(path) = save_state {
                save_start_values(&network, &path)
                    .with_context(|| format!("failed to write {path}"))?;
                info!("saved state to {}", path);
            }
        }
        Command::Evaluate { inputs, targets, save_state } => {
            let prediction = network.evaluate(&inputs, &targets)?;
            println!("Result: {prediction}");
            println!("{network}");
            if let Some(path) = save_state {
                save_start_values(&network, &path)
                    .with_context(|| format!("failed to write {path}"))?;
            }
        }
        Command::Show => println!("{network}"),
    }

    Ok(())
}

impl NetworkArgs {
    /// Base configuration from `--config`, or the defaults, with flag overrides applied.
    fn resolve_config(&self) -> Result<NetworkConfig> {
        let mut config = match &self.config {
            Some(path) => NetworkConfig::load_json(path)
                .with_context(|| format!("failed to read config {path}"))?,
            None => NetworkConfig::default(),
        };
        self.apply(&mut config)?;
        Ok(config)
    }

    /// Overrides the fields of `config` for every flag that was given.
    ///
    /// An unknown activation name is a setup error; `config` is left untouched.
    fn apply(&self, config: &mut NetworkConfig) -> trilayer_nn::Result<()> {
        if let Some(name) = &self.activation {
            config.activation = name.parse::<ActivationFunction>()?;
        }
        if let Some(momentum) = self.momentum {
            config.momentum = momentum;
        }
        if let Some(n) = self.inputs_count {
            config.input_neurons = n;
        }
        if let Some(n) = self.hidden {
            config.hidden_neurons = n;
        }
        if let Some(n) = self.outputs_count {
            config.output_neurons = n;
        }
        Ok(())
    }
}

fn build_network(args: &NetworkArgs) -> Result<Network> {
    let config = args.resolve_config()?;

    let mut network = match args.seed {
        Some(seed) => config.build_with_rng(&mut StdRng::seed_from_u64(seed))?,
        None => config.build()?,
    };

    if let Some(path) = &args.start_values {
        load_start_values(&mut network, path)
            .with_context(|| format!("failed to load start values from {path}"))?;
    }

    Ok(network)
}
