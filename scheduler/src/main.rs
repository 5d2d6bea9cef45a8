#![forbid(unsafe_code)]
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::Verbosity;
use log::{debug, error};
use prec_sched::schedulers::tabu::{AcceptancePolicy, TabuSearchOptions};

mod commands;

#[derive(Debug, Parser)]
/// Single-machine precedence-constrained scheduler
struct App {
    #[clap(flatten)]
    verbose: Verbosity,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a graphviz notation for a problem instance
    Graph { instance: PathBuf, output: PathBuf },
    /// Minimize the maximum job cost exactly (1|prec|g_max, Lawler)
    Lcl { instance: PathBuf },
    /// Approximate minimum total tardiness via tabu search (1|prec|sum T_j)
    Tabu {
        instance: PathBuf,
        /// Tabu list capacity
        #[clap(short = 'l', long, default_value_t = 20)]
        tabu_list_size: usize,
        /// Accepted-move budget
        #[clap(short = 'k', long, default_value_t = 100)]
        max_iterations: u32,
        /// Tolerated worsening per accepted move
        #[clap(short, long, default_value_t = 10)]
        gamma: i64,
        /// Allow tabu moves that strictly improve the best known solution
        #[clap(short, long)]
        aspiration: bool,
        /// Acceptance policy for the move delta
        #[clap(long, value_enum, default_value_t = Acceptance::BestRelative)]
        acceptance: Acceptance,
        /// Comma separated forced initial schedule, 0-indexed
        #[clap(long, value_delimiter = ',')]
        initial: Option<Vec<usize>>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Acceptance {
    BestRelative,
    RunningReference,
}

impl From<Acceptance> for AcceptancePolicy {
    fn from(acceptance: Acceptance) -> Self {
        match acceptance {
            Acceptance::BestRelative => AcceptancePolicy::BestRelative,
            Acceptance::RunningReference => AcceptancePolicy::RunningReference,
        }
    }
}

fn main() {
    let args: App = App::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    debug!("{args:?}");

    if let Err(err) = match args.command {
        Commands::Graph { instance, output } => commands::graph(instance, output),
        Commands::Lcl { instance } => commands::lcl(instance),
        Commands::Tabu {
            instance,
            tabu_list_size,
            max_iterations,
            gamma,
            aspiration,
            acceptance,
            initial,
        } => commands::tabu(
            instance,
            TabuSearchOptions {
                tabu_list_size,
                max_iterations,
                gamma,
                initial_schedule: initial,
                aspiration_criterion: aspiration,
                acceptance: acceptance.into(),
            },
        ),
    } {
        error!("An error occurred: {}", err);
    }
}
