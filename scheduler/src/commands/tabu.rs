use std::path::PathBuf;

use anyhow::Result;
use log::info;
use prec_sched::schedulers::tabu::{tabu_schedule, TabuSearchOptions};

pub fn tabu(instance: PathBuf, options: TabuSearchOptions) -> Result<()> {
    let graph = super::load_graph(&instance)?;

    info!("options: {options:?}");
    let result = tabu_schedule(&graph, options)?;

    info!("best schedule: {:?}", result.schedule);
    info!("total tardiness: {}", result.total_tardiness);

    println!("best schedule: {:?}", result.schedule);
    println!("total tardiness: {}", result.total_tardiness);
    println!("accepted moves: {}", result.accepted_moves);

    Ok(())
}
