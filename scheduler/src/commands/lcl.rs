use std::path::PathBuf;

use anyhow::Result;
use log::info;
use prec_sched::schedulers::lcl::lcl_schedule;

pub fn lcl(instance: PathBuf) -> Result<()> {
    let graph = super::load_graph(&instance)?;
    let result = lcl_schedule(&graph)?;

    info!("optimal schedule: {:?}", result.schedule);
    info!("g_max: {}", result.g_max);

    println!("optimal schedule: {:?}", result.schedule);
    println!("g_max: {}", result.g_max);

    Ok(())
}
