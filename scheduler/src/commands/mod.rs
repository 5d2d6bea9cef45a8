use std::path::Path;

use anyhow::Result;
use instance_parser::parse_instance;
use prec_sched::graph::{Job, PrecedenceGraph};

mod graph;
mod lcl;
mod tabu;

pub use graph::graph;
pub use lcl::lcl;
pub use tabu::tabu;

pub(crate) fn load_graph(path: &Path) -> Result<PrecedenceGraph> {
    let contents = std::fs::read_to_string(path)?;
    let instance = parse_instance(contents.as_str())?;

    let jobs = instance
        .jobs
        .into_iter()
        .map(|record| Job {
            index: record.index,
            kind: record.kind,
            processing_time: record.processing_time,
            due_date: record.due_date,
        })
        .collect();

    Ok(PrecedenceGraph::new(instance.nodes, &instance.edges, jobs)?)
}
