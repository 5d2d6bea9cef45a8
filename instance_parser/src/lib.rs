//! Parser for the plain-text scheduling instance format:
//!
//! ```text
//! nodes: 4
//! edges:
//! 0 -> 1
//! 2 -> 3
//! jobs:
//! 1 task 2 5
//! 2 task 3 2
//! 3 task 1 3
//! 4 task 4 10
//! ```
//!
//! Edge endpoints are 0-indexed, job table rows are 1-indexed and converted
//! to 0-indexing on the way out.

use chumsky::{prelude::*, Parser};
use structs::{Instance, JobRecord};
use thiserror::Error;

pub mod structs;

#[derive(Debug, Error)]
pub enum InstanceParseError {
    #[error("ParseError occurred")]
    ParseError(Vec<Simple<char>>),
    #[error("job table rows are 1-indexed, found index 0")]
    ZeroJobIndex,
}

pub fn parse_instance(content: &str) -> Result<Instance, InstanceParseError> {
    let parser = node_count_parser()
        .then(edges_parser())
        .then(jobs_parser())
        .then_ignore(end());

    let ((nodes, edges), jobs) = parser
        .parse(content)
        .map_err(InstanceParseError::ParseError)?;

    let jobs = jobs
        .into_iter()
        .map(|record| {
            if record.index == 0 {
                Err(InstanceParseError::ZeroJobIndex)
            } else {
                Ok(JobRecord {
                    index: record.index - 1,
                    ..record
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Instance { nodes, edges, jobs })
}

pub(crate) fn node_count_parser() -> impl Parser<char, usize, Error = Simple<char>> {
    just("nodes")
        .padded()
        .then_ignore(just(':'))
        .padded()
        .ignore_then(text::int(10))
        .from_str::<usize>()
        .unwrapped()
        .labelled("nodes")
}

pub(crate) fn edges_parser() -> impl Parser<char, Vec<(usize, usize)>, Error = Simple<char>> {
    let endpoint = || text::int(10).from_str::<usize>().unwrapped();

    let edge = endpoint()
        .then_ignore(just("->").padded())
        .then(endpoint())
        .labelled("edge");

    just("edges")
        .padded()
        .then_ignore(just(':'))
        .padded()
        .ignore_then(edge.padded().repeated())
}

pub(crate) fn jobs_parser() -> impl Parser<char, Vec<JobRecord>, Error = Simple<char>> {
    let number = || text::int(10).from_str::<u32>().unwrapped();

    let record = text::int(10)
        .from_str::<usize>()
        .unwrapped()
        .padded()
        .then(text::ident().padded())
        .then(number().padded())
        .then(number().padded())
        .map(|(((index, kind), processing_time), due_date)| JobRecord {
            index,
            kind,
            processing_time,
            due_date,
        })
        .labelled("job record");

    just("jobs")
        .padded()
        .then_ignore(just(':'))
        .padded()
        .ignore_then(record.repeated())
}
