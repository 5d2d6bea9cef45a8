use hashbrown::HashMap;
use log::trace;

use crate::SchedulingError;

/// Immutable job attributes. Indices are dense `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub index: usize,
    pub kind: String,
    pub processing_time: u32,
    pub due_date: u32,
}

/// Directed acyclic precedence relation over a dense job set `0..n`.
///
/// `adjacency[u][v]` means job `u` must complete before job `v`. The relation
/// is never mutated after construction; a scheduler that needs to tear the
/// graph down node by node does so through a per-run [`Frontier`] working set,
/// so one graph instance can serve both schedulers. The input is assumed
/// acyclic, this is not verified here.
pub struct PrecedenceGraph {
    node_count: usize,
    adjacency: Vec<Vec<bool>>,
    jobs: HashMap<usize, Job>,
}

impl PrecedenceGraph {
    pub fn new(
        node_count: usize,
        edges: &[(usize, usize)],
        jobs: Vec<Job>,
    ) -> Result<Self, SchedulingError> {
        let mut adjacency = vec![vec![false; node_count]; node_count];
        for &(u, v) in edges {
            if u >= node_count || v >= node_count {
                return Err(SchedulingError::Configuration(format!(
                    "edge ({u}, {v}) references a job outside 0..{node_count}"
                )));
            }
            adjacency[u][v] = true;
        }

        let mut job_map = HashMap::with_capacity(node_count);
        for job in jobs {
            if job.index >= node_count {
                return Err(SchedulingError::Configuration(format!(
                    "job record {} is outside 0..{node_count}",
                    job.index
                )));
            }
            if job_map.insert(job.index, job).is_some() {
                return Err(SchedulingError::Configuration(
                    "duplicate job record".to_string(),
                ));
            }
        }
        if job_map.len() != node_count {
            return Err(SchedulingError::Configuration(format!(
                "expected {node_count} job records, got {}",
                job_map.len()
            )));
        }

        Ok(Self {
            node_count,
            adjacency,
            jobs: job_map,
        })
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Job attributes for `index`. Panics if `index` is outside the job set
    /// fixed at construction; construction guarantees one entry per index in
    /// `0..node_count`.
    pub fn job(&self, index: usize) -> &Job {
        &self.jobs[&index]
    }

    /// Membership query against the original, never-mutated relation.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.node_count && v < self.node_count && self.adjacency[u][v]
    }

    /// Fresh working set for one backward construction run.
    pub fn frontier(&self) -> Frontier<'_> {
        Frontier::new(self)
    }

    /// Accumulated processing time over all jobs, the completion time of
    /// whichever job runs last.
    pub fn total_processing_time(&self) -> u64 {
        self.jobs
            .values()
            .fold(0, |acc, job| acc + u64::from(job.processing_time))
    }

    /// A schedule is feasible iff every job's predecessors appear before it.
    ///
    /// Full left-to-right rescan, O(n²). Also rejects out-of-range indices so
    /// it is total over arbitrary input sequences.
    pub fn is_feasible(&self, schedule: &[usize]) -> bool {
        if schedule.iter().any(|&job| job >= self.node_count) {
            return false;
        }

        let mut placed = vec![false; self.node_count];
        for &job in schedule {
            for predecessor in 0..self.node_count {
                if self.adjacency[predecessor][job] && !placed[predecessor] {
                    return false;
                }
            }
            placed[job] = true;
        }
        true
    }

    /// Total tardiness `Σ max(0, C_j - d_j)` of a schedule processed in order
    /// on a single machine with no idle time.
    pub fn total_tardiness(&self, schedule: &[usize]) -> u64 {
        let mut completion: u64 = 0;
        let mut total: u64 = 0;
        for &index in schedule {
            let job = &self.jobs[&index];
            completion += u64::from(job.processing_time);
            total += completion.saturating_sub(u64::from(job.due_date));
        }
        total
    }

    /// Returns vector of job execution ranks: rank 0 holds the jobs without
    /// predecessors, rank k the jobs whose predecessors all sit in earlier
    /// ranks. Flattening the ranks yields a precedence-feasible schedule for
    /// any acyclic input (Kahn layering). Jobs within a rank keep index order,
    /// so the result is deterministic.
    pub fn job_execution_ranks(&self) -> Vec<Vec<usize>> {
        let mut placed = vec![false; self.node_count];
        let mut placed_count = 0;
        let mut ranks: Vec<Vec<usize>> = vec![];

        while placed_count < self.node_count {
            let same_rank: Vec<usize> = (0..self.node_count)
                .filter(|&job| !placed[job])
                .filter(|&job| {
                    (0..self.node_count).all(|p| !self.adjacency[p][job] || placed[p])
                })
                .collect();

            if same_rank.is_empty() {
                // Cyclic input, caller contract violated. Callers observe the
                // truncated layering as an infeasible schedule.
                break;
            }

            for &job in &same_rank {
                placed[job] = true;
            }
            placed_count += same_rank.len();
            ranks.push(same_rank);
        }

        ranks
    }
}

/// Per-run mutable state behind the backward construction: remaining
/// out-degree per job plus the set of jobs with no remaining successor
/// (candidates for the next "last" slot).
///
/// Consuming jobs here never touches the graph it was built from.
pub struct Frontier<'a> {
    graph: &'a PrecedenceGraph,
    out_degree: Vec<usize>,
    available: Vec<usize>,
}

impl<'a> Frontier<'a> {
    fn new(graph: &'a PrecedenceGraph) -> Self {
        let out_degree: Vec<usize> = (0..graph.node_count)
            .map(|job| graph.adjacency[job].iter().filter(|&&edge| edge).count())
            .collect();
        let available = (0..graph.node_count)
            .filter(|&job| out_degree[job] == 0)
            .collect();

        Self {
            graph,
            out_degree,
            available,
        }
    }

    /// Jobs currently without a remaining successor, in activation order.
    pub fn available(&self) -> &[usize] {
        &self.available
    }

    /// Removes `job` from the available set, decrementing the remaining
    /// out-degree of each predecessor and activating those that drop to zero.
    /// Returns `false` without touching anything if `job` is not available.
    pub fn consume(&mut self, job: usize) -> bool {
        let Some(position) = self.available.iter().position(|&j| j == job) else {
            return false;
        };
        self.available.remove(position);

        for predecessor in 0..self.graph.node_count {
            if self.graph.adjacency[predecessor][job] {
                self.out_degree[predecessor] -= 1;
                if self.out_degree[predecessor] == 0 {
                    self.available.push(predecessor);
                }
            }
        }

        trace!("consumed job {job}, frontier: {:?}", self.available);
        true
    }
}
