use log::{debug, trace};

use crate::graph::PrecedenceGraph;
use crate::tabu_list::{simple_tabu_list::SimpleTabuList, TabuList};
use crate::SchedulingError;

/// How the acceptance delta of a candidate move is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcceptancePolicy {
    /// Delta against the best tardiness found so far.
    #[default]
    BestRelative,
    /// Delta against a running reference that follows every accepted move,
    /// not only the improving ones.
    RunningReference,
}

#[derive(Debug, Clone)]
pub struct TabuSearchOptions {
    /// Tabu list capacity (`L`).
    pub tabu_list_size: usize,
    /// Accepted-move budget (`K`).
    pub max_iterations: u32,
    /// Tolerated worsening per accepted move.
    pub gamma: i64,
    /// Forced starting permutation; generated by topological layering when
    /// absent.
    pub initial_schedule: Option<Vec<usize>>,
    /// Permit tabu moves that strictly improve the best known tardiness.
    pub aspiration_criterion: bool,
    pub acceptance: AcceptancePolicy,
}

impl Default for TabuSearchOptions {
    fn default() -> Self {
        Self {
            tabu_list_size: 20,
            max_iterations: 100,
            gamma: 10,
            initial_schedule: None,
            aspiration_criterion: true,
            acceptance: AcceptancePolicy::BestRelative,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabuSchedule {
    pub schedule: Vec<usize>,
    pub total_tardiness: u64,
    pub accepted_moves: u32,
}

/// Adjacent-swap tabu search for `1|prec|ΣT_j`.
///
/// Each cycle scans the adjacent-pair positions starting where the previous
/// accepted move left off and takes the first admissible swap: feasible,
/// within `gamma` of the reference tardiness and not tabu, or tabu but
/// strictly better than anything seen (aspiration). The search stops after
/// `max_iterations` accepted moves or a full cycle without one. The graph is
/// only read, never mutated.
pub fn tabu_schedule(
    graph: &PrecedenceGraph,
    options: TabuSearchOptions,
) -> Result<TabuSchedule, SchedulingError> {
    let node_count = graph.node_count();

    let mut schedule = match &options.initial_schedule {
        Some(forced) => {
            validate_initial_schedule(graph, forced)?;
            forced.clone()
        }
        None => {
            let generated: Vec<usize> =
                graph.job_execution_ranks().into_iter().flatten().collect();
            if generated.len() != node_count {
                return Err(SchedulingError::GraphInconsistency(format!(
                    "topological layering placed only {} of {node_count} jobs, \
                     the precedence relation contains a cycle",
                    generated.len()
                )));
            }
            generated
        }
    };
    debug!("initial schedule: {schedule:?}");

    let mut g_best = graph.total_tardiness(&schedule);
    let mut best_solution = schedule.clone();
    let mut reference = g_best;
    let mut accepted_moves: u32 = 0;

    if node_count < 2 {
        return Ok(TabuSchedule {
            schedule: best_solution,
            total_tardiness: g_best,
            accepted_moves,
        });
    }

    let mut tabu_list = SimpleTabuList::new(node_count, options.tabu_list_size);
    let positions = node_count - 1;
    let mut new_cycle_index = 0;

    while accepted_moves < options.max_iterations {
        let mut moved = false;

        for offset in 0..positions {
            let position = (new_cycle_index + offset) % positions;
            schedule.swap(position, position + 1);

            if !graph.is_feasible(&schedule) {
                schedule.swap(position, position + 1);
                continue;
            }

            let current = graph.total_tardiness(&schedule);
            let (a, b) = sorted_pair(schedule[position], schedule[position + 1]);

            let reference_value = match options.acceptance {
                AcceptancePolicy::BestRelative => g_best,
                AcceptancePolicy::RunningReference => reference,
            };
            let delta = reference_value as i64 - current as i64;

            let admissible = delta > -options.gamma && tabu_list.is_possible_move(a, b);
            let aspirated = options.aspiration_criterion && current < g_best;

            if !(admissible || aspirated) {
                schedule.swap(position, position + 1);
                continue;
            }

            trace!(
                "accepted swap ({a}, {b}) at position {position}: tardiness {current}, delta {delta}"
            );

            if current < g_best {
                g_best = current;
                best_solution = schedule.clone();
            }
            reference = current;
            tabu_list.add_turn_to_tabu_list(a, b);
            new_cycle_index = (position + 1) % positions;
            accepted_moves += 1;
            moved = true;
            break;
        }

        if !moved {
            debug!("no admissible move in a full cycle, stopping after {accepted_moves} accepted moves");
            break;
        }
    }

    debug!("best schedule: {best_solution:?}, total tardiness: {g_best}");

    Ok(TabuSchedule {
        schedule: best_solution,
        total_tardiness: g_best,
        accepted_moves,
    })
}

fn sorted_pair(a: usize, b: usize) -> (usize, usize) {
    (a.min(b), a.max(b))
}

fn validate_initial_schedule(
    graph: &PrecedenceGraph,
    schedule: &[usize],
) -> Result<(), SchedulingError> {
    let node_count = graph.node_count();
    if schedule.len() != node_count {
        return Err(SchedulingError::InvalidSchedule(format!(
            "expected {node_count} positions, got {}",
            schedule.len()
        )));
    }

    let mut seen = vec![false; node_count];
    for &job in schedule {
        if job >= node_count || seen[job] {
            return Err(SchedulingError::InvalidSchedule(format!(
                "schedule is not a permutation of 0..{node_count}"
            )));
        }
        seen[job] = true;
    }

    if !graph.is_feasible(schedule) {
        return Err(SchedulingError::InvalidSchedule(
            "schedule violates the precedence relation".to_string(),
        ));
    }
    Ok(())
}
