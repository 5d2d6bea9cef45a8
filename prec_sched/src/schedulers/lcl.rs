use log::{debug, trace};

use crate::graph::PrecedenceGraph;
use crate::SchedulingError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LclSchedule {
    pub schedule: Vec<usize>,
    pub g_max: u64,
}

/// Lawler's backward construction for `1|prec|g_max` with per-job cost
/// `g_j(C) = max(0, C - d_j)`.
///
/// The schedule is built from the last position toward the first: only jobs
/// without a remaining successor may occupy the last remaining slot, and among
/// those the one with the smallest cost at the current total remaining
/// processing time is chosen. This is exact for any nondecreasing per-job cost
/// function. Ties fall to the earliest entry in frontier activation order,
/// which keeps the result deterministic without affecting optimality.
pub fn lcl_schedule(graph: &PrecedenceGraph) -> Result<LclSchedule, SchedulingError> {
    let node_count = graph.node_count();
    let mut frontier = graph.frontier();
    let mut remaining_time = graph.total_processing_time();

    let mut reversed_schedule = Vec::with_capacity(node_count);
    let mut g_max: u64 = 0;

    for step in 0..node_count {
        let mut selected: Option<(usize, u64)> = None;
        for &job in frontier.available() {
            let cost = remaining_time.saturating_sub(u64::from(graph.job(job).due_date));
            match selected {
                Some((_, best)) if cost >= best => {}
                _ => selected = Some((job, cost)),
            }
        }

        let Some((job, cost)) = selected else {
            return Err(SchedulingError::GraphInconsistency(format!(
                "frontier starved after {step} of {node_count} steps, \
                 the precedence relation contains a cycle"
            )));
        };

        trace!("step {step}: job {job} takes completion time {remaining_time}, cost {cost}");

        g_max = g_max.max(cost);
        remaining_time -= u64::from(graph.job(job).processing_time);
        frontier.consume(job);
        reversed_schedule.push(job);
    }

    reversed_schedule.reverse();
    debug!("lcl schedule: {reversed_schedule:?}, g_max: {g_max}");

    Ok(LclSchedule {
        schedule: reversed_schedule,
        g_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Job;

    fn graph(node_count: usize, edges: &[(usize, usize)], pt: &[u32], due: &[u32]) -> PrecedenceGraph {
        let jobs = (0..node_count)
            .map(|index| Job {
                index,
                kind: "task".to_string(),
                processing_time: pt[index],
                due_date: due[index],
            })
            .collect();
        PrecedenceGraph::new(node_count, edges, jobs).unwrap()
    }

    fn schedule_g_max(graph: &PrecedenceGraph, schedule: &[usize]) -> u64 {
        let mut completion: u64 = 0;
        let mut g_max: u64 = 0;
        for &job in schedule {
            completion += u64::from(graph.job(job).processing_time);
            g_max = g_max.max(completion.saturating_sub(u64::from(graph.job(job).due_date)));
        }
        g_max
    }

    fn permutations(items: &mut Vec<usize>, from: usize, out: &mut Vec<Vec<usize>>) {
        if from == items.len() {
            out.push(items.clone());
            return;
        }
        for i in from..items.len() {
            items.swap(from, i);
            permutations(items, from + 1, out);
            items.swap(from, i);
        }
    }

    #[test]
    fn output_is_a_permutation_respecting_edges() {
        let edges = [(0, 1), (0, 2), (2, 3), (1, 4), (3, 4)];
        let graph = graph(5, &edges, &[2, 1, 3, 2, 4], &[3, 9, 6, 8, 12]);
        let result = lcl_schedule(&graph).unwrap();

        let mut seen = vec![false; 5];
        for &job in &result.schedule {
            assert!(!seen[job]);
            seen[job] = true;
        }
        assert!(seen.iter().all(|&s| s));

        for &(u, v) in &edges {
            let pos_u = result.schedule.iter().position(|&j| j == u).unwrap();
            let pos_v = result.schedule.iter().position(|&j| j == v).unwrap();
            assert!(pos_u < pos_v);
        }
        assert_eq!(result.g_max, schedule_g_max(&graph, &result.schedule));
    }

    #[test]
    fn reduces_to_edd_without_precedence() {
        // Distinct due dates below every partial completion time keep all
        // backward costs positive, so the construction must reproduce the
        // earliest-due-date order exactly.
        let graph = graph(5, &[], &[2, 2, 2, 2, 2], &[9, 3, 7, 1, 5]);
        let result = lcl_schedule(&graph).unwrap();
        assert_eq!(result.schedule, vec![3, 1, 4, 2, 0]);
    }

    #[test]
    fn matches_brute_force_on_small_instance() {
        let graph = graph(4, &[(0, 1)], &[2, 3, 1, 4], &[5, 2, 3, 10]);
        let result = lcl_schedule(&graph).unwrap();
        assert!(graph.is_feasible(&result.schedule));

        let mut all = vec![];
        let mut items: Vec<usize> = (0..4).collect();
        permutations(&mut items, 0, &mut all);
        let optimum = all
            .iter()
            .filter(|candidate| graph.is_feasible(candidate))
            .map(|candidate| schedule_g_max(&graph, candidate))
            .min()
            .unwrap();

        assert_eq!(result.g_max, optimum);
    }

    #[test]
    fn zero_cost_when_nothing_is_late() {
        let graph = graph(3, &[(0, 1)], &[1, 2, 3], &[100, 100, 100]);
        let result = lcl_schedule(&graph).unwrap();
        assert_eq!(result.g_max, 0);
    }

    #[test]
    fn cyclic_relation_starves_the_frontier() {
        let graph = graph(2, &[(0, 1), (1, 0)], &[1, 1], &[1, 1]);
        let result = lcl_schedule(&graph);
        assert!(matches!(
            result,
            Err(SchedulingError::GraphInconsistency(_))
        ));
    }
}
