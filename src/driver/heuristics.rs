//! Admissible pruning heuristics consulted after each trial placement is chosen.

use crate::constants::{PIECE_COUNT, WEIGHT_UPPER_BOUND};
use crate::driver::context::SearchContext;
use crate::graph::NEIGHBOUR;

/// A pluggable pruning strategy. Each variant is admissible: it only ever vetoes a branch
/// that provably cannot beat the current best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Prunes when the uncovered remainder of the graph can't split into groups of 5.
    FloodFill,
    /// Prunes using the sum of the highest-weight admissible placements still available.
    PrefixMaxSum,
    /// Prunes using a constant per-piece weight ceiling.
    CheckMax,
}

impl Heuristic {
    /// The evaluation order consulted after every trial row: `check_max` is a single
    /// multiply-compare, `prefix_max_sum` walks the placement list, `flood_fill` recurses
    /// over the graph, so this is registration order (flood_fill, prefix_max_sum, check_max)
    /// reversed, cheapest-rejecting-first. The first to veto short-circuits the rest.
    pub fn chain() -> Vec<Heuristic> {
        vec![Heuristic::CheckMax, Heuristic::PrefixMaxSum, Heuristic::FloodFill]
    }

    pub fn prune(self, ctx: &SearchContext) -> bool {
        match self {
            Heuristic::FloodFill => flood_fill_prunes(ctx),
            Heuristic::PrefixMaxSum => prefix_max_sum_prunes(ctx),
            Heuristic::CheckMax => check_max_prunes(ctx),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Heuristic::FloodFill => "flood-fill parity over the uncovered tiles",
            Heuristic::PrefixMaxSum => "sum of the top admissible remaining weights",
            Heuristic::CheckMax => "constant per-piece weight ceiling",
        }
    }
}

fn flood_fill_prunes(ctx: &SearchContext) -> bool {
    let k = ctx.k();
    if !(2..=4).contains(&k) {
        return false;
    }
    let graph = ctx.graph();
    let index = (!graph).trailing_zeros() as usize;
    let filled = flood(graph, index);
    filled.count_ones() as usize % 5 != 0
}

/// Accumulates the reachable component starting at `node` with an explicit stack rather
/// than recursion, so the flood never relies on tail-call elimination.
fn flood(mut graph: u64, node: usize) -> u64 {
    let mut stack = vec![node];
    while let Some(n) = stack.pop() {
        let bit = 1u64 << n;
        if graph & bit != 0 {
            continue;
        }
        graph |= bit;
        stack.extend_from_slice(&NEIGHBOUR[n]);
    }
    graph
}

fn prefix_max_sum_prunes(ctx: &SearchContext) -> bool {
    let remaining = PIECE_COUNT - ctx.k();
    let bound = ctx.current_score() + ctx.placements().prefix_weight_sum(remaining);
    bound < ctx.best_score()
}

fn check_max_prunes(ctx: &SearchContext) -> bool {
    let remaining = (PIECE_COUNT - ctx.k()) as f64;
    ctx.current_score() + WEIGHT_UPPER_BOUND * remaining < ctx.best_score()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Placement, PlacementList};

    fn empty_context() -> SearchContext {
        SearchContext::new(PlacementList::new(Vec::new()))
    }

    #[test]
    fn flood_fill_does_not_prune_outside_k_window() {
        let ctx = empty_context();
        assert!(!flood_fill_prunes(&ctx));
    }

    #[test]
    fn check_max_never_prunes_when_best_is_not_ahead() {
        let ctx = empty_context();
        assert!(!check_max_prunes(&ctx));
    }

    #[test]
    fn prefix_max_sum_prunes_when_even_the_best_remaining_cant_catch_up() {
        let placements = vec![Placement::new(1, 0), Placement::new(2, 1)];
        let mut ctx = SearchContext::new(PlacementList::new(placements));
        ctx.set_best_score_for_test(1000.0);
        assert!(prefix_max_sum_prunes(&ctx));
    }
}
