//! Score-tracking search state: the `SearchDelegate` the solver drives.

use tracing::{debug, info};

use crate::constants::SCORE_EPSILON;
use crate::dlx::{Dlx, SearchDelegate};
use crate::driver::heuristics::Heuristic;
use crate::driver::solution;
use crate::generator::PlacementList;

/// Everything the heuristics and the solution printer need to know about the current
/// partial solution: how much of the graph is covered, how many pieces are placed, and
/// which placements remain admissible.
pub struct SearchContext {
    placements: PlacementList,
    heuristics: Vec<Heuristic>,
    best_score: f64,
    current_score: f64,
    graph: u64,
    k: usize,
    solutions_found: usize,
}

impl SearchContext {
    pub fn new(placements: PlacementList) -> Self {
        SearchContext {
            placements,
            heuristics: Heuristic::chain(),
            best_score: 0.0,
            current_score: 0.0,
            graph: 0,
            k: 0,
            solutions_found: 0,
        }
    }

    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    pub fn solutions_found(&self) -> usize {
        self.solutions_found
    }

    pub(crate) fn current_score(&self) -> f64 {
        self.current_score
    }

    pub(crate) fn k(&self) -> usize {
        self.k
    }

    pub(crate) fn graph(&self) -> u64 {
        self.graph
    }

    pub(crate) fn placements(&self) -> &PlacementList {
        &self.placements
    }

    #[cfg(test)]
    pub(crate) fn set_best_score_for_test(&mut self, score: f64) {
        self.best_score = score;
    }
}

impl SearchDelegate for SearchContext {
    fn before(&mut self, dlx: &Dlx, col: usize, row: usize) {
        let placement = *self.placements.placement(row);
        self.current_score += placement.weight();
        self.graph |= placement.flags();
        self.k += 1;

        dlx.for_each_touched_column(row, |other_col| {
            if other_col != col {
                dlx.for_each_row_in_column(other_col, |other_row| {
                    self.placements.hide(other_row);
                });
            }
        });
    }

    fn after(&mut self, dlx: &Dlx, col: usize, row: usize) {
        dlx.for_each_touched_column_rev(row, |other_col| {
            if other_col != col {
                dlx.for_each_row_in_column_rev(other_col, |other_row| {
                    self.placements.show(other_row);
                });
            }
        });

        let placement = *self.placements.placement(row);
        self.k -= 1;
        self.graph &= !placement.flags();
        self.current_score -= placement.weight();
    }

    fn should_prune(&mut self, _dlx: &Dlx) -> bool {
        let heuristics = self.heuristics.clone();
        heuristics.iter().any(|h| h.prune(self))
    }

    fn on_solution(&mut self, _dlx: &Dlx, path: &[usize]) {
        if self.current_score > self.best_score {
            info!(score = self.current_score, "new best score");
            self.best_score = self.current_score;
        }

        if (self.current_score - self.best_score).abs() < SCORE_EPSILON {
            self.solutions_found += 1;
            debug!(solutions_found = self.solutions_found, "printing tied-for-best solution");
            solution::print_solution(&self.placements, self.current_score, path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Placement;

    /// Two disjoint rows over two columns, each tagged with a distinct piece id, together
    /// covering both columns. Exercises the full before -> should_prune -> after ->
    /// on_solution cycle through `Dlx::search`.
    fn tiny_matrix_and_context() -> (Dlx, SearchContext) {
        let placements = vec![Placement::new(1 << 0, 0), Placement::new(1 << 1, 1)];
        let mut dlx = Dlx::new(2);
        dlx.add_row(&[0]).unwrap();
        dlx.add_row(&[1]).unwrap();
        let ctx = SearchContext::new(PlacementList::new(placements));
        (dlx, ctx)
    }

    #[test]
    fn search_drives_score_and_graph_bookkeeping_to_a_solution() {
        let (mut dlx, mut ctx) = tiny_matrix_and_context();
        dlx.search(&mut ctx);

        assert!(ctx.best_score() > 0.0);
        assert_eq!(ctx.solutions_found(), 1);
        // Bookkeeping must be fully unwound after search returns.
        assert_eq!(ctx.k(), 0);
        assert_eq!(ctx.graph(), 0);
        assert_eq!(ctx.current_score(), 0.0);
        assert!(dlx.is_structurally_pristine());
    }

    #[test]
    fn before_updates_score_graph_and_k_and_after_undoes_them_exactly() {
        let (dlx, mut ctx) = tiny_matrix_and_context();
        ctx.before(&dlx, 0, 0);
        assert_eq!(ctx.k(), 1);
        assert_eq!(ctx.graph(), 1 << 0);
        assert!(ctx.current_score() > 0.0);

        ctx.after(&dlx, 0, 0);
        assert_eq!(ctx.k(), 0);
        assert_eq!(ctx.graph(), 0);
        assert_eq!(ctx.current_score(), 0.0);
    }
}
