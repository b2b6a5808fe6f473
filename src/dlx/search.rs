use crate::dlx::matrix::Dlx;

/// The four extension points Algorithm X calls out to while it searches: score/state
/// bookkeeping bracketing each trial row, an admissibility check consulted before recursing
/// deeper, and a callback invoked on every exact cover found.
///
/// A single `&mut impl SearchDelegate` is threaded through the whole recursion, so
/// implementors may freely hold their own mutable state (score trackers, the weight-sorted
/// placement list) without interior mutability.
pub trait SearchDelegate {
    /// Called with the column a row was chosen from and the row itself, before that row's
    /// other columns are covered.
    fn before(&mut self, dlx: &Dlx, col: usize, row: usize);
    /// Exact mirror of [`SearchDelegate::before`], called after the row's other columns
    /// have been uncovered again.
    fn after(&mut self, dlx: &Dlx, col: usize, row: usize);
    /// Returns true to veto recursing past the current partial solution. Heuristics are the
    /// only way a branch is shortened; cover/uncover and before/after still bracket it.
    fn should_prune(&mut self, dlx: &Dlx) -> bool;
    /// Called with the current path (most recently chosen row first) whenever no columns
    /// remain to cover.
    fn on_solution(&mut self, dlx: &Dlx, path: &[usize]);
}

impl Dlx {
    /// Recursive Algorithm X over the matrix, delegating scoring, pruning, and solution
    /// reporting to `delegate`.
    pub fn search(&mut self, delegate: &mut impl SearchDelegate) {
        let mut stack = Vec::new();
        self.search_inner(&mut stack, delegate);
    }

    fn search_inner(&mut self, stack: &mut Vec<usize>, delegate: &mut impl SearchDelegate) {
        let Some(col) = self.choose_min() else {
            delegate.on_solution(self, stack);
            return;
        };

        self.cover(col);
        let header = self.header_of(col);
        let mut r = self.node_d(header);
        while r != header {
            let row_id = self.row_of(r);
            delegate.before(self, col, row_id);
            stack.push(row_id);

            let mut j = self.node_r(r);
            while j != r {
                self.cover(self.col_of(j));
                j = self.node_r(j);
            }

            if !delegate.should_prune(self) {
                self.search_inner(stack, delegate);
            }

            let mut j = self.node_l(r);
            while j != r {
                self.uncover(self.col_of(j));
                j = self.node_l(j);
            }

            stack.pop();
            delegate.after(self, col, row_id);

            r = self.node_d(r);
        }
        self.uncover(col);
    }
}
