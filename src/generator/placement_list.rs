use crate::generator::Placement;

struct Node {
    placement: Placement,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A weight-descending doubly linked view over every candidate placement, supporting O(1)
/// hide/show so the solver can remove a row's conflicting placements while it is held and
/// restore them exactly on backtrack.
///
/// Indices into this list are the same row indices used by the exact-cover matrix: row `i`'s
/// placement lives at arena slot `i`. A node's own `prev`/`next` are fixed at construction and
/// never touched by hiding that node — only its structural neighbours' pointers move to route
/// around it — so repeated `hide`/`show` calls on the same row (one per shared column, as the
/// solver does while covering) are idempotent and self-correcting on undo.
pub struct PlacementList {
    nodes: Vec<Node>,
    head: Option<usize>,
}

impl PlacementList {
    /// Builds the list from placements already sorted by descending weight (as
    /// [`crate::generator::generate_all`] produces them).
    pub fn new(placements: Vec<Placement>) -> Self {
        let len = placements.len();
        let nodes = placements
            .into_iter()
            .enumerate()
            .map(|(i, placement)| Node {
                placement,
                prev: i.checked_sub(1),
                next: if i + 1 < len { Some(i + 1) } else { None },
            })
            .collect();
        let head = if len > 0 { Some(0) } else { None };
        PlacementList { nodes, head }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn placement(&self, row: usize) -> &Placement {
        &self.nodes[row].placement
    }

    /// The currently-visible row of greatest weight, or `None` if every row is hidden.
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Removes `row` from the visible list. Safe to call more than once for the same row
    /// before a matching [`PlacementList::show`].
    pub fn hide(&mut self, row: usize) {
        let (prev, next) = (self.nodes[row].prev, self.nodes[row].next);
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        if let Some(n) = next {
            self.nodes[n].prev = prev;
        }
    }

    /// Restores `row` to the visible list. Must be called in exact LIFO order with
    /// [`PlacementList::hide`] (the DLX cover/uncover contract).
    pub fn show(&mut self, row: usize) {
        let (prev, next) = (self.nodes[row].prev, self.nodes[row].next);
        match prev {
            Some(p) => self.nodes[p].next = Some(row),
            None => self.head = Some(row),
        }
        if let Some(n) = next {
            self.nodes[n].prev = Some(row);
        }
    }

    /// Sum of the weights of the `count` highest-weight currently-visible rows, walking
    /// forward from the head. Used by the prefix-sum admissibility heuristic; if fewer than
    /// `count` rows remain visible the partial sum of what's left is returned.
    pub fn prefix_weight_sum(&self, count: usize) -> f64 {
        let mut sum = 0.0;
        let mut cursor = self.head;
        for _ in 0..count {
            let Some(idx) = cursor else { break };
            sum += self.nodes[idx].placement.weight();
            cursor = self.nodes[idx].next;
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(weights: &[f64]) -> PlacementList {
        let placements = weights
            .iter()
            .enumerate()
            .map(|(i, _)| Placement::new(1u64 << (i % 60), (i % 12) as u8))
            .collect();
        PlacementList::new(placements)
    }

    fn visible_rows(list: &PlacementList) -> Vec<usize> {
        let mut rows = Vec::new();
        let mut cursor = list.head();
        while let Some(idx) = cursor {
            rows.push(idx);
            cursor = list.nodes[idx].next;
        }
        rows
    }

    #[test]
    fn hide_head_advances_head_to_structural_next() {
        let mut list = list_of(&[3.0, 2.0, 1.0]);
        assert_eq!(list.head(), Some(0));
        list.hide(0);
        assert_eq!(list.head(), Some(1));
        assert_eq!(visible_rows(&list), vec![1, 2]);
    }

    #[test]
    fn hide_middle_then_show_restores_full_chain() {
        let mut list = list_of(&[3.0, 2.0, 1.0, 0.5]);
        list.hide(1);
        assert_eq!(visible_rows(&list), vec![0, 2, 3]);
        list.show(1);
        assert_eq!(visible_rows(&list), vec![0, 1, 2, 3]);
    }

    #[test]
    fn repeated_hide_is_idempotent_and_single_show_restores() {
        let mut list = list_of(&[3.0, 2.0, 1.0]);
        list.hide(1);
        list.hide(1);
        assert_eq!(visible_rows(&list), vec![0, 2]);
        list.show(1);
        assert_eq!(visible_rows(&list), vec![0, 1, 2]);
    }

    #[test]
    fn nested_hide_show_round_trips_in_lifo_order() {
        let mut list = list_of(&[4.0, 3.0, 2.0, 1.0]);
        list.hide(0);
        list.hide(1);
        assert_eq!(visible_rows(&list), vec![2, 3]);
        list.show(1);
        assert_eq!(visible_rows(&list), vec![1, 2, 3]);
        list.show(0);
        assert_eq!(visible_rows(&list), vec![0, 1, 2, 3]);
    }

    #[test]
    fn prefix_weight_sum_walks_from_head() {
        // Tiles 2 and 3 each sit fully (weight 1.0) on one face; tiles 0 and 1 split across
        // two faces for weight 5/6. Ordered descending: [2, 3, 0, 1].
        let placements = vec![
            Placement::new(1 << 2, 0),
            Placement::new(1 << 3, 1),
            Placement::new(1 << 0, 2),
            Placement::new(1 << 1, 3),
        ];
        let mut list = PlacementList::new(placements);
        assert!((list.prefix_weight_sum(2) - 2.0).abs() < 1e-9);
        assert!((list.prefix_weight_sum(4) - (2.0 + 2.0 * (5.0 / 6.0))).abs() < 1e-9);

        list.hide(0);
        assert!((list.prefix_weight_sum(1) - 1.0).abs() < 1e-9);
    }
}
