use cube_tiler::dlx::{Dlx, SearchDelegate};

#[derive(Default)]
struct Recorder {
    before_order: Vec<usize>,
    after_order: Vec<usize>,
    solutions: Vec<Vec<usize>>,
}

impl SearchDelegate for Recorder {
    fn before(&mut self, _dlx: &Dlx, _col: usize, row: usize) {
        self.before_order.push(row);
    }
    fn after(&mut self, _dlx: &Dlx, _col: usize, row: usize) {
        self.after_order.push(row);
    }
    fn should_prune(&mut self, _dlx: &Dlx) -> bool {
        false
    }
    fn on_solution(&mut self, _dlx: &Dlx, path: &[usize]) {
        self.solutions.push(path.to_vec());
    }
}

/// The minimal solver scenario: rows {1,0,1}, {0,1,1}, {1,1,0} over 3 columns. The unique
/// exact cover is rows 0 and 1 together.
#[test]
fn minimal_three_column_matrix_finds_the_unique_cover() {
    let mut dlx = Dlx::new(3);
    dlx.add_row(&[0, 2]).unwrap();
    dlx.add_row(&[1, 2]).unwrap();
    dlx.add_row(&[0, 1]).unwrap();

    let mut recorder = Recorder::default();
    dlx.search(&mut recorder);

    assert_eq!(recorder.solutions.len(), 1);
    let mut rows = recorder.solutions[0].clone();
    rows.sort_unstable();
    assert_eq!(rows, vec![0, 1]);
    assert!(dlx.is_structurally_pristine());
}

#[test]
fn cover_then_uncover_round_trip_is_identity_on_a_fresh_matrix() {
    let mut dlx = Dlx::new(4);
    dlx.add_row(&[0, 1]).unwrap();
    dlx.add_row(&[2, 3]).unwrap();
    dlx.add_row(&[0, 2]).unwrap();

    assert!(dlx.is_structurally_pristine());
    dlx.cover(1);
    dlx.uncover(1);
    assert!(dlx.is_structurally_pristine());
    assert_eq!(dlx.column_size(0), 2);
    assert_eq!(dlx.column_size(1), 1);
}

#[test]
fn before_after_pairs_bracket_every_explored_row_even_on_dead_branches() {
    // Rows {0,1}, {1,0} over 2 columns both cover everything alone; no branch is a dead end
    // here, so before/after counts should match the number of solutions times the path length
    // plus whatever partial branches the search explores along the way.
    let mut dlx = Dlx::new(2);
    dlx.add_row(&[0, 1]).unwrap();
    dlx.add_row(&[0, 1]).unwrap();

    let mut recorder = Recorder::default();
    dlx.search(&mut recorder);

    assert_eq!(recorder.before_order.len(), recorder.after_order.len());
    assert_eq!(recorder.solutions.len(), 2);
}
