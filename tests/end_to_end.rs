use cube_tiler::build_matrix;

/// Runs the full search over the baked-in 60-tile graph and twelve pentominoes. The search
/// space is small enough to exhaust in a test binary; this exercises the generator, the
/// matrix, and the driver together end to end.
#[test]
fn full_search_finds_at_least_one_complete_tiling() {
    let (mut dlx, mut ctx) = build_matrix().expect("matrix construction should succeed");
    let column_count = dlx.column_count();
    let row_count = dlx.row_count();
    assert_eq!(column_count, 72);
    assert!(row_count > 0);

    dlx.search(&mut ctx);

    assert!(ctx.best_score() > 0.0);
    assert!(ctx.solutions_found() > 0);
    assert!(dlx.is_structurally_pristine());
}
