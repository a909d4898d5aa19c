#![cfg(feature = "parallel")]

mod support;

use quadrs::{Quadifier, quadify};
use support::{grid, grid_quads, jittered_grid};

/// Quadify on a rayon pool of `threads` threads.
fn quadify_on(threads: usize, mesh: &support::TestMesh) -> Quadifier {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .unwrap();
    pool.install(|| quadify(&mesh.descriptor()).unwrap())
}

#[test]
fn parallel_grid_matches_serial_layout() {
    for alternate in [false, true] {
        let mesh = grid(40, 30, alternate);
        let quadifier = quadify_on(4, &mesh);

        assert_eq!(quadifier.quads(), grid_quads(40, 30, alternate).as_slice());
        assert!(quadifier.triangles().is_empty());
    }
}

#[test]
fn thread_count_does_not_change_the_result() {
    let mesh = jittered_grid(40, 40);
    // a single worker visits triangles and edges in input order
    let serial = quadify_on(1, &mesh);

    for threads in [2, 3, 8] {
        let parallel = quadify_on(threads, &mesh);
        assert_eq!(parallel.quads(), serial.quads(), "{threads} threads");
        assert_eq!(parallel.triangles(), serial.triangles(), "{threads} threads");
        assert_eq!(parallel.stats(), serial.stats(), "{threads} threads");
    }
}
