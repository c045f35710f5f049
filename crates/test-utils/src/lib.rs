pub mod builders;

use std::sync::Once;

use dagstore::Dag;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable graph mutation events with e.g.:
/// `RUST_LOG=dagstore=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dagstore=info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Ids `"1"..="n"` as owned strings.
pub fn numbered_ids(n: usize) -> Vec<String> {
    (1..=n).map(|i| i.to_string()).collect()
}

/// Check that every edge is recorded exactly once on both endpoints and
/// that no adjacency entry names a missing vertex.
///
/// Takes the graph lock once per lookup, so only call it while no other
/// thread is mutating `dag`.
pub fn assert_adjacency_symmetric<V>(dag: &Dag<V>) {
    for id in dag.vertex_ids() {
        let children = dag.children_of(&id).expect("listed vertex must exist");
        for child in &children {
            let back = dag
                .parents_of(child)
                .unwrap_or_else(|_| panic!("edge ({id:?},{child:?}) points to a missing vertex"));
            assert_eq!(
                back.iter().filter(|p| **p == id).count(),
                1,
                "edge ({id:?},{child:?}) not recorded once in the parents of {child:?}"
            );
        }

        let parents = dag.parents_of(&id).expect("listed vertex must exist");
        for parent in &parents {
            let forward = dag
                .children_of(parent)
                .unwrap_or_else(|_| panic!("edge ({parent:?},{id:?}) comes from a missing vertex"));
            assert_eq!(
                forward.iter().filter(|c| **c == id).count(),
                1,
                "edge ({parent:?},{id:?}) not recorded once in the children of {parent:?}"
            );
        }
    }
}
