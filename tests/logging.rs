// tests/logging.rs
//
// Installs the global subscriber, so keep this as the only test in the binary.

use dagstore::config::LogLevel;
use dagstore::logging::{init_from_config, init_logging};
use dagstore::{Dag, Vertex};
use dagstore_test_utils::builders::ConfigBuilder;

#[test]
fn test_logging_initialises_once() {
    let cfg = ConfigBuilder::new().log_level(LogLevel::Debug).build();

    init_from_config(&cfg).expect("first initialisation should succeed");
    assert!(init_logging(Some(LogLevel::Trace)).is_err());

    // Mutations emit events through the installed subscriber.
    let dag: Dag<()> = Dag::from_config(&cfg);
    dag.add_vertex(Vertex::new("1", None)).unwrap();
    dag.add_vertex(Vertex::new("2", None)).unwrap();
    dag.add_edge("1", "2").unwrap();
    dag.delete_vertex("1").unwrap();
    assert_eq!(dag.order(), 1);
}
