use std::env;
use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::{NodeId, NodeTree};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "nodetree=trace");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Builds the tree used across the test suites:
///
/// ```text
/// root
/// ├── x = 1
/// └── y
///     ├── z = 2, 3
///     └── w
///         └── x = 4
/// ```
///
/// Returns the tree and the handles `[root, x, y, z, w, wx]` in pre-order.
pub fn sample_tree() -> (NodeTree<&'static str, i32>, [NodeId; 6]) {
    let mut tree = NodeTree::with_root("root");
    let root = tree.root().expect("seeded root");
    let x = tree.insert(root, "x", vec![1]).expect("live parent");
    let y = tree.insert(root, "y", vec![]).expect("live parent");
    let z = tree.insert(y, "z", vec![2, 3]).expect("live parent");
    let w = tree.insert(y, "w", vec![]).expect("live parent");
    let wx = tree.insert(w, "x", vec![4]).expect("live parent");
    (tree, [root, x, y, z, w, wx])
}
