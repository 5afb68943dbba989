pub mod tracing;
pub mod upstream;

pub use self::tracing::init_test_tracing;
pub use upstream::{
    ConcurrencyProbe, UpstreamOptions, start_upstream, start_upstream_with, unreachable_upstream,
};
