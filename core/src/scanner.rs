//! Scan orchestration.
//!
//! The dispatcher expands every specification into addresses, feeds them to
//! a fixed pool of probe workers through a bounded queue, and blocks until
//! each dispatched address has been probed exactly once. Output order is
//! completion order; no ordering holds across workers.

use std::sync::Arc;

use tracing::{debug, error};

use bannr_common::config::Config;
use bannr_common::network::range;
use bannr_common::network::target::Target;

use crate::probe::Probe;
use crate::report::Reporter;

mod pool;

use pool::WorkerPool;

/// Expands every specification and drives the probes to completion.
///
/// Malformed specifications are reported and skipped; the scan continues
/// with the rest. Once dispatch has begun nothing is fatal and the run
/// always drains its queue. Returns the number of addresses dispatched.
pub async fn run(
    specs: &[String],
    cfg: &Config,
    probe: Arc<dyn Probe>,
    reporter: Arc<Reporter>,
) -> usize {
    // Workers come up before the first address is enqueued.
    let pool = WorkerPool::start(cfg.workers, probe, reporter);

    let mut dispatched: usize = 0;
    for spec in specs {
        let target = match spec.parse::<Target>() {
            Ok(target) => target,
            Err(err) => {
                error!("skipping target: {err}");
                continue;
            }
        };

        for addr in range::expand(&target) {
            pool.dispatch(addr).await;
            dispatched += 1;
        }
    }

    pool.join().await;
    debug!(dispatched, "scan drained");
    dispatched
}
