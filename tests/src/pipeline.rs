//! End-to-end pipeline tests driven by a deterministic probe stub: every
//! dispatched address must be probed exactly once, malformed specifications
//! must not derail a run, and the pool must drain regardless of how its
//! size compares to the amount of work.

use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use bannr_common::config::Config;
use bannr_core::probe::Probe;
use bannr_core::report::Reporter;
use bannr_core::scanner;

/// Counts invocations and records each probed address.
struct StubProbe {
    probed: AtomicUsize,
    seen: std::sync::Mutex<Vec<IpAddr>>,
}

impl StubProbe {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            probed: AtomicUsize::new(0),
            seen: std::sync::Mutex::new(Vec::new()),
        })
    }

    fn count(&self) -> usize {
        self.probed.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Probe for StubProbe {
    async fn probe(&self, addr: IpAddr) -> String {
        self.probed.fetch_add(1, Ordering::Relaxed);
        self.seen.lock().unwrap().push(addr);
        String::new()
    }
}

fn config(workers: usize) -> Config {
    Config {
        workers,
        timeout: Duration::from_secs(1),
        verbose: false,
    }
}

fn quiet_reporter() -> Arc<Reporter> {
    Arc::new(Reporter::new(false))
}

#[tokio::test]
async fn every_dispatched_address_is_probed_exactly_once() {
    let specs = vec!["10.0.0.0/29".to_string(), "192.168.1.5".to_string()];
    let probe = StubProbe::new();

    let dispatched = scanner::run(&specs, &config(4), probe.clone(), quiet_reporter()).await;

    // Six usable hosts in the /29 plus the single address.
    assert_eq!(dispatched, 7);
    assert_eq!(probe.count(), dispatched);

    let mut seen = probe.seen.lock().unwrap().clone();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), dispatched, "an address was probed twice");
}

#[tokio::test]
async fn malformed_specification_is_skipped_not_fatal() {
    let specs = vec![
        "999.1.1.1/33".to_string(),
        "10.0.0.0/30".to_string(),
        "garbage".to_string(),
    ];
    let probe = StubProbe::new();

    let dispatched = scanner::run(&specs, &config(4), probe.clone(), quiet_reporter()).await;

    // Only the valid /30 contributes work.
    assert_eq!(dispatched, 2);
    assert_eq!(probe.count(), 2);
}

#[tokio::test]
async fn run_with_no_valid_work_completes() {
    let specs = vec!["999.1.1.1/33".to_string()];
    let probe = StubProbe::new();

    let dispatched = scanner::run(&specs, &config(4), probe.clone(), quiet_reporter()).await;

    assert_eq!(dispatched, 0);
    assert_eq!(probe.count(), 0);
}

#[tokio::test]
async fn pool_larger_than_the_address_list_drains() {
    let specs = vec!["192.168.1.5".to_string()];
    let probe = StubProbe::new();

    let dispatched = scanner::run(&specs, &config(100), probe.clone(), quiet_reporter()).await;

    assert_eq!(dispatched, 1);
    assert_eq!(probe.count(), 1);
}

#[tokio::test]
async fn address_list_larger_than_the_pool_applies_backpressure() {
    // 30 usable hosts through a 2-worker pool: dispatch has to block on
    // the bounded queue and the run must still drain completely.
    let specs = vec!["10.0.0.0/27".to_string()];
    let probe = StubProbe::new();

    let dispatched = scanner::run(&specs, &config(2), probe.clone(), quiet_reporter()).await;

    assert_eq!(dispatched, 30);
    assert_eq!(probe.count(), 30);
}
