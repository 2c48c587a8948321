//! Bounded work queue and the fixed worker set that drains it.

use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;

use crate::probe::Probe;
use crate::report::Reporter;

/// Countdown latch over the outstanding work.
///
/// Every dispatched address adds one, every finished probe removes one;
/// `wait` resolves once the count is back at zero.
struct WaitGroup {
    pending: AtomicUsize,
    zero: Notify,
}

impl WaitGroup {
    fn new() -> Self {
        Self {
            pending: AtomicUsize::new(0),
            zero: Notify::new(),
        }
    }

    fn add(&self, n: usize) {
        self.pending.fetch_add(n, Ordering::AcqRel);
    }

    fn done(&self) {
        if self.pending.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.zero.notify_waiters();
        }
    }

    async fn wait(&self) {
        loop {
            // Register before checking so a `done` racing past the load
            // cannot be missed.
            let zeroed = self.zero.notified();
            if self.pending.load(Ordering::Acquire) == 0 {
                return;
            }
            zeroed.await;
        }
    }
}

/// Fixed set of probe workers fed through one bounded queue.
///
/// All workers are running before the first dispatch. The queue capacity
/// equals the worker count, so a producer that outruns the pool blocks in
/// `dispatch` instead of buffering an entire range in memory.
pub(crate) struct WorkerPool {
    queue: Sender<IpAddr>,
    wg: Arc<WaitGroup>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    pub(crate) fn start(size: usize, probe: Arc<dyn Probe>, reporter: Arc<Reporter>) -> Self {
        // A zero-sized pool could never drain its queue.
        let size = size.max(1);

        let (queue, rx) = mpsc::channel::<IpAddr>(size);
        let rx = Arc::new(Mutex::new(rx));
        let wg = Arc::new(WaitGroup::new());

        let workers = (0..size)
            .map(|_| {
                tokio::spawn(worker(
                    rx.clone(),
                    probe.clone(),
                    reporter.clone(),
                    wg.clone(),
                ))
            })
            .collect();

        Self { queue, wg, workers }
    }

    /// Registers one unit of outstanding work, then enqueues the address.
    /// Blocks while the queue is full.
    pub(crate) async fn dispatch(&self, addr: IpAddr) {
        self.wg.add(1);
        if self.queue.send(addr).await.is_err() {
            // Workers only disappear after `join`; an address that cannot
            // be delivered at that point counts as finished.
            self.wg.done();
        }
    }

    /// Waits until every dispatched address has been probed, then closes
    /// the queue and reaps the workers.
    pub(crate) async fn join(self) {
        self.wg.wait().await;
        drop(self.queue);
        for handle in self.workers {
            let _ = handle.await;
        }
    }
}

async fn worker(
    queue: Arc<Mutex<Receiver<IpAddr>>>,
    probe: Arc<dyn Probe>,
    reporter: Arc<Reporter>,
    wg: Arc<WaitGroup>,
) {
    loop {
        // The queue lock is held only across the dequeue; probing runs
        // unlocked so the pool actually fans out.
        let addr = { queue.lock().await.recv().await };
        let Some(addr) = addr else {
            // Queue closed and drained.
            break;
        };

        let banner = probe.probe(addr).await;
        reporter.emit(addr, &banner);
        wg.done();
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
