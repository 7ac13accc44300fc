// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded worker pool for fire-and-forget background jobs.
//!
//! A fixed number of tasks pull jobs from one bounded queue. Submission never
//! waits: when the queue is full the job is dropped and logged. A job that
//! panics is logged and does not take its worker down. There is no
//! cancellation; a submitted job runs to completion.
//!
//! Jobs give no ordering guarantee relative to later foreground work. A turn
//! that follows quickly may read memory that a previous turn's job has not
//! written yet.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::FutureExt;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{Mutex, Notify, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

type Job = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

#[derive(Default)]
struct InFlight {
    count: AtomicUsize,
    idle: Notify,
}

impl InFlight {
    fn start(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    fn finish(&self) {
        if self.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.idle.notify_waiters();
        }
    }
}

pub struct WorkerPool {
    sender: Option<mpsc::Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
    in_flight: Arc<InFlight>,
}

impl WorkerPool {
    /// Spawn `workers` tasks sharing a queue of `queue_capacity` jobs.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(workers: usize, queue_capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel::<Job>(queue_capacity.max(1));
        let receiver = Arc::new(Mutex::new(receiver));
        let in_flight = Arc::new(InFlight::default());

        let workers = (0..workers.max(1))
            .map(|id| {
                let receiver = Arc::clone(&receiver);
                let in_flight = Arc::clone(&in_flight);
                tokio::spawn(async move {
                    loop {
                        let job = receiver.lock().await.recv().await;
                        let Some(job) = job else { break };
                        if AssertUnwindSafe(job).catch_unwind().await.is_err() {
                            warn!(worker = id, "background job panicked");
                        }
                        in_flight.finish();
                    }
                    debug!(worker = id, "worker stopped");
                })
            })
            .collect();

        Self {
            sender: Some(sender),
            workers,
            in_flight,
        }
    }

    /// Queue a job without waiting. Returns `false` if it was dropped.
    pub fn submit<F>(&self, name: &'static str, job: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Some(sender) = &self.sender else {
            warn!(job = name, "worker pool is shut down, dropping job");
            return false;
        };

        self.in_flight.start();
        match sender.try_send(Box::pin(job)) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                self.in_flight.finish();
                warn!(job = name, "background queue full, dropping job");
                false
            }
            Err(TrySendError::Closed(_)) => {
                self.in_flight.finish();
                warn!(job = name, "background queue closed, dropping job");
                false
            }
        }
    }

    /// Jobs queued or running.
    pub fn in_flight(&self) -> usize {
        self.in_flight.count.load(Ordering::SeqCst)
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Resolve once every submitted job has finished.
    pub async fn wait_idle(&self) {
        loop {
            let idle = self.in_flight.idle.notified();
            if self.in_flight() == 0 {
                return;
            }
            idle.await;
        }
    }

    /// Stop accepting jobs, let queued ones drain, and join the workers.
    ///
    /// Workers still busy after `timeout` are aborted.
    pub async fn shutdown(mut self, timeout: Duration) {
        self.sender = None;
        let pending = self.in_flight();
        let workers = std::mem::take(&mut self.workers);
        let aborts: Vec<_> = workers.iter().map(|w| w.abort_handle()).collect();

        match tokio::time::timeout(timeout, futures::future::join_all(workers)).await {
            Ok(_) => info!(pending, "worker pool drained"),
            Err(_) => {
                warn!(pending = self.in_flight(), "worker pool drain timed out, aborting");
                for handle in aborts {
                    handle.abort();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicU32;

    use super::*;

    #[tokio::test]
    async fn runs_submitted_jobs() {
        let pool = WorkerPool::new(3, 16);
        let counter = Arc::new(AtomicU32::new(0));
        for _ in 0..10 {
            let counter = Arc::clone(&counter);
            assert!(pool.submit("count", async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        }
        pool.wait_idle().await;
        assert_eq!(counter.load(Ordering::SeqCst), 10);
        assert_eq!(pool.in_flight(), 0);
    }

    #[tokio::test]
    async fn full_queue_drops_job() {
        let pool = WorkerPool::new(1, 1);
        let gate = Arc::new(Notify::new());
        let (started_tx, started_rx) = tokio::sync::oneshot::channel();

        let blocker = Arc::clone(&gate);
        let release = blocker.notified_owned();
        assert!(pool.submit("block", async move {
            let _ = started_tx.send(());
            release.await;
        }));
        started_rx.await.unwrap();

        assert!(pool.submit("fill", async {}));
        assert!(!pool.submit("overflow", async {}));
        assert_eq!(pool.in_flight(), 2);

        gate.notify_waiters();
        pool.wait_idle().await;
        assert_eq!(pool.in_flight(), 0);
    }

    #[tokio::test]
    async fn panicking_job_does_not_kill_worker() {
        let pool = WorkerPool::new(1, 4);
        pool.submit("boom", async { panic!("boom") });
        let done = Arc::new(AtomicU32::new(0));
        let flag = Arc::clone(&done);
        pool.submit("after", async move {
            flag.store(1, Ordering::SeqCst);
        });
        pool.wait_idle().await;
        assert_eq!(done.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn shutdown_drains_queue_and_rejects_after() {
        let pool = WorkerPool::new(2, 8);
        let counter = Arc::new(AtomicU32::new(0));
        for _ in 0..4 {
            let counter = Arc::clone(&counter);
            pool.submit("count", async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        pool.shutdown(Duration::from_secs(5)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 4);
    }
}
