//! Request Queue Module
//!
//! Caps the number of simultaneous outbound operations so a burst of
//! dashboard widgets cannot saturate the connection limit. Waiters are
//! admitted in FIFO order; completion order is unconstrained.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::trace;

// == Request Queue ==
/// Admits at most `max_concurrent` operations at a time.
///
/// Built on a fair semaphore, so operations past the cap wait their turn
/// in arrival order. One operation's failure releases its slot like any
/// other settlement and does not affect the rest.
#[derive(Debug)]
pub struct RequestQueue {
    semaphore: Arc<Semaphore>,
    in_flight: AtomicUsize,
    max_concurrent: usize,
}

impl RequestQueue {
    // == Constructor ==
    /// Creates a queue admitting at most `max_concurrent` operations.
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent)),
            in_flight: AtomicUsize::new(0),
            max_concurrent,
        }
    }

    // == Run ==
    /// Runs an operation once a slot is free.
    ///
    /// The slot is held for the operation's whole lifetime and released on
    /// settlement, success or failure alike.
    pub async fn run<F, T>(&self, operation: F) -> T
    where
        F: Future<Output = T>,
    {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .expect("request queue semaphore never closes");

        self.in_flight.fetch_add(1, Ordering::SeqCst);
        trace!(in_flight = self.in_flight(), "operation admitted");

        let result = operation.await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    // == In Flight ==
    /// Number of admitted-but-unsettled operations.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    // == Max Concurrent ==
    /// The configured admission cap.
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::Mutex;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_queue_runs_operation() {
        let queue = RequestQueue::new(2);
        let value = queue.run(async { 41 + 1 }).await;
        assert_eq!(value, 42);
        assert_eq!(queue.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_queue_bounds_concurrency() {
        let queue = Arc::new(RequestQueue::new(2));
        let current = Arc::new(AtomicUsize::new(0));
        let high_water = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..5 {
            let queue = Arc::clone(&queue);
            let current = Arc::clone(&current);
            let high_water = Arc::clone(&high_water);
            handles.push(tokio::spawn(async move {
                queue
                    .run(async {
                        let now = current.fetch_add(1, Ordering::SeqCst) + 1;
                        high_water.fetch_max(now, Ordering::SeqCst);
                        sleep(Duration::from_millis(50)).await;
                        current.fetch_sub(1, Ordering::SeqCst);
                    })
                    .await;
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert!(
            high_water.load(Ordering::SeqCst) <= 2,
            "more than max_concurrent operations ran at once"
        );
        assert_eq!(queue.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_queue_admits_in_fifo_order() {
        let queue = Arc::new(RequestQueue::new(1));
        let order = Arc::new(Mutex::new(Vec::new()));

        // Occupy the single slot so the numbered operations all wait
        let gate = Arc::clone(&queue);
        let blocker = tokio::spawn(async move {
            gate.run(async { sleep(Duration::from_millis(150)).await }).await;
        });

        sleep(Duration::from_millis(10)).await;

        let mut handles = Vec::new();
        for i in 0..4 {
            let queue = Arc::clone(&queue);
            let order = Arc::clone(&order);
            handles.push(tokio::spawn(async move {
                queue
                    .run(async {
                        order.lock().await.push(i);
                    })
                    .await;
            }));
            // Ensure each waiter enters the semaphore queue in sequence
            sleep(Duration::from_millis(10)).await;
        }

        blocker.await.unwrap();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(*order.lock().await, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_queue_failure_frees_slot() {
        let queue = RequestQueue::new(1);

        let failed: Result<(), &str> = queue.run(async { Err("boom") }).await;
        assert!(failed.is_err());

        // The slot must be free again
        let ok: Result<u32, &str> = queue.run(async { Ok(7) }).await;
        assert_eq!(ok, Ok(7));
        assert_eq!(queue.in_flight(), 0);
    }
}
