//! Shared thread pool for serving mock requests.
//!
//! Every mock gets its own listening socket, but the threads that accept and
//! answer connections are shared between all of them.

use once_cell::sync::Lazy;
use threadfin::ThreadPool;

/// Get access to the shared thread pool.
pub(crate) fn pool() -> &'static ThreadPool {
    static POOL: Lazy<ThreadPool> = Lazy::new(|| ThreadPool::builder().size(..100).build());

    &POOL
}
