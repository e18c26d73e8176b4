//! Running request futures without anyone waiting on them.

use futures_lite::future::block_on;
use std::{
    future::Future,
    io,
    sync::atomic::{AtomicUsize, Ordering},
    thread,
};
use tracing_futures::Instrument;

static NEXT_TASK_ID: AtomicUsize = AtomicUsize::new(0);

/// Drive a future to completion on a new background thread.
///
/// The thread is not joined. The future runs inside the span that was current
/// when it was detached, so events it emits keep their context.
pub(crate) fn detach<F>(future: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
    let future = future.instrument(tracing::Span::current());

    thread::Builder::new()
        .name(format!("logout-{}", id))
        .spawn(move || block_on(future))?;

    tracing::trace!(task = id, "detached logout request");

    Ok(())
}
