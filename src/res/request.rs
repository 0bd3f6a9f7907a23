//! A asynchronous loading request.

use std::sync::Arc;

use crate::sched::prelude::LockLatch;

/// The outcome of fetching the bytes of a resource.
pub type Response = Result<Box<[u8]>, failure::Error>;

/// A asynchronous request. You should check the completion status with `poll` manually.
/// Once the polling returns true, the result could be fetched with `take`.
///
/// A request whose producer went away without setting the latch, e.g. a worker thread that
/// panicked, resolves as `Abandoned`.
pub enum Request<T> {
    NotReady(Arc<LockLatch<T>>),
    Ok(T),
    Abandoned,
}

impl<T> Request<T> {
    /// Creates a latch for the producer side of a request.
    #[inline]
    pub fn latch() -> Arc<LockLatch<T>> {
        Arc::new(LockLatch::new())
    }

    #[inline]
    pub fn new(latch: Arc<LockLatch<T>>) -> Self {
        Request::NotReady(latch)
    }

    /// Attempt to resolve the request to a final state, and returns true if the result is
    /// ready for user.
    pub fn poll(&mut self) -> bool {
        let next = match *self {
            Request::Ok(_) | Request::Abandoned => return true,
            Request::NotReady(ref latch) => {
                // Producers set the latch before dropping their handle to it.
                let orphan = Arc::strong_count(latch) == 1;

                match latch.take() {
                    Some(rsp) => Request::Ok(rsp),
                    None if orphan => Request::Abandoned,
                    None => return false,
                }
            }
        };

        *self = next;
        true
    }

    /// Consumes the request, returning the result if it has been resolved by `poll`. Abandoned
    /// requests return `None`.
    #[inline]
    pub fn take(self) -> Option<T> {
        match self {
            Request::Ok(rsp) => Some(rsp),
            Request::NotReady(_) | Request::Abandoned => None,
        }
    }
}
