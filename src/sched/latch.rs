use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};

/// A latch starts as unset. Eventually someone sets it and it stays set. You can test if it
/// has been set by calling `is_set()`.
pub trait Latch {
    /// Test if the latch is set.
    fn is_set(&self) -> bool;
}

/// Spin latches are the simplest kind. They just have a boolean flag that becomes true when
/// `set()` is called, and they never block.
#[derive(Debug, Default)]
pub struct SpinLatch {
    b: AtomicBool,
}

impl SpinLatch {
    #[inline]
    pub fn new() -> SpinLatch {
        SpinLatch {
            b: AtomicBool::new(false),
        }
    }

    /// Set the latch.
    #[inline]
    pub fn set(&self) {
        self.b.store(true, Ordering::SeqCst);
    }
}

impl Latch for SpinLatch {
    #[inline]
    fn is_set(&self) -> bool {
        self.b.load(Ordering::SeqCst)
    }
}

/// A latch which carries a value from the thread that produces it to the thread that
/// consumes it. You can block until it is set, or poll it with `is_set`.
///
/// The value can be taken exactly once.
pub struct LockLatch<T> {
    m: Mutex<LockLatchState<T>>,
    v: Condvar,
}

enum LockLatchState<T> {
    Pending,
    Ready(T),
    Taken,
}

impl<T> Default for LockLatch<T> {
    fn default() -> Self {
        LockLatch::new()
    }
}

impl<T> LockLatch<T> {
    #[inline]
    pub fn new() -> LockLatch<T> {
        LockLatch {
            m: Mutex::new(LockLatchState::Pending),
            v: Condvar::new(),
        }
    }

    /// Stores `value` and wakes up everyone waiting on this latch. Setting a latch twice keeps
    /// the first value.
    pub fn set(&self, value: T) {
        let mut guard = self.m.lock().unwrap();
        if let LockLatchState::Pending = *guard {
            *guard = LockLatchState::Ready(value);
            self.v.notify_all();
        }
    }

    /// Takes the value out of this latch. Returns `None` if the latch has not been set yet,
    /// or if the value has been taken already.
    pub fn take(&self) -> Option<T> {
        let mut guard = self.m.lock().unwrap();
        match std::mem::replace(&mut *guard, LockLatchState::Taken) {
            LockLatchState::Ready(v) => Some(v),
            LockLatchState::Pending => {
                *guard = LockLatchState::Pending;
                None
            }
            LockLatchState::Taken => None,
        }
    }

    /// Blocks until latch is set.
    pub fn wait(&self) {
        let mut guard = self.m.lock().unwrap();
        while let LockLatchState::Pending = *guard {
            guard = self.v.wait(guard).unwrap();
        }
    }
}

impl<T> Latch for LockLatch<T> {
    #[inline]
    fn is_set(&self) -> bool {
        match *self.m.lock().unwrap() {
            LockLatchState::Pending => false,
            _ => true,
        }
    }
}
