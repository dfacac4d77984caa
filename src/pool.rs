//! Bounded pool of argument buffers.
//!
//! Every formatting call needs a scratch `Vec<Value>` for the bound
//! arguments. [`ArgPool`] keeps a handful of them around so steady-state
//! formatting does not allocate for the argument list.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, PoisonError};

use nmfmt_core::Value;

/// Idle buffers kept by default.
pub const DEFAULT_POOL_CAPACITY: usize = 32;

pub struct ArgPool {
    idle: Mutex<Vec<Vec<Value>>>,
    capacity: usize,
}

impl ArgPool {
    /// A pool that keeps at most `capacity` idle buffers.
    pub fn new(capacity: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            capacity,
        }
    }

    /// Check out an empty buffer. It returns to the pool when the guard
    /// drops.
    pub fn acquire(&self) -> PooledArgs<'_> {
        let mut buf = self.lock().pop().unwrap_or_default();
        buf.clear();
        PooledArgs { pool: self, buf }
    }

    /// Number of idle buffers.
    pub fn idle(&self) -> usize {
        self.lock().len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn release(&self, mut buf: Vec<Value>) {
        buf.clear();
        let mut idle = self.lock();
        if idle.len() < self.capacity {
            idle.push(buf);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Vec<Value>>> {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ArgPool {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_CAPACITY)
    }
}

impl std::fmt::Debug for ArgPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgPool")
            .field("idle", &self.idle())
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// A buffer checked out of an [`ArgPool`].
pub struct PooledArgs<'p> {
    pool: &'p ArgPool,
    buf: Vec<Value>,
}

impl Deref for PooledArgs<'_> {
    type Target = Vec<Value>;

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl DerefMut for PooledArgs<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl Drop for PooledArgs<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buf));
    }
}
