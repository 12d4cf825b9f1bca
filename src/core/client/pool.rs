use std::sync::{Arc, Mutex};

use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::debug;

use super::error::FetchError;

/// A fixed-size pool of backend connections.
///
/// The pool is built once at startup and shared by reference. `acquire`
/// waits until a connection is free; the returned guard hands the connection
/// back when it is dropped, whichever way the caller exits.
pub struct ConnectionPool<C> {
    idle: Mutex<Vec<C>>,
    permits: Arc<Semaphore>,
    size: usize,
}

impl<C> ConnectionPool<C> {
    pub fn new(connections: Vec<C>) -> Self {
        let size = connections.len();
        Self {
            permits: Arc::new(Semaphore::new(size)),
            idle: Mutex::new(connections),
            size,
        }
    }

    pub async fn acquire(&self) -> Result<PooledConnection<'_, C>, FetchError> {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| FetchError::PoolClosed)?;

        // One permit per idle connection, so holding a permit guarantees one is there.
        let conn = self
            .idle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop()
            .ok_or(FetchError::PoolClosed)?;

        debug!(available = self.permits.available_permits(), "acquired backend connection");
        Ok(PooledConnection {
            conn: Some(conn),
            pool: self,
            _permit: permit,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Stops handing out connections; pending and future `acquire` calls fail.
    pub fn close(&self) {
        self.permits.close();
    }

    fn release(&self, conn: C) {
        self.idle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(conn);
    }
}

/// A checked-out connection. Returned to the pool on drop.
pub struct PooledConnection<'a, C> {
    conn: Option<C>,
    pool: &'a ConnectionPool<C>,
    _permit: OwnedSemaphorePermit,
}

impl<C> std::ops::Deref for PooledConnection<'_, C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        // Only taken in `drop`.
        self.conn.as_ref().expect("pooled connection already released")
    }
}

impl<C> Drop for PooledConnection<'_, C> {
    fn drop(&mut self) {
        // The connection goes back before the permit is released.
        if let Some(conn) = self.conn.take() {
            self.pool.release(conn);
        }
    }
}
