use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use bytes::Bytes;

use crate::error::ExecutionError;

/// Fetches the content of a blob the driver only returned a handle for.
pub trait BlobSource: Send + Sync {
    /// Reads `size` bytes of the blob identified by `handle`.
    ///
    /// # Errors
    ///
    /// Returns the driver's error if the read fails.
    fn fetch(&self, handle: &str, size: usize) -> Result<Bytes, ExecutionError>;
}

/// Binary large object.
///
/// A blob is either materialized or a deferred handle that reads its content
/// from a [`BlobSource`] on first access and caches it. Clones share the
/// cache. A failed fetch is not cached.
///
/// Deferred blobs compare and hash by handle and never fetch to do so.
#[derive(Clone)]
pub struct Blob {
    inner: Arc<Inner>,
}

struct Inner {
    data: OnceLock<Bytes>,
    deferred: Option<Deferred>,
}

struct Deferred {
    handle: String,
    size: usize,
    source: Arc<dyn BlobSource>,
}

impl Blob {
    /// Creates a materialized blob.
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            inner: Arc::new(Inner {
                data: OnceLock::from(data.into()),
                deferred: None,
            }),
        }
    }

    /// Creates a blob whose content is fetched lazily from `source`.
    #[must_use]
    pub fn deferred(
        handle: impl Into<String>,
        size: usize,
        source: Arc<dyn BlobSource>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                data: OnceLock::new(),
                deferred: Some(Deferred {
                    handle: handle.into(),
                    size,
                    source,
                }),
            }),
        }
    }

    /// Returns the content, fetching it if this blob is deferred.
    ///
    /// # Errors
    ///
    /// Returns the [`BlobSource`] error if the fetch fails.
    pub fn data(&self) -> Result<&Bytes, ExecutionError> {
        if let Some(data) = self.inner.data.get() {
            return Ok(data);
        }
        let fetched = match &self.inner.deferred {
            Some(d) => {
                tracing::trace!(handle = %d.handle, size = d.size, "Fetching deferred blob");
                d.source.fetch(&d.handle, d.size).inspect_err(|e| {
                    tracing::debug!(handle = %d.handle, error = %e, "Deferred blob fetch failed");
                })?
            }
            None => Bytes::new(),
        };
        // A concurrent fetch may have won; either result is the same content.
        Ok(self.inner.data.get_or_init(|| fetched))
    }

    /// Returns the content if it is available without a fetch.
    #[must_use]
    pub fn materialized(&self) -> Option<&Bytes> {
        self.inner.data.get()
    }

    /// Returns the size in bytes without fetching the content.
    #[must_use]
    pub fn len(&self) -> usize {
        match (self.inner.data.get(), &self.inner.deferred) {
            (Some(data), _) => data.len(),
            (None, Some(d)) => d.size,
            (None, None) => 0,
        }
    }

    /// Returns true if the blob has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the driver handle of a deferred blob.
    #[must_use]
    pub fn handle(&self) -> Option<&str> {
        self.inner.deferred.as_ref().map(|d| d.handle.as_str())
    }

    /// Returns true if the content is available without a fetch.
    #[must_use]
    pub fn is_materialized(&self) -> bool {
        self.inner.data.get().is_some()
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Blob");
        s.field("len", &self.len());
        if let Some(handle) = self.handle() {
            s.field("handle", &handle);
        }
        s.field("materialized", &self.is_materialized()).finish()
    }
}

impl PartialEq for Blob {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        match (&self.inner.deferred, &other.inner.deferred) {
            (Some(a), Some(b)) => a.handle == b.handle,
            (None, None) => self.inner.data.get() == other.inner.data.get(),
            _ => false,
        }
    }
}

impl Eq for Blob {}

impl Hash for Blob {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.inner.deferred {
            Some(d) => {
                state.write_u8(1);
                d.handle.hash(state);
            }
            None => {
                state.write_u8(0);
                self.inner.data.get().hash(state);
            }
        }
    }
}

impl From<Vec<u8>> for Blob {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<Bytes> for Blob {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}
