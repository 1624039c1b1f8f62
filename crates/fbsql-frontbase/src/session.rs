//! Session transaction modes.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Transaction isolation level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IsolationLevel {
    /// `SERIALIZABLE`
    #[default]
    Serializable,
    /// `REPEATABLE READ`
    RepeatableRead,
    /// `READ COMMITTED`
    ReadCommitted,
    /// `VERSIONED`
    Versioned,
}

impl IsolationLevel {
    /// Returns the SQL keyword(s).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serializable => "SERIALIZABLE",
            Self::RepeatableRead => "REPEATABLE READ",
            Self::ReadCommitted => "READ COMMITTED",
            Self::Versioned => "VERSIONED",
        }
    }
}

/// Locking discipline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockingMode {
    /// `PESSIMISTIC`
    #[default]
    Pessimistic,
    /// `OPTIMISTIC`
    Optimistic,
    /// `DEFERRED`
    Deferred,
}

impl LockingMode {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pessimistic => "PESSIMISTIC",
            Self::Optimistic => "OPTIMISTIC",
            Self::Deferred => "DEFERRED",
        }
    }
}

/// Whether the session may write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// `READ WRITE`
    #[default]
    ReadWrite,
    /// `READ ONLY`
    ReadOnly,
}

impl AccessMode {
    /// Returns the SQL keywords.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadWrite => "READ WRITE",
            Self::ReadOnly => "READ ONLY",
        }
    }
}

/// The transaction mode a session is opened with.
///
/// The default is serializable, pessimistic, read write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionMode {
    /// Isolation level.
    pub isolation: IsolationLevel,
    /// Locking mode.
    pub locking: LockingMode,
    /// Access mode.
    pub access: AccessMode,
}

impl SessionMode {
    /// Creates a session mode.
    #[must_use]
    pub const fn new(isolation: IsolationLevel, locking: LockingMode, access: AccessMode) -> Self {
        Self {
            isolation,
            locking,
            access,
        }
    }

    /// Returns the `SET TRANSACTION` statement selecting this mode.
    #[must_use]
    pub fn to_sql(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SET TRANSACTION ISOLATION LEVEL {}, LOCKING {}, {};",
            self.isolation.as_str(),
            self.locking.as_str(),
            self.access.as_str()
        )
    }
}
