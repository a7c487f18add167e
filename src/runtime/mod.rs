//! Runtime abstraction for system operations.
//!
//! The tracking flow touches the outside world only through this trait:
//! reading the clock, probing for the CSV file, and opening it for append.
//! Tests substitute `MockRuntime` to pin the timestamp or simulate failures.
//!
//! - `clock` - wall-clock time
//! - `fs` - file existence and append-mode open

mod clock;
mod fs;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // Clock
    fn now(&self) -> DateTime<Utc>;

    // File System
    fn exists(&self, path: &Path) -> bool;

    /// Open `path` for appending, creating it if absent. The handle is closed
    /// when the returned writer is dropped.
    fn open_append(&self, path: &Path) -> io::Result<Box<dyn io::Write + Send>>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn now(&self) -> DateTime<Utc> {
        self.now_impl()
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn open_append(&self, path: &Path) -> io::Result<Box<dyn io::Write + Send>> {
        self.open_append_impl(path)
    }
}
