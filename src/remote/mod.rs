//! Remote storage seam.
//!
//! The append engine only talks to a [`RemoteStore`]. "Not found" is a normal
//! answer (`Ok(None)` / `(false, 0)`), every other failure is an
//! [`AppError::Transport`](crate::errors::AppError::Transport).

pub mod local;
pub mod memory;

pub use local::LocalStore;
pub use memory::{MemoryStore, StoreCall};

use crate::errors::AppResult;

pub trait RemoteStore {
    /// Enter `path`. Fails when the directory does not exist.
    fn change_directory(&mut self, path: &str) -> AppResult<()>;

    /// Current working directory, as shown to the user.
    fn current_dir(&self) -> String;

    /// Whole content of `name`, or `None` if the file does not exist.
    fn download(&mut self, name: &str) -> AppResult<Option<Vec<u8>>>;

    /// Create or fully overwrite `name`.
    fn upload(&mut self, name: &str, payload: &[u8]) -> AppResult<()>;

    /// Append `payload` to `name` in a single round trip, creating it if missing.
    fn append(&mut self, name: &str, payload: &[u8]) -> AppResult<()>;

    /// `(exists, size)` of `name`.
    fn probe_size(&mut self, name: &str) -> AppResult<(bool, u64)>;
}
