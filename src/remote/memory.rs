//! In-memory store with a call journal and fault injection.
//! Used by the test-suite and handy for dry runs.

use crate::errors::{AppError, AppResult};
use crate::remote::RemoteStore;
use std::collections::BTreeMap;

/// One mutating or reading call received by a [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    ChangeDirectory(String),
    Download(String),
    Upload { name: String, payload: Vec<u8> },
    Append { name: String, payload: Vec<u8> },
    ProbeSize(String),
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    dirs: Vec<String>,
    cwd: String,
    files: BTreeMap<String, Vec<u8>>,
    calls: Vec<StoreCall>,
    unreadable: Vec<String>,
    failing_uploads: Vec<String>,
    failing_probes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            dirs: vec!["/".to_string()],
            cwd: "/".to_string(),
            ..Self::default()
        }
    }

    /// Declare an existing directory.
    pub fn with_dir(mut self, dir: &str) -> Self {
        self.dirs.push(normalize_dir(dir));
        self
    }

    /// Seed a file at an absolute `dir`/`name` location.
    pub fn with_file(mut self, dir: &str, name: &str, content: impl Into<Vec<u8>>) -> Self {
        let dir = normalize_dir(dir);
        if !self.dirs.contains(&dir) {
            self.dirs.push(dir.clone());
        }
        self.files.insert(join(&dir, name), content.into());
        self
    }

    /// Downloads of `name` return empty content while the size probe keeps
    /// reporting the real size.
    pub fn with_unreadable(mut self, name: &str) -> Self {
        self.unreadable.push(name.to_string());
        self
    }

    /// Uploads to names starting with `prefix` fail with a transport error.
    pub fn with_failing_uploads(mut self, prefix: &str) -> Self {
        self.failing_uploads.push(prefix.to_string());
        self
    }

    /// Every size probe fails with a transport error.
    pub fn with_failing_probes(mut self) -> Self {
        self.failing_probes = true;
        self
    }

    pub fn calls(&self) -> &[StoreCall] {
        &self.calls
    }

    pub fn uploads(&self) -> Vec<(&str, &[u8])> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                StoreCall::Upload { name, payload } => Some((name.as_str(), payload.as_slice())),
                _ => None,
            })
            .collect()
    }

    pub fn appends(&self) -> Vec<(&str, &[u8])> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                StoreCall::Append { name, payload } => Some((name.as_str(), payload.as_slice())),
                _ => None,
            })
            .collect()
    }

    /// Content of `name` in absolute `dir`.
    pub fn file(&self, dir: &str, name: &str) -> Option<&[u8]> {
        self.files.get(&join(&normalize_dir(dir), name)).map(Vec::as_slice)
    }

    /// Names of all files stored under `dir`.
    pub fn file_names(&self, dir: &str) -> Vec<String> {
        let prefix = join(&normalize_dir(dir), "");
        self.files
            .keys()
            .filter_map(|k| k.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('/'))
            .map(str::to_string)
            .collect()
    }

    fn key(&self, name: &str) -> String {
        join(&self.cwd, name)
    }
}

fn normalize_dir(dir: &str) -> String {
    let parts: Vec<&str> = dir.split('/').filter(|p| !p.is_empty()).collect();
    format!("/{}", parts.join("/"))
}

fn join(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{name}")
    } else {
        format!("{dir}/{name}")
    }
}

impl RemoteStore for MemoryStore {
    fn change_directory(&mut self, path: &str) -> AppResult<()> {
        self.calls.push(StoreCall::ChangeDirectory(path.to_string()));
        let target = if path.starts_with('/') {
            normalize_dir(path)
        } else {
            normalize_dir(&join(&self.cwd, path))
        };
        if !self.dirs.contains(&target) {
            return Err(AppError::Transport(format!("cannot enter {path}: no such directory")));
        }
        self.cwd = target;
        Ok(())
    }

    fn current_dir(&self) -> String {
        self.cwd.clone()
    }

    fn download(&mut self, name: &str) -> AppResult<Option<Vec<u8>>> {
        self.calls.push(StoreCall::Download(name.to_string()));
        if self.unreadable.iter().any(|n| n == name) {
            return Ok(Some(Vec::new()));
        }
        Ok(self.files.get(&self.key(name)).cloned())
    }

    fn upload(&mut self, name: &str, payload: &[u8]) -> AppResult<()> {
        self.calls.push(StoreCall::Upload {
            name: name.to_string(),
            payload: payload.to_vec(),
        });
        if self.failing_uploads.iter().any(|p| name.starts_with(p.as_str())) {
            return Err(AppError::Transport(format!("upload of {name} refused")));
        }
        let key = self.key(name);
        self.files.insert(key, payload.to_vec());
        Ok(())
    }

    fn append(&mut self, name: &str, payload: &[u8]) -> AppResult<()> {
        self.calls.push(StoreCall::Append {
            name: name.to_string(),
            payload: payload.to_vec(),
        });
        let key = self.key(name);
        self.files.entry(key).or_default().extend_from_slice(payload);
        Ok(())
    }

    fn probe_size(&mut self, name: &str) -> AppResult<(bool, u64)> {
        self.calls.push(StoreCall::ProbeSize(name.to_string()));
        if self.failing_probes {
            return Err(AppError::Transport(format!("SIZE {name}: connection reset")));
        }
        Ok(match self.files.get(&self.key(name)) {
            Some(content) => (true, content.len() as u64),
            None => (false, 0),
        })
    }
}
