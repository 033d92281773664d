//! Directory-backed store (a mounted share or a plain local folder).

use crate::errors::{AppError, AppResult};
use crate::remote::RemoteStore;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub struct LocalStore {
    root: PathBuf,
    cwd: PathBuf,
}

fn transport<E: std::fmt::Display>(what: &str, target: &Path, e: E) -> AppError {
    AppError::Transport(format!("{what} {}: {e}", target.display()))
}

impl LocalStore {
    /// "Connect" to the store rooted at `root`, which must be an existing directory.
    pub fn open(root: impl AsRef<Path>) -> AppResult<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(AppError::Transport(format!(
                "store root {} is not reachable",
                root.display()
            )));
        }
        debug!(root = %root.display(), "store opened");
        Ok(Self {
            root,
            cwd: PathBuf::new(),
        })
    }

    fn resolve_dir(&self, path: &str) -> AppResult<PathBuf> {
        let requested = Path::new(path);
        let mut rel = if requested.is_absolute() {
            PathBuf::new()
        } else {
            self.cwd.clone()
        };

        for comp in requested.components() {
            match comp {
                Component::Normal(part) => rel.push(part),
                Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
                Component::ParentDir => {
                    return Err(AppError::Transport(format!(
                        "cannot enter {path}: parent references are not allowed"
                    )));
                }
            }
        }
        Ok(rel)
    }

    fn file_path(&self, name: &str) -> AppResult<PathBuf> {
        let p = Path::new(name);
        if p.components().count() != 1 || !matches!(p.components().next(), Some(Component::Normal(_))) {
            return Err(AppError::Transport(format!("invalid file name: {name}")));
        }
        Ok(self.root.join(&self.cwd).join(p))
    }
}

impl RemoteStore for LocalStore {
    fn change_directory(&mut self, path: &str) -> AppResult<()> {
        let rel = self.resolve_dir(path)?;
        let full = self.root.join(&rel);
        if !full.is_dir() {
            return Err(AppError::Transport(format!("cannot enter {path}: no such directory")));
        }
        self.cwd = rel;
        Ok(())
    }

    fn current_dir(&self) -> String {
        let parts: Vec<String> = self
            .cwd
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        format!("/{}", parts.join("/"))
    }

    fn download(&mut self, name: &str) -> AppResult<Option<Vec<u8>>> {
        let path = self.file_path(name)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(transport("cannot download", &path, e)),
        }
    }

    fn upload(&mut self, name: &str, payload: &[u8]) -> AppResult<()> {
        let path = self.file_path(name)?;
        fs::write(&path, payload).map_err(|e| transport("cannot upload", &path, e))
    }

    fn append(&mut self, name: &str, payload: &[u8]) -> AppResult<()> {
        let path = self.file_path(name)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| transport("cannot open for append", &path, e))?;

        // one write call: O_APPEND keeps it at the current end of file
        file.write_all(payload)
            .and_then(|_| file.flush())
            .map_err(|e| transport("cannot append to", &path, e))
    }

    fn probe_size(&mut self, name: &str) -> AppResult<(bool, u64)> {
        let path = self.file_path(name)?;
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Ok((true, meta.len())),
            Ok(_) => Err(AppError::Transport(format!(
                "{} is not a regular file",
                path.display()
            ))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok((false, 0)),
            Err(e) => Err(transport("cannot stat", &path, e)),
        }
    }
}
