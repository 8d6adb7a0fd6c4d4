/// Image library: the shared list of discovered JPEGs and the background
/// scan that fills it.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::thread::{self, JoinHandle};

use thread_priority::{set_current_thread_priority, ThreadPriority};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Extension matched by the scanner (compared case-insensitively)
pub const JPEG_EXTENSION: &str = "jpg";

/// The ImageList holds every JPEG path discovered so far.
///
/// It is append-only: the background scan is the only writer and the picker
/// only ever reads a length and one index. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct ImageList {
    paths: Arc<RwLock<Vec<PathBuf>>>,
}

impl ImageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a discovered path
    pub fn push(&self, path: PathBuf) {
        self.write().push(path);
    }

    /// Number of paths discovered at the instant of the call
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` against a consistent view of the list (length and contents
    /// are read under one lock)
    pub fn with_snapshot<T>(&self, f: impl FnOnce(&[PathBuf]) -> T) -> T {
        f(&self.read())
    }

    // Entries are only ever appended whole, so a poisoned lock still guards
    // a consistent vector.
    fn read(&self) -> RwLockReadGuard<'_, Vec<PathBuf>> {
        self.paths.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<PathBuf>> {
        self.paths.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Result of a completed directory scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// JPEG files appended to the list
    pub found: usize,
    /// Walk errors that were logged and skipped
    pub errors: usize,
}

/// True if `path` has a `.jpg` extension, ignoring case
pub fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(JPEG_EXTENSION))
}

/// Walk `root` recursively and append every JPEG to `list` as it is found.
///
/// Unreadable directories, symlink loops and a missing root are logged and
/// skipped; the walk always runs to completion.
pub fn scan_into(root: &Path, list: &ImageList) -> ScanSummary {
    scan_with(root, |path| list.push(path))
}

/// Walk `root` recursively, handing each JPEG to `on_found` as soon as it is
/// discovered.
pub fn scan_with(root: &Path, mut on_found: impl FnMut(PathBuf)) -> ScanSummary {
    let mut summary = ScanSummary::default();

    let root = match std::path::absolute(root) {
        Ok(root) => root,
        Err(e) => {
            warn!("⚠️  Cannot resolve scan root {}: {}", root.display(), e);
            summary.errors += 1;
            return summary;
        }
    };

    info!("🔍 Scanning folder: {}", root.display());

    for entry in WalkDir::new(&root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("⚠️  Skipping unreadable entry: {}", e);
                summary.errors += 1;
                continue;
            }
        };

        // Only regular files (symlinks are already resolved by follow_links)
        if !entry.file_type().is_file() || !is_jpeg(entry.path()) {
            continue;
        }

        debug!("found {}", entry.path().display());
        on_found(entry.into_path());
        summary.found += 1;

        if summary.found % 100 == 0 {
            info!("⏳ Found {} images...", summary.found);
        }
    }

    info!(
        "✅ Scan complete: {} images, {} errors",
        summary.found, summary.errors
    );

    summary
}

/// Start `scan_into` on its own low-priority background thread.
///
/// The thread runs once to completion and cannot be cancelled.
pub fn spawn_scan(root: PathBuf, list: ImageList) -> io::Result<JoinHandle<ScanSummary>> {
    thread::Builder::new()
        .name("slideshow-scan".into())
        .spawn(move || {
            lower_priority();
            scan_into(&root, &list)
        })
}

/// Drop the calling thread to the lowest scheduling priority
fn lower_priority() {
    match set_current_thread_priority(ThreadPriority::Min) {
        Ok(()) => debug!("scan thread running at minimum priority"),
        Err(e) => warn!("⚠️  Could not lower scan thread priority: {:?}", e),
    }
}
