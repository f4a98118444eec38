use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::message::Point;

const SCAN_PREFIX: &str = "scan_";
const SCAN_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to create scan directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to write scan {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to list scans: {0}")]
    List(#[source] io::Error),
}

#[derive(Debug, Clone)]
pub struct SavedScan {
    pub file: String,
    pub path: PathBuf,
    pub points: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanEntry {
    pub file: String,
    pub size_bytes: u64,
}

/// Directory of persisted point clouds.
#[derive(Debug, Clone)]
pub struct ScanStore {
    dir: PathBuf,
}

impl ScanStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ScanError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| ScanError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[instrument(name = "save_scan", skip(self, points), fields(points = points.len()))]
    pub fn save(&self, points: &[Point]) -> Result<SavedScan, ScanError> {
        self.save_at(points, Local::now())
    }

    fn save_at(&self, points: &[Point], now: DateTime<Local>) -> Result<SavedScan, ScanError> {
        let stem = format!("{}{}", SCAN_PREFIX, now.format("%Y%m%d_%H%M%S_%3f"));
        let (file, path, handle) = self.create_unique(&stem)?;

        write_points(handle, points, &now).map_err(|source| ScanError::Write {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote {} points to {}", points.len(), path.display());

        Ok(SavedScan {
            file,
            path,
            points: points.len(),
        })
    }

    fn create_unique(&self, stem: &str) -> Result<(String, PathBuf, File), ScanError> {
        let mut attempt = 0u32;
        loop {
            let file = match attempt {
                0 => format!("{}.{}", stem, SCAN_EXTENSION),
                n => format!("{}_{}.{}", stem, n, SCAN_EXTENSION),
            };
            let path = self.dir.join(&file);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(handle) => return Ok((file, path, handle)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(source) => return Err(ScanError::Write { path, source }),
            }
        }
    }

    pub fn list(&self) -> Result<Vec<ScanEntry>, ScanError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(ScanError::List)? {
            let entry = entry.map_err(ScanError::List)?;
            let meta = entry.metadata().map_err(ScanError::List)?;
            if !meta.is_file() {
                continue;
            }
            let Some(file) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            if is_scan_name(&file) {
                entries.push(ScanEntry {
                    file,
                    size_bytes: meta.len(),
                });
            }
        }
        entries.sort_by(|a, b| a.file.cmp(&b.file));
        Ok(entries)
    }

    /// Path of an existing scan file. Names that could escape the scan
    /// directory never resolve.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.contains(['/', '\\']) || name.contains("..") || !is_scan_name(name) {
            return None;
        }
        let path = self.dir.join(name);
        path.is_file().then_some(path)
    }
}

fn is_scan_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == SCAN_EXTENSION)
}

fn write_points(handle: File, points: &[Point], now: &DateTime<Local>) -> io::Result<()> {
    let mut out = BufWriter::new(handle);
    writeln!(
        out,
        "# Robot scan {} ({} points)",
        now.format("%Y-%m-%d %H:%M:%S"),
        points.len()
    )?;
    writeln!(out, "# x,y,z")?;
    for p in points {
        writeln!(out, "{:.4},{:.4},{:.4}", p.x, p.y, p.z)?;
    }
    out.flush()
}
