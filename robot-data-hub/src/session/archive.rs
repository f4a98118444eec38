use actix::{Actor, Addr, Handler, SyncArbiter, SyncContext};
use tracing::{error, info};

use super::message::SaveScan;
use crate::scans::{SavedScan, ScanError, ScanStore};

/// Single writer for the scan directory. Every connection funnels its
/// point clouds through here, so writes never interleave.
pub struct ScanArchive {
    store: ScanStore,
}

impl ScanArchive {
    pub fn new(store: ScanStore) -> Self {
        Self { store }
    }

    /// Run the archive on its own thread so file I/O stays off the
    /// server's event loops. One thread keeps writes serialized.
    pub fn spawn(store: ScanStore) -> Addr<Self> {
        SyncArbiter::start(1, move || ScanArchive::new(store.clone()))
    }
}

impl Actor for ScanArchive {
    type Context = SyncContext<Self>;

    fn started(&mut self, _ctx: &mut SyncContext<Self>) {
        info!("Saving scans to {}", self.store.dir().display());
    }
}

impl Handler<SaveScan> for ScanArchive {
    type Result = Result<SavedScan, ScanError>;

    fn handle(&mut self, msg: SaveScan, _ctx: &mut SyncContext<Self>) -> Self::Result {
        match self.store.save(&msg.points) {
            Ok(saved) => {
                info!("Saved {} points to {}", saved.points, saved.file);
                Ok(saved)
            }
            Err(e) => {
                error!("Failed to save scan: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Point;

    #[actix::test]
    async fn archive_replies_with_saved_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ScanStore::open(tmp.path()).unwrap();
        let archive = ScanArchive::spawn(store.clone());

        let points = vec![Point { x: 1.0, y: 2.0, z: 3.0 }; 4];
        let saved = archive.send(SaveScan { points }).await.unwrap().unwrap();

        assert_eq!(saved.points, 4);
        assert_eq!(store.resolve(&saved.file), Some(saved.path));
    }

    #[actix::test]
    async fn archive_serializes_back_to_back_saves() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ScanStore::open(tmp.path()).unwrap();
        let archive = ScanArchive::spawn(store.clone());

        let pending: Vec<_> = (1..=5)
            .map(|n| archive.send(SaveScan {
                points: vec![Point { x: 0.0, y: 0.0, z: n as f64 }; n],
            }))
            .collect();
        for (n, reply) in (1..=5).zip(pending) {
            assert_eq!(reply.await.unwrap().unwrap().points, n);
        }

        assert_eq!(store.list().unwrap().len(), 5);
    }

    #[actix::test]
    async fn archive_reports_write_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ScanStore::open(tmp.path().join("scans")).unwrap();
        std::fs::remove_dir(store.dir()).unwrap();
        let archive = ScanArchive::spawn(store);

        let points = vec![Point { x: 0.0, y: 0.0, z: 0.0 }];
        let res = archive.send(SaveScan { points }).await.unwrap();

        assert!(matches!(res, Err(ScanError::Write { .. })));
    }
}
