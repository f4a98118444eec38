use crate::scans::ScanStore;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: ScanStore,
    pub acknowledge_telemetry: bool,
    pub max_frame_size: usize,
}
