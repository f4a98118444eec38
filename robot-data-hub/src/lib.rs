pub mod app_state;
pub mod message;
pub mod relay;
pub mod routes;
pub mod scans;
pub mod session;
pub mod settings;
pub mod utils;
