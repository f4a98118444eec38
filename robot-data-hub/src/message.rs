use serde::{Deserialize, Serialize};

pub const SAVE_TO_TXT: &str = "save_to_txt";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AckStatus {
    Success,
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ack {
    pub status: AckStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Ack {
    pub fn saved(points: usize, file: impl Into<String>) -> Self {
        Self {
            status: AckStatus::Success,
            message: format!("Saved {} points", points),
            file: Some(file.into()),
        }
    }

    pub fn log_received() -> Self {
        Self {
            status: AckStatus::Ok,
            message: "log_received".to_owned(),
            file: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: AckStatus::Error,
            message: message.into(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_ack_carries_file() {
        let json = serde_json::to_value(Ack::saved(3, "scan_1.txt")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "success",
                "message": "Saved 3 points",
                "file": "scan_1.txt",
            })
        );
    }

    #[test]
    fn telemetry_ack_omits_file() {
        let json = serde_json::to_string(&Ack::log_received()).unwrap();
        assert_eq!(json, r#"{"status":"ok","message":"log_received"}"#);
    }

    #[test]
    fn error_ack_has_no_file() {
        let json = serde_json::to_string(&Ack::error("disk full")).unwrap();
        assert_eq!(json, r#"{"status":"error","message":"disk full"}"#);
    }
}
