use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::message::{Point, SAVE_TO_TXT};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("malformed frame: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("malformed points: {0}")]
    Points(#[source] serde_json::Error),
}

/// What a connection should do with one text frame.
#[derive(Debug, PartialEq)]
pub enum Dispatch {
    Save(Vec<Point>),
    EmptyScan,
    Telemetry { distance: f64, target: Option<Value> },
    Unhandled,
}

/// Classify a frame. Only the fields the chosen branch needs are read, so a
/// stray or mistyped field elsewhere never drops the frame.
pub fn dispatch(text: &str) -> Result<Dispatch, RelayError> {
    let msg: Value = serde_json::from_str(text).map_err(RelayError::Parse)?;

    if msg.get("command").and_then(Value::as_str) == Some(SAVE_TO_TXT) {
        let points = match msg.get("points") {
            None | Some(Value::Null) => return Ok(Dispatch::EmptyScan),
            Some(points) => Vec::<Point>::deserialize(points).map_err(RelayError::Points)?,
        };
        return Ok(if points.is_empty() {
            Dispatch::EmptyScan
        } else {
            Dispatch::Save(points)
        });
    }

    Ok(match msg.get("distance").and_then(Value::as_f64) {
        Some(distance) => Dispatch::Telemetry {
            distance,
            target: msg.get("target_pos").cloned(),
        },
        None => Dispatch::Unhandled,
    })
}

/// Log line for a telemetry frame, `Distance: 1.25 | Target: [..]`.
pub fn telemetry_line(distance: f64, target: Option<&Value>) -> String {
    match target {
        Some(target) => format!("Distance: {:.2} | Target: {}", distance, target),
        None => format!("Distance: {:.2} | Target: none", distance),
    }
}
