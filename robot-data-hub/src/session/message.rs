use actix::Message;

use crate::message::Point;
use crate::scans::{SavedScan, ScanError};

#[derive(Message)]
#[rtype(result = "Result<SavedScan, ScanError>")]
pub struct SaveScan {
    pub points: Vec<Point>,
}
