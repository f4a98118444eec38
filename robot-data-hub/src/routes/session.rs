use actix::Addr;
use actix_web::web::{Data, Payload};
use actix_web::{Error, HttpRequest, HttpResponse, get};
use actix_web_actors::ws;

use crate::app_state::AppState;
use crate::session::archive::ScanArchive;
use crate::session::robot_connection::RobotConnection;

#[get("/")]
pub async fn ws_index(
    req: HttpRequest,
    stream: Payload,
    data: Data<AppState>,
    archive: Data<Addr<ScanArchive>>,
) -> Result<HttpResponse, Error> {
    let ws = RobotConnection::new(archive.get_ref().clone(), data.acknowledge_telemetry);
    ws::WsResponseBuilder::new(ws, &req, stream)
        .frame_size(data.max_frame_size)
        .start()
}
