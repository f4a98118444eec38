use uuid::Uuid;
use actix::{Actor, ActorContext, ActorFutureExt, Addr, ContextFutureSpawner, StreamHandler, WrapFuture, fut};
use tracing::{debug, error, info, warn};

use actix_web_actors::ws;

use super::archive::ScanArchive;
use super::message::SaveScan;
use crate::message::Ack;
use crate::relay::{self, Dispatch};

pub struct RobotConnection {
    pub client: Uuid,
    pub archive: Addr<ScanArchive>,
    pub acknowledge_telemetry: bool,
}

impl RobotConnection {
    pub fn new(archive: Addr<ScanArchive>, acknowledge_telemetry: bool) -> Self {
        Self {
            client: Uuid::new_v4(),
            archive,
            acknowledge_telemetry,
        }
    }

    fn send_ack(&self, ack: &Ack, ctx: &mut ws::WebsocketContext<Self>) {
        match serde_json::to_string(ack) {
            Ok(json) => ctx.text(json),
            Err(e) => error!("Failed to serialize ack for {}: {}", self.client, e),
        }
    }

    fn on_text(&mut self, text: &str, ctx: &mut ws::WebsocketContext<Self>) {
        let dispatch = match relay::dispatch(text) {
            Ok(dispatch) => dispatch,
            Err(e) => {
                warn!("Dropping frame from {}: {}", self.client, e);
                return;
            }
        };

        match dispatch {
            Dispatch::Save(points) => {
                debug!("Received {} points from {}", points.len(), self.client);
                // `wait` parks the mailbox so the next frame is read only
                // after this one has been acknowledged.
                self.archive
                    .send(SaveScan { points })
                    .into_actor(self)
                    .then(|res, act, ctx| {
                        let ack = match res {
                            Ok(Ok(saved)) => Ack::saved(saved.points, saved.file),
                            Ok(Err(e)) => Ack::error(e.to_string()),
                            Err(e) => {
                                error!("Scan archive unavailable: {}", e);
                                Ack::error("scan archive unavailable")
                            }
                        };
                        act.send_ack(&ack, ctx);
                        fut::ready(())
                    })
                    .wait(ctx);
            }
            Dispatch::EmptyScan => {
                warn!("No points received from {}, skipping save", self.client);
            }
            Dispatch::Telemetry { distance, target } => {
                info!("{}", relay::telemetry_line(distance, target.as_ref()));
                if self.acknowledge_telemetry {
                    self.send_ack(&Ack::log_received(), ctx);
                }
            }
            Dispatch::Unhandled => {
                debug!("Ignoring frame from {}: {}", self.client, text);
            }
        }
    }
}

impl Actor for RobotConnection {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("Robot connected: {}", self.client);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!("Robot disconnected: {}", self.client);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for RobotConnection {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Text(text)) => self.on_text(&text, ctx),
            Ok(ws::Message::Binary(bin)) => {
                debug!("Ignoring {} byte binary frame from {}", bin.len(), self.client);
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(_) => (),
            Err(e) => {
                warn!("Protocol error from {}: {}", self.client, e);
                ctx.stop();
            }
        }
    }
}
