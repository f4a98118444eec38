pub mod scan;
pub mod session;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/scans")
            .service(scan::list)
            .service(scan::download),
    )
    .service(session::ws_index);
}
