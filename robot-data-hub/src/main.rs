use tracing::{debug, info};

use actix_web::{App, HttpServer, web::Data};
use tracing_actix_web::TracingLogger;

use robot_data_hub::app_state::AppState;
use robot_data_hub::routes;
use robot_data_hub::scans::ScanStore;
use robot_data_hub::session::archive::ScanArchive;
use robot_data_hub::settings::Settings;
use robot_data_hub::utils;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::new()?;

    utils::init_tracing(&settings.log_level);

    debug!("{:?}", settings);

    let store = ScanStore::open(&settings.storage.scan_dir)?;
    let app_state = AppState {
        store: store.clone(),
        acknowledge_telemetry: settings.relay.acknowledge_telemetry,
        max_frame_size: settings.relay.max_frame_size,
    };

    let archive_addr = ScanArchive::spawn(store);

    info!("WebSocket server started on {}", settings.server.ws_url());

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(routes::configure)
            .app_data(Data::new(app_state.clone()))
            .app_data(Data::new(archive_addr.clone()))
    })
    .bind(settings.server.bind_addr())?
    .run()
    .await?;

    Ok(())
}
