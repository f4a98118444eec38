use tracing::debug;

use actix_files::NamedFile;
use actix_web::web::{Data, Path};
use actix_web::{Error, HttpResponse, Responder, get};

use crate::app_state::AppState;

#[get("")]
pub async fn list(data: Data<AppState>) -> Result<impl Responder, Error> {
    let scans = data
        .store
        .list()
        .map_err(|e| crate::utils::to_internal_error("Scan listing", e))?;

    Ok(HttpResponse::Ok().json(scans))
}

#[get("/{file}")]
pub async fn download(data: Data<AppState>, file: Path<String>) -> Result<NamedFile, Error> {
    debug!("Downloading scan {}", file);

    let path = data
        .store
        .resolve(&file)
        .ok_or_else(|| actix_web::error::ErrorNotFound(format!("No scan named {}", file)))?;

    Ok(NamedFile::open_async(path).await?)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    use crate::message::Point;
    use crate::scans::{ScanEntry, ScanStore};

    use super::*;

    fn state(store: ScanStore) -> Data<AppState> {
        Data::new(AppState {
            store,
            acknowledge_telemetry: false,
            max_frame_size: crate::settings::MAX_FRAME_SIZE,
        })
    }

    #[actix_web::test]
    async fn lists_saved_scans() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ScanStore::open(tmp.path()).unwrap();
        let saved = store.save(&[Point { x: 1.0, y: 1.0, z: 1.0 }]).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(state(store))
                .configure(crate::routes::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/scans").to_request();
        let body: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["file"], saved.file.as_str());
    }

    #[actix_web::test]
    async fn downloads_scan_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ScanStore::open(tmp.path()).unwrap();
        let saved = store.save(&[Point { x: 0.5, y: 0.25, z: 2.0 }]).unwrap();
        let expected = std::fs::read(&saved.path).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(state(store))
                .configure(crate::routes::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/scans/{}", saved.file))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body.as_ref(), expected.as_slice());
        assert!(String::from_utf8_lossy(&body).contains("0.5000,0.2500,2.0000"));
    }

    #[actix_web::test]
    async fn unknown_scan_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ScanStore::open(tmp.path()).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(state(store.clone()))
                .configure(crate::routes::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/scans/missing.txt").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        assert_eq!(store.list().unwrap(), Vec::<ScanEntry>::new());
    }
}
