use tracing::info;
use vision::settings::Settings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let settings = Settings::new()?;
    let stage = settings.contours;

    let found = vision::contours::run(&stage.input, &stage.output, stage.thickness)?;
    if found == 0 {
        info!("No contours in {}", stage.input.display());
    }
    Ok(())
}
