use vision::settings::Settings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let settings = Settings::new()?;
    let stage = settings.canny;

    vision::edges::run(
        &stage.input,
        &stage.output,
        stage.low_threshold,
        stage.high_threshold,
    )?;
    Ok(())
}
