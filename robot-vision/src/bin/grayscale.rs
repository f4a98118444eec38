use vision::settings::Settings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let settings = Settings::new()?;
    let stage = settings.grayscale;

    vision::grayscale::run(&stage.input, &stage.output)?;
    Ok(())
}
