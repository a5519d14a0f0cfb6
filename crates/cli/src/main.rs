use packforge_cli::{config::DemoConfig, demo, render};

fn main() -> anyhow::Result<()> {
    packforge_observability::init();

    let config = DemoConfig::from_env();
    tracing::info!(tariff = %config.tariff, output = ?config.output, "running demo");

    let report = demo::run(&config)?;
    print!("{}", render::render(&report, config.output)?);
    Ok(())
}
