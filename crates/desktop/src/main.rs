//! Terminal point-of-sale entry point.

use anyhow::Context;

use maloka_desktop::{AppState, DesktopConfig, Shell};

fn main() -> anyhow::Result<()> {
    let config = DesktopConfig::from_env().context("invalid configuration")?;
    maloka_observability::init(config.log_format);

    tracing::info!(
        products = %config.products_path.display(),
        sales = %config.sales_path.display(),
        "starting point of sale"
    );

    let mut state = AppState::open(&config).with_context(|| {
        format!(
            "failed to load stores from {} and {}",
            config.products_path.display(),
            config.sales_path.display()
        )
    })?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(stdin.lock(), stdout.lock())
        .run(&mut state)
        .context("terminal IO failed")?;

    tracing::info!("point of sale closed");
    Ok(())
}
