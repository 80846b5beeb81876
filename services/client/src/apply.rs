use crate::cli::ApplyArgs;
use quickflow::client::HttpScoringClient;
use quickflow::config::{AppConfig, BackendConfig};
use quickflow::error::AppError;
use quickflow::report::Palette;
use quickflow::session::FormSession;
use quickflow::telemetry;
use std::io::{self, IsTerminal};
use tracing::info;

pub(crate) async fn run(mut args: ApplyArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(url) = args.backend_url.take() {
        config.backend = BackendConfig::parse(&url)?;
    }

    telemetry::init(&config.telemetry)?;

    let stdout = io::stdout();
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
    let color = !args.no_color && config.display.color.enabled(stdout.is_terminal(), no_color);

    let backend = HttpScoringClient::from_config(&config.backend);
    info!(
        ?config.environment,
        endpoint = backend.endpoint(),
        "loan application client ready"
    );

    let mut session = FormSession::new(
        &backend,
        io::stdin().lock(),
        stdout.lock(),
        Palette::new(color),
    );
    session.run().await?;
    Ok(())
}
