use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, LogFormat};

/// Устанавливает глобальный subscriber для `tracing`.
///
/// Возвращает `false`, если subscriber уже был установлен раньше.
pub fn init_tracing(config: &AppConfig) -> bool {
    let filter = EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
    };

    match result {
        Ok(()) => {
            tracing::info!("Logging initialized for {} environment", config.environment);
            true
        }
        Err(_) => false,
    }
}
