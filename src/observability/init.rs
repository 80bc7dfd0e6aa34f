//! Subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name attached to every exported span.
pub const SERVICE_NAME: &str = "RoleTagger";

/// File name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "role-tagger-otlp.json";

/// Installs the global `tracing` subscriber.
///
/// Spans pass an [`EnvFilter`] built from `config.trace_level` (default
/// `info`) and are exported to `role-tagger-otlp.json` in the plugin data
/// directory. Does nothing if the directory cannot be created. Only the first
/// call in a process takes effect.
///
/// # Example
///
/// ```no_run
/// use role_tagger::observability::init_tracing;
/// use role_tagger::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// };
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let directive = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        .try_init();
}
