use tracing::Level;
use tracing_subscriber::{
    filter::FilterFn, fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Log this workspace's events to stderr so stdout only carries the report.
pub fn setup_logging(verbose: bool) {
    let max_level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = FilterFn::new(move |meta| {
        meta.module_path().unwrap_or_default().starts_with("bikealert") && *meta.level() <= max_level
    });
    let layer = tracing_subscriber::fmt::layer()
        .event_format(Format::default().without_time())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();
}
