//! Browser console logging for `tracing` events
//!
//! The projector core logs through `tracing`. In the browser there is no
//! stdout, so a small layer forwards each event to `console.log`,
//! `console.warn` or `console.error` by level.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Layer writing events to the browser console
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldCollector::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let line = format_line(
            *metadata.level(),
            metadata.target(),
            &visitor.message,
            &visitor.fields,
        );

        let line = wasm_bindgen::JsValue::from(line);
        match *metadata.level() {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }
}

#[derive(Default)]
struct FieldCollector {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push((field.name().to_string(), format!("{value:?}")));
        }
    }
}

/// Render one console line: `LEVEL target: message key=value ...`
#[must_use]
pub fn format_line(level: Level, target: &str, message: &str, fields: &[(String, String)]) -> String {
    fields
        .iter()
        .fold(format!("{level} {target}: {message}"), |mut line, (key, value)| {
            line.push_str(&format!(" {key}={value}"));
            line
        })
}

/// Default level: debug in debug builds, info in release
#[must_use]
pub const fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Install the console layer as the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init(level: LevelFilter) {
    let installed = tracing_subscriber::registry()
        .with(level)
        .with(ConsoleLayer)
        .try_init();

    if installed.is_err() {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_without_fields() {
        let line = format_line(Level::INFO, "projector_core::widget", "revenue projector ready", &[]);
        assert_eq!(line, "INFO projector_core::widget: revenue projector ready");
    }

    #[test]
    fn test_format_line_with_fields() {
        let fields = vec![
            ("scheduled".to_string(), "6".to_string()),
            ("missing".to_string(), "0".to_string()),
        ];
        let line = format_line(Level::DEBUG, "calc", "recomputed", &fields);
        assert_eq!(line, "DEBUG calc: recomputed scheduled=6 missing=0");
    }

    #[test]
    fn test_default_level_is_at_least_info() {
        assert!(default_level() >= LevelFilter::INFO);
    }
}
