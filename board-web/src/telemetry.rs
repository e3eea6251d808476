//! Tracing bootstrap for the browser.
//!
//! Events are flattened to a single line and handed to a sink; in the
//! browser the sink is the devtools console.

use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use wasm_bindgen::JsValue;

use crate::config::FrontendConfig;

/// Install the console subscriber. Safe to call more than once.
pub fn init(config: &FrontendConfig) {
    let installed = tracing_subscriber::registry()
        .with(LevelFilter::from_level(config.log_level))
        .with(ConsoleLayer::new(write_console))
        .try_init();
    if installed.is_err() {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
}

fn write_console(level: &Level, line: &str) {
    let line = JsValue::from_str(line);
    match *level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        _ => web_sys::console::debug_1(&line),
    }
}

/// Layer that formats each event as `LEVEL target: message key=value ...`.
pub struct ConsoleLayer<W> {
    write: W,
}

impl<W> ConsoleLayer<W>
where
    W: Fn(&Level, &str) + Send + Sync + 'static,
{
    pub fn new(write: W) -> Self {
        Self { write }
    }
}

impl<W> fmt::Debug for ConsoleLayer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLayer").finish_non_exhaustive()
    }
}

impl<S, W> Layer<S> for ConsoleLayer<W>
where
    S: Subscriber,
    W: Fn(&Level, &str) + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let line = format!(
            "{} {}: {}",
            metadata.level(),
            metadata.target(),
            visitor.finish()
        );
        (self.write)(metadata.level(), &line);
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.trim_start().to_string()
        } else {
            format!("{}{}", self.message, self.fields)
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn capture<F: FnOnce()>(max: Level, emit: F) -> Vec<(Level, String)> {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::from_level(max))
            .with(ConsoleLayer::new(move |level: &Level, line: &str| {
                sink.lock().unwrap().push((*level, line.to_string()));
            }));

        tracing::subscriber::with_default(subscriber, emit);

        let captured = lines.lock().unwrap().clone();
        captured
    }

    #[test]
    fn test_message_and_fields_on_one_line() {
        let lines = capture(Level::INFO, || {
            tracing::info!(email = "a@b.com", attempts = 2, "signed in");
        });

        assert_eq!(lines.len(), 1);
        let (level, line) = &lines[0];
        assert_eq!(*level, Level::INFO);
        assert!(line.starts_with("INFO "));
        assert!(line.ends_with("signed in email=a@b.com attempts=2"));
    }

    #[test]
    fn test_display_fields_are_not_quoted() {
        let lines = capture(Level::DEBUG, || {
            tracing::debug!(route = %"/posts", "navigation allowed");
        });

        assert_eq!(lines.len(), 1);
        assert!(lines[0].1.ends_with("navigation allowed route=/posts"));
    }

    #[test]
    fn test_events_above_max_level_are_dropped() {
        let lines = capture(Level::WARN, || {
            tracing::info!("quiet");
            tracing::warn!("loud");
        });

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::WARN);
        assert!(lines[0].1.ends_with("loud"));
    }

    #[test]
    fn test_fields_without_message() {
        let lines = capture(Level::INFO, || {
            tracing::info!(key = "token");
        });

        assert!(lines[0].1.ends_with(": key=token"));
    }
}
