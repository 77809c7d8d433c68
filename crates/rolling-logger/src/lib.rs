//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent records in a fixed-size
//! circular buffer and optionally forwards each one to a sink (browser
//! console, stderr, ...). The buffer can be inspected at runtime, which makes
//! silently-handled failures observable.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// A single captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Shared handle to the circular buffer
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Push an entry, evicting the oldest one when full
    pub fn push(&self, entry: LogEntry) {
        let mut entries = self.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Snapshot of buffered entries, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    /// Entries at `level` or more severe
    pub fn entries_at_least(&self, level: Level) -> Vec<LogEntry> {
        self.lock()
            .iter()
            .filter(|e| e.level <= level)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        // A panic while holding the lock leaves the deque intact
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

type Sink = Arc<dyn Fn(&LogEntry) + Send + Sync>;

/// Layer that feeds a [`LogBuffer`]
#[derive(Clone)]
pub struct RollingLayer {
    buffer: LogBuffer,
    max_level: Level,
    sink: Option<Sink>,
}

impl RollingLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            max_level: Level::DEBUG,
            sink: None,
        }
    }

    /// Drop events more verbose than `level`
    pub fn with_max_level(mut self, level: Level) -> Self {
        self.max_level = level;
        self
    }

    /// Forward every recorded entry to `sink`
    pub fn with_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&LogEntry) + Send + Sync + 'static,
    {
        self.sink = Some(Arc::new(sink));
        self
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() > self.max_level {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            timestamp: Utc::now(),
            level: *meta.level(),
            target: meta.target().to_string(),
            message: visitor.finish(),
        };

        if let Some(sink) = &self.sink {
            sink(&entry);
        }
        self.buffer.push(entry);
    }
}

/// Collects the `message` field plus any extra `key=value` fields
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields
        } else {
            format!("{} {}", self.message, self.fields)
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", name, value);
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}

/// Logger settings
#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    pub capacity: usize,
    pub max_level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: 500,
            max_level: Level::DEBUG,
        }
    }
}

/// Install a rolling layer as the global default subscriber
///
/// Returns the buffer handle so callers can inspect recent records.
pub fn init<F>(config: LoggerConfig, sink: F) -> Result<LogBuffer, String>
where
    F: Fn(&LogEntry) + Send + Sync + 'static,
{
    let buffer = LogBuffer::new(config.capacity);
    let layer = RollingLayer::new(buffer.clone())
        .with_max_level(config.max_level)
        .with_sink(sink);
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("Failed to install logger: {}", e))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_subscriber::registry;

    fn capture<F: FnOnce()>(layer: RollingLayer, f: F) {
        let subscriber = registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
    }

    #[test]
    fn test_records_message_and_fields() {
        let buffer = LogBuffer::new(8);
        capture(RollingLayer::new(buffer.clone()), || {
            tracing::warn!(key = "aiw:theme", "[PREFS] write failed");
        });

        let entries = buffer.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::WARN);
        assert_eq!(entries[0].message, "[PREFS] write failed key=aiw:theme");
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let buffer = LogBuffer::new(3);
        capture(RollingLayer::new(buffer.clone()), || {
            for i in 0..5 {
                tracing::info!("event {}", i);
            }
        });

        let messages: Vec<String> = buffer.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["event 2", "event 3", "event 4"]);
    }

    #[test]
    fn test_max_level_filters_verbose_events() {
        let buffer = LogBuffer::new(8);
        let layer = RollingLayer::new(buffer.clone()).with_max_level(Level::INFO);
        capture(layer, || {
            tracing::debug!("hidden");
            tracing::info!("shown");
            tracing::error!("also shown");
        });

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.entries_at_least(Level::WARN).len(), 1);
    }

    #[test]
    fn test_sink_receives_every_entry() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let buffer = LogBuffer::new(2);
        let layer = RollingLayer::new(buffer.clone()).with_sink(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        capture(layer, || {
            tracing::info!("a");
            tracing::info!("b");
            tracing::info!("c");
        });

        assert_eq!(seen.load(Ordering::SeqCst), 3);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let buffer = LogBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
