//! Write-only telemetry.
//!
//! Motor adapters publish numeric samples to a [`TelemetrySink`] under slash separated
//! topics such as `Drive/FrontLeft/velocity`. Publishing is best-effort; a sink may drop
//! samples, and nothing reads them back through this interface.

use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, Mutex},
};

/// A key-value table that accepts named numeric samples.
pub trait TelemetrySink: Send + Sync {
    /// Publishes `value` under `topic`, replacing any previous value.
    fn publish(&self, topic: &str, value: f64);
}

/// A sink that discards every sample.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn publish(&self, _topic: &str, _value: f64) {}
}

/// An in-process telemetry table holding the latest value of each topic.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use froglib_motors::{Publisher, TelemetryTable};
///
/// let table = Arc::new(TelemetryTable::new());
/// let publisher = Publisher::new(table.clone(), "Shooter/TalonFX(7)/velocity");
///
/// publisher.set(42.0);
/// assert_eq!(table.get("Shooter/TalonFX(7)/velocity"), Some(42.0));
/// ```
#[derive(Debug, Default)]
pub struct TelemetryTable {
    entries: Mutex<BTreeMap<String, f64>>,
}

impl TelemetryTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    /// Returns the latest value published under `topic`.
    #[must_use]
    pub fn get(&self, topic: &str) -> Option<f64> {
        self.entries.lock().ok()?.get(topic).copied()
    }

    /// Returns every topic published so far, in sorted order.
    #[must_use]
    pub fn topics(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl TelemetrySink for TelemetryTable {
    fn publish(&self, topic: &str, value: f64) {
        match self.entries.lock() {
            Ok(mut entries) => {
                entries.insert(topic.to_owned(), value);
            }
            Err(_) => log::warn!("telemetry table poisoned, dropped {topic} = {value}"),
        }
    }
}

/// A handle bound to one topic of a shared sink.
#[derive(Clone)]
pub struct Publisher {
    topic: String,
    sink: Arc<dyn TelemetrySink>,
}

impl Publisher {
    /// Binds a publisher to `topic` on `sink`.
    pub fn new(sink: Arc<dyn TelemetrySink>, topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            sink,
        }
    }

    /// The topic this publisher writes to.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Publishes a new value.
    pub fn set(&self, value: f64) {
        log::trace!("{} = {value}", self.topic);
        self.sink.publish(&self.topic, value);
    }
}

impl fmt::Debug for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("topic", &self.topic)
            .finish_non_exhaustive()
    }
}

/// The velocity, position and voltage publishers for one motor.
#[derive(Debug, Clone)]
pub struct MotorTelemetry {
    table: String,
    velocity: Publisher,
    position: Publisher,
    voltage: Publisher,
}

impl MotorTelemetry {
    /// Creates publishers under `{parent_table}/{motor_name}`.
    pub fn new(sink: &Arc<dyn TelemetrySink>, parent_table: &str, motor_name: &str) -> Self {
        let table = format!("{parent_table}/{motor_name}");

        Self {
            velocity: Publisher::new(Arc::clone(sink), format!("{table}/velocity")),
            position: Publisher::new(Arc::clone(sink), format!("{table}/position")),
            voltage: Publisher::new(Arc::clone(sink), format!("{table}/voltage")),
            table,
        }
    }

    /// The table prefix every topic of this motor lives under.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Publisher for rotor velocity.
    #[must_use]
    pub const fn velocity(&self) -> &Publisher {
        &self.velocity
    }

    /// Publisher for rotor position.
    #[must_use]
    pub const fn position(&self) -> &Publisher {
        &self.position
    }

    /// Publisher for applied motor voltage.
    #[must_use]
    pub const fn voltage(&self) -> &Publisher {
        &self.voltage
    }
}
