//! Motor controller adapters and telemetry.
//!
//! The adapters here wrap a vendor driver handle rather than extending it. Each one takes
//! its configuration at construction, applies it to the controller, and binds three
//! telemetry publishers (`velocity`, `position` and `voltage`) under
//! `{parent_table}/{motor_name}`.
//!
//! ```no_run
//! use std::{convert::Infallible, sync::Arc};
//!
//! use froglib_motors::{
//!     FrogTalonFx, MotorOptions, TalonFxConfig, TalonFxDriver, TelemetrySink, TelemetryTable,
//! };
//!
//! struct Falcon;
//!
//! impl TalonFxDriver for Falcon {
//!     type Error = Infallible;
//!
//!     fn apply_config(&mut self, _config: &TalonFxConfig) -> Result<(), Infallible> {
//!         Ok(())
//!     }
//!
//!     fn velocity(&self) -> Result<f64, Infallible> {
//!         Ok(0.0)
//!     }
//!
//!     fn position(&self) -> Result<f64, Infallible> {
//!         Ok(0.0)
//!     }
//!
//!     fn motor_voltage(&self) -> Result<f64, Infallible> {
//!         Ok(0.0)
//!     }
//! }
//!
//! let sink: Arc<dyn TelemetrySink> = Arc::new(TelemetryTable::new());
//! let options = MotorOptions::new(3).with_parent_table("Drive").with_motor_name("FrontLeft");
//! let motor = FrogTalonFx::new(Falcon, TalonFxConfig::default(), &options, &sink)?;
//!
//! // Once per robot loop:
//! motor.log_data()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod options;
mod talon_fx;
mod talon_srx;
mod telemetry;

pub use config::{
    FeedbackConfig, FeedbackSensorSource, GravityType, MAX_CAN_ID, SlotGains, TalonFxConfig,
    TalonSrxConfig,
};
pub use error::{ConfigError, MotorError};
pub use options::{DEFAULT_PARENT_TABLE, MotorOptions};
pub use talon_fx::{FrogTalonFx, TalonFxDriver};
pub use talon_srx::{FrogTalonSrx, StatusFrame, TalonSrxDriver};
pub use telemetry::{MotorTelemetry, NullSink, Publisher, TelemetrySink, TelemetryTable};
