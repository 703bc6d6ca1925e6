use std::sync::Arc;

use crate::{MotorError, MotorOptions, MotorTelemetry, TalonSrxConfig, TelemetrySink};

/// Periodic status frames a TalonSRX broadcasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFrame {
    /// Applied output, faults and limit switch state.
    General,
    /// Selected sensor position and velocity.
    Feedback0,
}

/// The subset of a TalonSRX driver that froglib needs.
///
/// Signals are in the controller's native sensor units and volts.
pub trait TalonSrxDriver {
    /// Error type returned when the controller cannot be reached or rejects a request.
    type Error;

    /// Writes every setting in `config` to the controller.
    fn config_all_settings(&mut self, config: &TalonSrxConfig) -> Result<(), Self::Error>;

    /// Sets how often `frame` is broadcast.
    fn set_status_frame_period(
        &mut self,
        frame: StatusFrame,
        period_ms: u16,
    ) -> Result<(), Self::Error>;

    /// Selected sensor velocity.
    fn velocity(&self) -> Result<f64, Self::Error>;

    /// Selected sensor position.
    fn position(&self) -> Result<f64, Self::Error>;

    /// Voltage applied to the motor output.
    fn motor_output_voltage(&self) -> Result<f64, Self::Error>;
}

/// A TalonSRX that is configured on construction and publishes its own telemetry.
#[derive(Debug)]
pub struct FrogTalonSrx<D> {
    driver: D,
    id: i32,
    config: TalonSrxConfig,
    telemetry: MotorTelemetry,
}

impl<D: TalonSrxDriver> FrogTalonSrx<D> {
    /// Telemetry name prefix for motors without an explicit name.
    pub const KIND: &'static str = "TalonSRX";

    /// Applies `config` to `driver`, sets its status frame periods and wires up telemetry
    /// publishers.
    ///
    /// Publishers are created under `{parent_table}/{motor_name}`, where the name defaults
    /// to `TalonSRX({id})`.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::Config`] if `config` fails validation, or
    /// [`MotorError::Driver`] if the controller rejects a setting.
    pub fn new(
        mut driver: D,
        config: TalonSrxConfig,
        options: &MotorOptions,
        sink: &Arc<dyn TelemetrySink>,
    ) -> Result<Self, MotorError<D::Error>> {
        config.validate()?;
        driver
            .config_all_settings(&config)
            .map_err(MotorError::Driver)?;
        driver
            .set_status_frame_period(StatusFrame::General, config.general_status_period_ms)
            .map_err(MotorError::Driver)?;
        if let Some(period) = config.feedback_status_period_ms {
            driver
                .set_status_frame_period(StatusFrame::Feedback0, period)
                .map_err(MotorError::Driver)?;
        }
        log::debug!("applied configuration to TalonSRX({}): {config:?}", options.id);

        let name = options.resolved_name(Self::KIND);
        let telemetry = MotorTelemetry::new(sink, &options.parent_table, &name);
        log::info!("TalonSRX({}) publishing to {}", options.id, telemetry.table());

        Ok(Self {
            driver,
            id: options.id,
            config,
            telemetry,
        })
    }

    /// CAN id of the controller.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// The configuration applied at construction.
    #[must_use]
    pub const fn config(&self) -> &TalonSrxConfig {
        &self.config
    }

    /// Telemetry table this motor publishes under.
    #[must_use]
    pub fn telemetry_table(&self) -> &str {
        self.telemetry.table()
    }

    /// Publishers for this motor's signals.
    #[must_use]
    pub const fn telemetry(&self) -> &MotorTelemetry {
        &self.telemetry
    }

    /// The wrapped driver, for commands froglib does not cover.
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable access to the wrapped driver.
    pub const fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Voltage currently applied to the motor output.
    ///
    /// # Errors
    ///
    /// Returns the driver's error if the signal cannot be read.
    pub fn motor_voltage(&self) -> Result<f64, D::Error> {
        self.driver.motor_output_voltage()
    }

    /// Periodic telemetry hook. The SRX samples nothing here; its publishers are fed
    /// through [`Self::telemetry`].
    pub const fn log_data(&self) {}
}
