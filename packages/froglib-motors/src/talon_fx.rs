use std::sync::Arc;

use crate::{MotorError, MotorOptions, MotorTelemetry, TalonFxConfig, TelemetrySink};

/// The subset of a TalonFX driver that froglib needs.
///
/// Implement this over the vendor SDK's device handle. Signals are in rotations,
/// rotations per second and volts.
pub trait TalonFxDriver {
    /// Error type returned when the controller cannot be reached or rejects a request.
    type Error;

    /// Writes `config` to the controller.
    fn apply_config(&mut self, config: &TalonFxConfig) -> Result<(), Self::Error>;

    /// Rotor velocity in rotations per second.
    fn velocity(&self) -> Result<f64, Self::Error>;

    /// Rotor position in rotations.
    fn position(&self) -> Result<f64, Self::Error>;

    /// Voltage applied to the motor.
    fn motor_voltage(&self) -> Result<f64, Self::Error>;
}

/// A TalonFX that is configured on construction and publishes its own telemetry.
#[derive(Debug)]
pub struct FrogTalonFx<D> {
    driver: D,
    id: i32,
    config: TalonFxConfig,
    telemetry: MotorTelemetry,
}

impl<D: TalonFxDriver> FrogTalonFx<D> {
    /// Telemetry name prefix for motors without an explicit name.
    pub const KIND: &'static str = "TalonFX";

    /// Applies `config` to `driver` and wires up telemetry publishers.
    ///
    /// Publishers are created under `{parent_table}/{motor_name}`, where the name defaults
    /// to `TalonFX({id})`.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::Config`] if `config` fails validation, or
    /// [`MotorError::Driver`] if the controller rejects it.
    pub fn new(
        mut driver: D,
        config: TalonFxConfig,
        options: &MotorOptions,
        sink: &Arc<dyn TelemetrySink>,
    ) -> Result<Self, MotorError<D::Error>> {
        config.validate()?;
        driver.apply_config(&config).map_err(MotorError::Driver)?;
        log::debug!("applied configuration to TalonFX({}): {config:?}", options.id);

        let name = options.resolved_name(Self::KIND);
        let telemetry = MotorTelemetry::new(sink, &options.parent_table, &name);
        log::info!("TalonFX({}) publishing to {}", options.id, telemetry.table());

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
    pub const fn config(&self) -> &TalonFxConfig {
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

    /// Voltage currently applied to the motor.
    ///
    /// # Errors
    ///
    /// Returns the driver's error if the signal cannot be read.
    pub fn motor_voltage(&self) -> Result<f64, D::Error> {
        self.driver.motor_voltage()
    }

    /// Reads rotor velocity and publishes it.
    ///
    /// Only velocity is sampled. The position and voltage publishers exist under the
    /// motor's table but are left for callers to feed through [`Self::telemetry`].
    ///
    /// # Errors
    ///
    /// Returns the driver's error if velocity cannot be read.
    pub fn log_data(&self) -> Result<(), D::Error> {
        let velocity = self.driver.velocity()?;
        self.telemetry.velocity().set(velocity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ConfigError, FeedbackConfig, FeedbackSensorSource, SlotGains, TelemetryTable,
    };

    #[derive(Debug, PartialEq, Eq, thiserror::Error)]
    #[error("device not responding")]
    struct NotResponding;

    #[derive(Debug, Default)]
    struct MockFx {
        applied: Option<TalonFxConfig>,
        velocity: f64,
        position: f64,
        voltage: f64,
        offline: bool,
    }

    impl TalonFxDriver for MockFx {
        type Error = NotResponding;

        fn apply_config(&mut self, config: &TalonFxConfig) -> Result<(), NotResponding> {
            if self.offline {
                return Err(NotResponding);
            }
            self.applied = Some(*config);
            Ok(())
        }

        fn velocity(&self) -> Result<f64, NotResponding> {
            if self.offline { Err(NotResponding) } else { Ok(self.velocity) }
        }

        fn position(&self) -> Result<f64, NotResponding> {
            Ok(self.position)
        }

        fn motor_voltage(&self) -> Result<f64, NotResponding> {
            Ok(self.voltage)
        }
    }

    fn table() -> (Arc<TelemetryTable>, Arc<dyn TelemetrySink>) {
        let table = Arc::new(TelemetryTable::new());
        let sink: Arc<dyn TelemetrySink> = table.clone();
        (table, sink)
    }

    #[test]
    fn applies_config_on_construction() {
        let (_, sink) = table();
        let config = TalonFxConfig::new(
            FeedbackConfig::new(21, FeedbackSensorSource::FusedCanCoder),
            SlotGains::pid(0.3, 0.0, 0.0),
            SlotGains::ZERO,
        );

        let motor = FrogTalonFx::new(MockFx::default(), config, &MotorOptions::new(4), &sink)
            .unwrap();

        assert_eq!(motor.driver().applied, Some(config));
        assert_eq!(motor.config(), &config);
        assert_eq!(motor.id(), 4);
    }

    #[test]
    fn default_table_name() {
        let (_, sink) = table();
        let motor = FrogTalonFx::new(
            MockFx::default(),
            TalonFxConfig::default(),
            &MotorOptions::new(7),
            &sink,
        )
        .unwrap();
        assert_eq!(motor.telemetry_table(), "Undefined/TalonFX(7)");
    }

    #[test]
    fn log_data_publishes_velocity_only() {
        let (table, sink) = table();
        let driver = MockFx {
            velocity: 80.0,
            position: 12.5,
            voltage: 11.2,
            ..MockFx::default()
        };
        let options = MotorOptions::new(1)
            .with_parent_table("Shooter")
            .with_motor_name("Flywheel");
        let motor = FrogTalonFx::new(driver, TalonFxConfig::default(), &options, &sink).unwrap();

        motor.log_data().unwrap();

        assert_eq!(table.topics(), vec!["Shooter/Flywheel/velocity".to_owned()]);
        assert_eq!(table.get("Shooter/Flywheel/velocity"), Some(80.0));
        assert_eq!(table.get("Shooter/Flywheel/position"), None);
        assert_eq!(motor.motor_voltage(), Ok(11.2));
    }

    #[test]
    fn all_three_publishers_are_wired() {
        let (table, sink) = table();
        let motor = FrogTalonFx::new(
            MockFx::default(),
            TalonFxConfig::default(),
            &MotorOptions::new(5).with_parent_table("Arm"),
            &sink,
        )
        .unwrap();

        let telemetry = motor.telemetry();
        assert_eq!(telemetry.velocity().topic(), "Arm/TalonFX(5)/velocity");
        assert_eq!(telemetry.position().topic(), "Arm/TalonFX(5)/position");
        assert_eq!(telemetry.voltage().topic(), "Arm/TalonFX(5)/voltage");

        telemetry.voltage().set(motor.motor_voltage().unwrap());
        assert_eq!(table.get("Arm/TalonFX(5)/voltage"), Some(0.0));
    }

    #[test]
    fn failed_read_publishes_nothing() {
        let (table, sink) = table();
        let mut motor = FrogTalonFx::new(
            MockFx::default(),
            TalonFxConfig::default(),
            &MotorOptions::new(2),
            &sink,
        )
        .unwrap();
        motor.driver_mut().offline = true;

        assert_eq!(motor.log_data(), Err(NotResponding));
        assert!(table.topics().is_empty());
    }

    #[test]
    fn driver_rejection_is_reported() {
        let (_, sink) = table();
        let driver = MockFx {
            offline: true,
            ..MockFx::default()
        };
        let err = FrogTalonFx::new(driver, TalonFxConfig::default(), &MotorOptions::new(3), &sink)
            .unwrap_err();
        assert!(matches!(err, MotorError::Driver(NotResponding)));
    }

    #[test]
    fn invalid_config_never_reaches_driver() {
        let (_, sink) = table();
        let config = TalonFxConfig {
            feedback: FeedbackConfig::new(-1, FeedbackSensorSource::RemoteCanCoder),
            ..TalonFxConfig::default()
        };
        let err = FrogTalonFx::new(MockFx::default(), config, &MotorOptions::new(3), &sink)
            .unwrap_err();
        assert!(matches!(
            err,
            MotorError::Config(ConfigError::InvalidValue { .. })
        ));
    }
}
