//! Motor controller configuration.
//!
//! These mirror the vendor configuration objects closely enough to be passed straight
//! through to a driver, but can be written by hand or loaded from TOML:
//!
//! ```toml
//! [feedback]
//! remote_sensor_id = 21
//! sensor_source = "fused_can_coder"
//!
//! [slot0]
//! k_p = 0.3
//! k_v = 0.12
//! ```

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Highest device id allowed on the CAN bus.
pub const MAX_CAN_ID: i32 = 62;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_general_status_period_ms() -> u16 {
    250
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

/// Where a controller reads its position and velocity feedback from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackSensorSource {
    /// The motor's integrated rotor encoder.
    #[default]
    RotorSensor,
    /// A remote CANcoder, read over the bus.
    RemoteCanCoder,
    /// A CANcoder fused with the rotor encoder.
    FusedCanCoder,
    /// A CANcoder synchronized with the rotor encoder.
    SyncCanCoder,
}

impl FeedbackSensorSource {
    /// Whether this source reads a separate device on the bus.
    #[must_use]
    pub const fn is_remote(self) -> bool {
        !matches!(self, Self::RotorSensor)
    }
}

/// Feedback sensor selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// CAN id of the remote sensor. Ignored for [`FeedbackSensorSource::RotorSensor`].
    pub remote_sensor_id: i32,
    /// Sensor to take feedback from.
    pub sensor_source: FeedbackSensorSource,
}

impl FeedbackConfig {
    /// Creates a feedback configuration reading `sensor_source` at `remote_sensor_id`.
    #[must_use]
    pub const fn new(remote_sensor_id: i32, sensor_source: FeedbackSensorSource) -> Self {
        Self {
            remote_sensor_id,
            sensor_source,
        }
    }
}

// ---------------------------------------------------------------------------
// Slot gains
// ---------------------------------------------------------------------------

/// How the gravity feedforward term is applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityType {
    /// Constant gravity term, as for an elevator.
    #[default]
    ElevatorStatic,
    /// Gravity term scaled by the cosine of the mechanism angle, as for an arm.
    ArmCosine,
}

/// Closed-loop gains for one controller slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotGains {
    /// Proportional gain.
    pub k_p: f64,
    /// Integral gain.
    pub k_i: f64,
    /// Derivative gain.
    pub k_d: f64,
    /// Static friction feedforward, in volts.
    pub k_s: f64,
    /// Velocity feedforward, in volts per rotation per second.
    pub k_v: f64,
    /// Acceleration feedforward, in volts per rotation per second squared.
    pub k_a: f64,
    /// Gravity feedforward, in volts.
    pub k_g: f64,
    /// How `k_g` is applied.
    pub gravity_type: GravityType,
}

impl SlotGains {
    /// Gains of all zero, which leaves the slot inert.
    pub const ZERO: Self = Self {
        k_p: 0.0,
        k_i: 0.0,
        k_d: 0.0,
        k_s: 0.0,
        k_v: 0.0,
        k_a: 0.0,
        k_g: 0.0,
        gravity_type: GravityType::ElevatorStatic,
    };

    /// Creates slot gains with only the PID terms set.
    #[must_use]
    pub const fn pid(k_p: f64, k_i: f64, k_d: f64) -> Self {
        Self {
            k_p,
            k_i,
            k_d,
            ..Self::ZERO
        }
    }

    /// Sets the static, velocity and acceleration feedforward terms.
    #[must_use]
    pub const fn with_feedforward(mut self, k_s: f64, k_v: f64, k_a: f64) -> Self {
        self.k_s = k_s;
        self.k_v = k_v;
        self.k_a = k_a;
        self
    }

    /// Sets the gravity feedforward term and how it is applied.
    #[must_use]
    pub const fn with_gravity(mut self, k_g: f64, gravity_type: GravityType) -> Self {
        self.k_g = k_g;
        self.gravity_type = gravity_type;
        self
    }

    fn validate(&self, slot: &str) -> Result<(), ConfigError> {
        let terms = [
            ("k_p", self.k_p),
            ("k_i", self.k_i),
            ("k_d", self.k_d),
            ("k_s", self.k_s),
            ("k_v", self.k_v),
            ("k_a", self.k_a),
            ("k_g", self.k_g),
        ];

        for (name, value) in terms {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field: format!("{slot}.{name}"),
                    message: format!("must be finite, got {value}"),
                });
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TalonFX
// ---------------------------------------------------------------------------

/// Configuration applied to a TalonFX when its adapter is constructed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TalonFxConfig {
    /// Feedback sensor selection.
    pub feedback: FeedbackConfig,
    /// Gains for closed-loop slot 0.
    pub slot0: SlotGains,
    /// Gains for closed-loop slot 1.
    pub slot1: SlotGains,
}

impl TalonFxConfig {
    /// Creates a configuration from its parts.
    #[must_use]
    pub const fn new(feedback: FeedbackConfig, slot0: SlotGains, slot1: SlotGains) -> Self {
        Self {
            feedback,
            slot0,
            slot1,
        }
    }

    /// Parses a configuration from a TOML string. Missing sections take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text does not parse.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Checks that the controller would accept this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a remote sensor id off the CAN bus range
    /// or a non-finite gain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let id = self.feedback.remote_sensor_id;
        if self.feedback.sensor_source.is_remote() && !(0..=MAX_CAN_ID).contains(&id) {
            return Err(ConfigError::InvalidValue {
                field: "feedback.remote_sensor_id".into(),
                message: format!("must be a CAN id in 0..={MAX_CAN_ID}, got {id}"),
            });
        }

        self.slot0.validate("slot0")?;
        self.slot1.validate("slot1")
    }
}

// ---------------------------------------------------------------------------
// TalonSRX
// ---------------------------------------------------------------------------

/// Configuration applied to a TalonSRX when its adapter is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TalonSrxConfig {
    /// Period of the general status frame, in milliseconds.
    pub general_status_period_ms: u16,
    /// Period of the primary feedback status frame. Left at the controller default when
    /// unset.
    pub feedback_status_period_ms: Option<u16>,
}

impl Default for TalonSrxConfig {
    fn default() -> Self {
        Self {
            general_status_period_ms: default_general_status_period_ms(),
            feedback_status_period_ms: None,
        }
    }
}

impl TalonSrxConfig {
    /// Parses a configuration from a TOML string. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text does not parse.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Checks that the controller would accept this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a status frame period is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("general_status_period_ms", Some(self.general_status_period_ms)),
            ("feedback_status_period_ms", self.feedback_status_period_ms),
        ];

        for (field, period) in periods {
            if period == Some(0) {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    message: "must be > 0".into(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_read_rotor_sensor() {
        let config = TalonFxConfig::default();
        assert_eq!(config.feedback.remote_sensor_id, 0);
        assert_eq!(config.feedback.sensor_source, FeedbackSensorSource::RotorSensor);
        assert_eq!(config.slot0, SlotGains::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_partial_toml() {
        let config = TalonFxConfig::from_toml_str(
            r#"
            [feedback]
            remote_sensor_id = 21
            sensor_source = "fused_can_coder"

            [slot0]
            k_p = 0.3
            k_v = 0.12
            gravity_type = "arm_cosine"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.feedback,
            FeedbackConfig::new(21, FeedbackSensorSource::FusedCanCoder)
        );
        assert_relative_eq!(config.slot0.k_p, 0.3);
        assert_relative_eq!(config.slot0.k_v, 0.12);
        assert_relative_eq!(config.slot0.k_i, 0.0);
        assert_eq!(config.slot0.gravity_type, GravityType::ArmCosine);
        assert_eq!(config.slot1, SlotGains::ZERO);
    }

    #[test]
    fn unknown_sensor_source_fails_to_parse() {
        let err = TalonFxConfig::from_toml_str("[feedback]\nsensor_source = \"laser\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn gain_builders() {
        let gains = SlotGains::pid(1.0, 0.0, 0.1)
            .with_feedforward(0.2, 0.12, 0.01)
            .with_gravity(0.4, GravityType::ArmCosine);

        assert_relative_eq!(gains.k_p, 1.0);
        assert_relative_eq!(gains.k_d, 0.1);
        assert_relative_eq!(gains.k_s, 0.2);
        assert_relative_eq!(gains.k_v, 0.12);
        assert_relative_eq!(gains.k_a, 0.01);
        assert_relative_eq!(gains.k_g, 0.4);
        assert_eq!(gains.gravity_type, GravityType::ArmCosine);
    }

    #[test]
    fn remote_sensor_id_must_be_on_bus() {
        let config = TalonFxConfig {
            feedback: FeedbackConfig::new(99, FeedbackSensorSource::RemoteCanCoder),
            ..TalonFxConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for feedback.remote_sensor_id: must be a CAN id in 0..=62, got 99"
        );

        // Rotor feedback ignores the id.
        let config = TalonFxConfig {
            feedback: FeedbackConfig::new(99, FeedbackSensorSource::RotorSensor),
            ..TalonFxConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_finite_gain_is_rejected() {
        let config = TalonFxConfig {
            slot1: SlotGains::pid(f64::NAN, 0.0, 0.0),
            ..TalonFxConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("Invalid value for slot1.k_p"));
    }

    #[test]
    fn srx_defaults_to_250ms_general_frame() {
        let config = TalonSrxConfig::default();
        assert_eq!(config.general_status_period_ms, 250);
        assert_eq!(config.feedback_status_period_ms, None);
        assert_eq!(TalonSrxConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn srx_zero_period_is_rejected() {
        let config = TalonSrxConfig {
            feedback_status_period_ms: Some(0),
            ..TalonSrxConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "feedback_status_period_ms"
        ));
    }
}
