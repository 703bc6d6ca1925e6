/// Table used when a motor is not given a parent table.
pub const DEFAULT_PARENT_TABLE: &str = "Undefined";

/// Identity and telemetry placement for a motor adapter.
///
/// # Examples
///
/// ```
/// use froglib_motors::MotorOptions;
///
/// let options = MotorOptions::new(3).with_parent_table("Drive");
/// assert_eq!(options.resolved_name("TalonFX"), "TalonFX(3)");
///
/// let options = options.with_motor_name("FrontLeft");
/// assert_eq!(options.resolved_name("TalonFX"), "FrontLeft");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotorOptions {
    /// CAN id of the controller.
    pub id: i32,
    /// Telemetry table the motor's own table is nested under.
    pub parent_table: String,
    /// Telemetry name of the motor. Derived from the id when unset.
    pub motor_name: Option<String>,
}

impl MotorOptions {
    /// Creates options for the controller at `id`, under the default parent table.
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self {
            id,
            parent_table: DEFAULT_PARENT_TABLE.to_owned(),
            motor_name: None,
        }
    }

    /// Modifies the parent telemetry table.
    #[must_use]
    pub fn with_parent_table(mut self, parent_table: impl Into<String>) -> Self {
        self.parent_table = parent_table.into();
        self
    }

    /// Modifies the motor's telemetry name.
    #[must_use]
    pub fn with_motor_name(mut self, motor_name: impl Into<String>) -> Self {
        self.motor_name = Some(motor_name.into());
        self
    }

    /// Returns the telemetry name, falling back to `{kind}({id})`.
    ///
    /// An empty name counts as unset.
    #[must_use]
    pub fn resolved_name(&self, kind: &str) -> String {
        match self.motor_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => format!("{kind}({})", self.id),
        }
    }
}

impl Default for MotorOptions {
    fn default() -> Self {
        Self::new(0)
    }
}
