use std::{convert::Infallible, sync::Arc};

use froglib::{
    drivetrain::DriveTrainConfig,
    math::{array_to_pose, remap},
    prelude::*,
};
use log::{LevelFilter, Metadata, Record};

const DRIVE_TOML: &str = r"
gear_stages = [[14, 50], [27, 17], [15, 45]]
wheel_diameter = 0.1016
";

// Field pose of the blue speaker opening, as reported by the AprilTag layout.
const SPEAKER: [f64; 6] = [-0.04, 5.55, 2.05, 0.0, 0.0, 0.0];

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            println!("{} {} - {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Stands in for a TalonFX spinning at a fixed rate.
struct SimTalonFx {
    rps: f64,
}

impl TalonFxDriver for SimTalonFx {
    type Error = Infallible;

    fn apply_config(&mut self, _config: &TalonFxConfig) -> Result<(), Infallible> {
        Ok(())
    }

    fn velocity(&self) -> Result<f64, Infallible> {
        Ok(self.rps)
    }

    fn position(&self) -> Result<f64, Infallible> {
        Ok(0.0)
    }

    fn motor_voltage(&self) -> Result<f64, Infallible> {
        Ok(12.0 * self.rps / 100.0)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(LevelFilter::Debug))
        .map_err(|e| e.to_string())?;

    let drive = DriveTrainConfig::from_toml_str(DRIVE_TOML)?.build()?;
    let motor_rps = drive.speed_to_motor_rate(4.0);
    println!("4 m/s needs {motor_rps:.2} motor rps");

    let table = Arc::new(TelemetryTable::new());
    let sink: Arc<dyn TelemetrySink> = table.clone();
    let front_left = FrogTalonFx::new(
        SimTalonFx { rps: motor_rps },
        TalonFxConfig::default(),
        &MotorOptions::new(1)
            .with_parent_table("Drive")
            .with_motor_name("FrontLeft"),
        &sink,
    )?;
    front_left.log_data()?;
    front_left
        .telemetry()
        .voltage()
        .set(front_left.motor_voltage()?);

    for topic in table.topics() {
        println!("{topic} = {:?}", table.get(&topic));
    }

    let robot = Pose2::new(2.5, 4.0, 30.0.deg());
    let target = RobotRelativeTarget::new(&robot, &array_to_pose(&SPEAKER)?)?;
    println!(
        "distance {:.2} m, firing heading {}, elevation {}",
        target.distance, target.firing_heading, target.elevation
    );

    let turn = remap(target.drive_vt, -2.0, 2.0, -1.0, 1.0)?;
    println!("turn command {turn:.3}");

    Ok(())
}
