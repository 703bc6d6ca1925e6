use std::{convert::Infallible, sync::Arc, thread};

use froglib_motors::{
    FrogTalonFx, FrogTalonSrx, MotorOptions, StatusFrame, TalonFxConfig, TalonFxDriver,
    TalonSrxConfig, TalonSrxDriver, TelemetrySink, TelemetryTable,
};

struct ConstantFx(f64);

impl TalonFxDriver for ConstantFx {
    type Error = Infallible;

    fn apply_config(&mut self, _config: &TalonFxConfig) -> Result<(), Infallible> {
        Ok(())
    }

    fn velocity(&self) -> Result<f64, Infallible> {
        Ok(self.0)
    }

    fn position(&self) -> Result<f64, Infallible> {
        Ok(self.0 * 2.0)
    }

    fn motor_voltage(&self) -> Result<f64, Infallible> {
        Ok(12.0)
    }
}

struct IdleSrx;

impl TalonSrxDriver for IdleSrx {
    type Error = Infallible;

    fn config_all_settings(&mut self, _config: &TalonSrxConfig) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_status_frame_period(&mut self, _frame: StatusFrame, _period_ms: u16) -> Result<(), Infallible> {
        Ok(())
    }

    fn velocity(&self) -> Result<f64, Infallible> {
        Ok(0.0)
    }

    fn position(&self) -> Result<f64, Infallible> {
        Ok(0.0)
    }

    fn motor_output_voltage(&self) -> Result<f64, Infallible> {
        Ok(0.0)
    }
}

#[test]
fn mixed_motors_share_one_table() {
    let table = Arc::new(TelemetryTable::new());
    let sink: Arc<dyn TelemetrySink> = table.clone();

    let drive = FrogTalonFx::new(
        ConstantFx(3.0),
        TalonFxConfig::default(),
        &MotorOptions::new(1).with_parent_table("Drive"),
        &sink,
    )
    .unwrap();
    let intake = FrogTalonSrx::new(
        IdleSrx,
        TalonSrxConfig::default(),
        &MotorOptions::new(20).with_parent_table("Intake").with_motor_name("Roller"),
        &sink,
    )
    .unwrap();

    drive.log_data().unwrap();
    intake.log_data();
    assert_eq!(table.topics(), vec!["Drive/TalonFX(1)/velocity"]);

    intake.telemetry().voltage().set(intake.motor_voltage().unwrap());
    drive.telemetry().position().set(drive.driver().position().unwrap());

    assert_eq!(
        table.topics(),
        vec![
            "Drive/TalonFX(1)/position",
            "Drive/TalonFX(1)/velocity",
            "Intake/Roller/voltage",
        ]
    );
    assert_eq!(table.get("Drive/TalonFX(1)/velocity"), Some(3.0));
    assert_eq!(table.get("Drive/TalonFX(1)/position"), Some(6.0));
}

#[test]
fn motors_publish_from_separate_threads() {
    let table = Arc::new(TelemetryTable::new());
    let sink: Arc<dyn TelemetrySink> = table.clone();

    let handles: Vec<_> = (0..4)
        .map(|id| {
            let motor = FrogTalonFx::new(
                ConstantFx(f64::from(id)),
                TalonFxConfig::default(),
                &MotorOptions::new(id).with_parent_table("Swerve"),
                &sink,
            )
            .unwrap();

            thread::spawn(move || {
                for _ in 0..50 {
                    motor.log_data().unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(table.topics().len(), 4);
    for id in 0..4 {
        assert_eq!(
            table.get(&format!("Swerve/TalonFX({id})/velocity")),
            Some(f64::from(id))
        );
    }
}
