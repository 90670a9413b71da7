use std::{env, process::ExitCode, time::Duration};
use math::Vector;
use mpu6050::{AlignmentPolicy, Mpu6050, Mpu6050Config, StdSlotTimer};

mod simulated;
use simulated::SimulatedMpu6050;

/// Aligned samples printed after calibrating.
const READINGS: usize = 5;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let sample_count = match args.get(1).map(|arg| arg.parse::<u32>()) {
        None => 100,
        Some(Ok(count)) => count,
        Some(Err(err)) => {
            log::error!("Invalid sample count {:?}: {}", args[1], err);
            return ExitCode::FAILURE;
        }
    };

    let mut config = Mpu6050Config {
        alignment: AlignmentPolicy::RotatedAndThresholded,
        ..Mpu6050Config::default()
    };
    config.calibration.sample_count = sample_count;
    config.calibration.slot = Duration::from_millis(2);

    // Sensor mounted a few degrees off level.
    let device = SimulatedMpu6050::new(Vector::new(-812.0, 1532.0, 15910.0), 20.0);
    let mut mpu = Mpu6050::new(device, config);
    let mut timer = StdSlotTimer::new();

    if !mpu.connection_okay() {
        log::error!("No MPU6050 found");
        return ExitCode::FAILURE;
    }

    if let Err(err) = mpu.initialize(&mut timer) {
        log::error!("Bring-up failed: {}", err);
        return ExitCode::FAILURE;
    }

    for _ in 0..READINGS {
        match mpu.read_acceleration_g() {
            Ok(accel) => println!("{:.4},{:.4},{:.4}", accel.x, accel.y, accel.z),
            Err(err) => {
                log::error!("Reading acceleration failed: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
