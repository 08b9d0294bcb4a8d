//! Voltmeter front-end simulation
//!
//! Runs the front-end against behavioural ladder models of both converted
//! channels and a trusted reference at the same input voltage. Halfway
//! through, the calibration button is pressed and the offsets of the
//! (deliberately mis-trimmed) ladders are captured.
//!
//! Usage: `simulate [SETTINGS]` where `SETTINGS` is a JSON [Settings] object,
//! e.g. `{"mode":7,"calibrate":true,"strategy":["Sar","Ramp"],"hold":false}`.
use voltmeter::{
    analog::Ladder,
    convert::Code,
    design_parameters::{CHANNEL_BITS, REFERENCE_BITS},
    Config, Frontend, Inputs, ReferenceSample, Settings,
};

struct StdoutLogger(log::LevelFilter);

impl log::Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.0
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            println!("{:<5} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger(log::LevelFilter::Debug);

const TICKS: u32 = 100_000;
const REFERENCE_PERIOD: u32 = 64;
const INPUT_VOLTS: f32 = 1.2;

fn main() -> Result<(), voltmeter::Error> {
    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(log::LevelFilter::Debug))
        .unwrap();

    let settings = match std::env::args().nth(1) {
        Some(json) => match serde_json_core::from_str::<Settings>(&json) {
            Ok((settings, _)) => settings,
            Err(e) => {
                log::error!("Invalid settings: {e:?}");
                std::process::exit(1);
            }
        },
        None => Settings {
            mode: 0b0111,
            calibrate: true,
            ..Default::default()
        },
    };
    log::info!("{settings:?}");

    let config = Config::default();
    let mut frontend = Frontend::new(&config)?;

    let level = Code::from_volts(INPUT_VOLTS, CHANNEL_BITS).value as f32 + 0.5;
    let mut ladders = [
        Ladder::new(level).with_lag(2).with_offset(-3.),
        Ladder::new(level).with_offset(2.),
    ];
    let reference = Code::from_volts(INPUT_VOLTS, REFERENCE_BITS).value;

    let mut inputs = Inputs::default();
    settings.apply(&mut inputs)?;

    for t in 0..TICKS {
        inputs.comparators = ladders.each_ref().map(Ladder::comparator);
        inputs.reference = ReferenceSample {
            code: reference,
            ready: t % REFERENCE_PERIOD == 0,
        };
        inputs.trigger = (TICKS / 2..TICKS / 2 + 100).contains(&t);
        let output = frontend.tick(&inputs);
        for (ladder, code) in ladders.iter_mut().zip(output.drive) {
            ladder.drive(code);
        }
        if t == TICKS / 2 - 1 || t == TICKS - 1 {
            let telemetry = frontend.telemetry().finalize();
            match serde_json_core::to_string::<_, 512>(&telemetry) {
                Ok(json) => log::info!("{json}"),
                Err(e) => log::warn!("Telemetry serialization: {e:?}"),
            }
        }
    }
    Ok(())
}
