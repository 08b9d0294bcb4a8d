use arbitrary_int::u4;
use rand_core::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

use voltmeter::{
    analog::Ladder,
    converter::{Converter, Strategy},
    mode::{Channel, Representation, Selection},
    router::Readings,
    sar::State,
    Config, Frontend, Inputs, Output, ReferenceSample,
};

/// A front-end wired to two ladders and a reference source.
struct Bench {
    frontend: Frontend,
    ladders: [Ladder; 2],
    reference: u16,
    strobe_period: u32,
    inputs: Inputs,
    t: u32,
}

impl Bench {
    fn new(ladders: [Ladder; 2], reference: u16) -> Self {
        Self {
            frontend: Frontend::new(&Config::default()).unwrap(),
            ladders,
            reference,
            strobe_period: 32,
            inputs: Inputs::default(),
            t: 0,
        }
    }

    fn select(&mut self, channel: Channel, representation: Representation) {
        self.inputs.mode =
            Selection::new(channel, representation).code().unwrap();
    }

    fn tick(&mut self) -> Output {
        self.inputs.comparators = [
            self.ladders[0].comparator(),
            self.ladders[1].comparator(),
        ];
        self.inputs.reference = ReferenceSample {
            code: self.reference,
            ready: self.t % self.strobe_period == 0,
        };
        let output = self.frontend.tick(&self.inputs);
        for (ladder, code) in self.ladders.iter_mut().zip(output.drive) {
            ladder.drive(code);
        }
        self.t += 1;
        output
    }

    fn run(&mut self, ticks: u32) -> Output {
        let mut output = Output::default();
        for _ in 0..ticks {
            output = self.tick();
        }
        output
    }
}

#[test]
fn calibration() {
    // Both ladders are mis-trimmed: A reads 3 LSB low, B 2 LSB high.
    let mut bench = Bench::new(
        [
            Ladder::new(100.5).with_offset(-3.),
            Ladder::new(100.5).with_offset(2.),
        ],
        // 100.5 / 256 of full scale
        25728,
    );
    bench.inputs.calibrate = true;
    bench.select(Channel::ChannelA, Representation::Scaled);
    bench.run(5000);

    let r = bench.frontend.readings();
    assert_eq!(r.reference.average, 25728);
    assert_eq!(r.reference.scaled, 1295);
    assert_eq!((r.channel_a.raw, r.channel_a.average), (97, 97));
    assert_eq!((r.channel_b.raw, r.channel_b.average), (102, 102));
    // no offset captured yet
    assert_eq!(r.channel_a.scaled, 1250);
    assert_eq!(r.channel_b.scaled, 1314);
    assert_eq!(bench.tick().value, 1250);

    // press and hold the button
    bench.inputs.trigger = true;
    bench.run(50);
    bench.inputs.trigger = false;
    bench.run(10);
    assert_eq!(bench.frontend.offsets(), [45, -19]);

    let r = bench.frontend.readings();
    assert_eq!(r.channel_a.scaled, 1295);
    assert_eq!(r.channel_b.scaled, 1295);
    assert_eq!(bench.tick().value, 1295);
    let telemetry = bench.frontend.telemetry();
    assert_eq!(telemetry.uncorrected, [1250, 1314]);

    // bypass keeps the offset
    bench.inputs.calibrate = false;
    assert_eq!(bench.run(2).value, 1250);
    assert_eq!(bench.frontend.offsets(), [45, -19]);
    bench.select(Channel::ChannelB, Representation::Scaled);
    assert_eq!(bench.run(2).value, 1314);
    bench.inputs.calibrate = true;
    assert_eq!(bench.run(2).value, 1295);
}

#[test]
fn mode_latency() {
    let mut bench = Bench::new([Ladder::new(0.); 2], 0x8000);
    bench.strobe_period = u32::MAX;
    bench.select(Channel::Reference, Representation::Raw);
    bench.run(3);
    let r = bench.frontend.readings().reference;
    assert_eq!((r.raw, r.average), (0x8000, 0x0800));

    bench.select(Channel::Reference, Representation::Averaged);
    let out = bench.tick();
    assert_eq!(
        out.selection,
        Selection::new(Channel::Reference, Representation::Raw)
    );
    assert_eq!(out.value, 0x8000);
    let out = bench.tick();
    assert_eq!(
        out.selection,
        Selection::new(Channel::Reference, Representation::Averaged)
    );
    assert_eq!(out.value, 0x0800);

    bench.inputs.mode = u4::new(0b1100);
    bench.tick();
    let out = bench.tick();
    assert!(out.selection.is_blank());
    assert_eq!(out.value, 0);
}

#[test]
fn reset_mid_conversion() {
    let ladders = [Ladder::new(77.5).with_lag(3), Ladder::new(200.5)];
    let mut bench = Bench::new(ladders, 1000);
    bench.select(Channel::ChannelA, Representation::Raw);
    bench.inputs.strategy = [Strategy::Sar, Strategy::Ramp];
    bench.run(1000);
    assert_ne!(bench.frontend.converter(0).sar().state(), State::Idle);

    bench.frontend.reset();
    assert_eq!(bench.frontend.converter(0).sar().state(), State::Idle);
    assert_eq!(bench.frontend.converter(1).ramp().code(), 0);
    assert_eq!(bench.frontend.readings(), Readings::default());
    assert_eq!(bench.frontend.offsets(), [0, 0]);

    // A reset front-end is indistinguishable from a fresh one.
    let mut fresh = Bench::new(ladders, 1000);
    fresh.inputs = bench.inputs;
    bench.ladders = ladders;
    bench.t = 0;
    for _ in 0..10_000 {
        assert_eq!(bench.tick(), fresh.tick());
    }
    assert_eq!(bench.frontend.readings(), fresh.frontend.readings());
    assert_eq!(bench.frontend.readings().channel_a.raw, 77);
}

#[test]
fn hold() {
    let mut bench = Bench::new([Ladder::new(50.5); 2], 1000);
    bench.inputs.enable = false;
    bench.select(Channel::ChannelA, Representation::Raw);
    for _ in 0..2000 {
        let out = bench.tick();
        assert_eq!(out.drive, [0, 0]);
        assert_eq!(out.value, 0);
    }
    // the reference is not gated
    assert_eq!(bench.frontend.readings().reference.raw, 1000);
}

#[test]
fn strategies() {
    let mut bench = Bench::new([Ladder::new(100.5); 2], 0);
    bench.inputs.strategy = [Strategy::Sar, Strategy::Ramp];
    bench.select(Channel::ChannelB, Representation::Averaged);
    // 16 ramp periods fill the window
    let out = bench.run(80_000);
    let r = bench.frontend.readings();
    assert_eq!(r.channel_a.average, 100);
    assert_eq!(r.channel_b.average, 101);
    assert_eq!(out.value, 101);

    // swap strategies, refill both windows
    bench.inputs.strategy = [Strategy::Ramp, Strategy::Sar];
    bench.run(80_000);
    let r = bench.frontend.readings();
    assert_eq!((r.channel_a.raw, r.channel_a.average), (101, 101));
    assert_eq!((r.channel_b.raw, r.channel_b.average), (100, 100));
}

#[test]
fn sar_random_levels() {
    let mut rng = XorShiftRng::seed_from_u64(0x5a5a);
    let config = Config::default();
    for _ in 0..100 {
        let code = rng.next_u32() as u16 & 0xff;
        let lag = rng.next_u32() % 12;
        let mut ladder = Ladder::new(code as f32 + 0.5).with_lag(lag);
        let mut conv = Converter::new(config.sar, config.ramp).unwrap();
        let mut result = None;
        for _ in 0..config.sar.conversion_ticks() * 2 {
            let c = conv.tick(Strategy::Sar, true, ladder.comparator());
            ladder.drive(c.trial);
            if c.done {
                result = Some(c.result);
                break;
            }
        }
        assert_eq!(result, Some(code), "lag {lag}");
    }
}
