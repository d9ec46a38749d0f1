//! Drives a full spin the way the client does: one `advance` per 60 fps
//! frame, tick samples every 50 ms, result resolution on the `done` frame.

use std::time::{Duration, Instant};

use fortune_wheel_engine::{
    resolve, RandomSource, SpinEngine, SpinParams, TickScheduler, WheelConfig, POINTER_ANGLE,
    TICK_INTERVAL,
};

struct FixedRandom(f64, f64);

impl RandomSource for FixedRandom {
    fn sample(&mut self) -> f64 {
        let value = self.0;
        self.0 = self.1;
        value
    }
}

#[test]
fn full_spin_lands_on_the_segment_under_the_pointer() {
    let config = WheelConfig::new(
        "lunch",
        vec![
            "Chicken".into(),
            "Pizza".into(),
            "Gimbap".into(),
            "Sushi".into(),
            "Burger".into(),
            "Noodles".into(),
        ],
    )
    .unwrap();

    let mut engine = SpinEngine::new(SpinParams::default());
    let mut ticker = TickScheduler::new();
    let t0 = Instant::now();

    let session = engine
        .request_spin(t0, &mut FixedRandom(0.37, 0.81))
        .unwrap();

    let frame_step = Duration::from_micros(16_667);
    let mut now = t0;
    let mut next_tick = t0;
    let mut crossings = 0;
    let mut last_rotation = engine.rotation();
    let mut outcome = None;

    while outcome.is_none() {
        now += frame_step;
        let frame = engine.advance(now);
        assert!(frame.rotation >= last_rotation);
        last_rotation = frame.rotation;

        while next_tick <= now {
            let sample = ticker.sample(frame.rotation, &config, POINTER_ANGLE).unwrap();
            if sample.crossed {
                crossings += 1;
            }
            next_tick += TICK_INTERVAL;
        }

        if frame.done {
            outcome = Some(resolve(frame.rotation, &config, POINTER_ANGLE).unwrap());
        }
    }

    let outcome = outcome.unwrap();
    assert!(outcome.index < config.segment_count());

    // resolution and tick sampling share the segment formula, so the final
    // tick sample must agree with the announced winner
    let final_sample = ticker
        .sample(engine.rotation(), &config, POINTER_ANGLE)
        .unwrap();
    assert_eq!(final_sample.segment, outcome.index);

    // at least five full turns were made, so the pointer crossed far more
    // boundaries than one lap has segments
    assert!(crossings > config.segment_count());

    // accumulated rotation equals the advertised target
    assert_eq!(engine.rotation(), session.target_rotation);
}
