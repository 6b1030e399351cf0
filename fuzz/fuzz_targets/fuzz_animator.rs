#![no_main]

use libfuzzer_sys::fuzz_target;
use std::time::{Duration, Instant};

use fuelbud_core::animator::ValueAnimator;
use fuelbud_core::metrics::MetricTarget;
use fuelbud_core::options::AnimationOptions;

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    // First 2 bytes pick the step count, the next 8 the target
    let steps = u32::from(u16::from_le_bytes([data[0], data[1]])) % 500 + 1;
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&data[2..10]);
    let target = f64::from_le_bytes(raw);
    if !target.is_finite() || target.abs() > 1e12 {
        return;
    }

    let mut animator = ValueAnimator::new(AnimationOptions {
        duration: Duration::from_millis(u64::from(steps)),
        steps,
        restart_delay: Duration::from_millis(1),
    });
    animator.start(
        MetricTarget::builder().field("value", target).build(),
        Instant::now(),
    );

    while let Some(frame) = animator.step() {
        let shown = frame.value("value").unwrap_or(0.0);
        if target >= 0.0 {
            assert!(shown <= target, "overshoot: {shown} > {target}");
        } else {
            assert!(shown >= target, "overshoot: {shown} < {target}");
        }
    }
    assert_eq!(animator.value("value"), target);
});
