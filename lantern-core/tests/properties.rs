//! Property tests for the breathing effects

use lantern_core::clock::{Clock, MillisCounter};
use lantern_core::config::{StepConfig, TimeConfig};
use lantern_core::effect::{
    lerp, BreathingEffect, Phase, Sample, StepInterpolated, TimeInterpolated,
};
use proptest::prelude::*;

fn time_config() -> impl Strategy<Value = TimeConfig> {
    (1u32..300, 1u32..300, 1u32..2000).prop_map(|(charge_ms, discharge_ms, on_ms)| TimeConfig {
        debounce_ms: 0,
        charge_ms,
        discharge_ms,
        on_ms,
    })
}

fn step_config() -> impl Strategy<Value = StepConfig> {
    (1u32..300, 1u32..300, 0u32..20, 0u32..20, 1u32..6).prop_map(
        |(charge_steps, discharge_steps, charge_delay_ms, discharge_delay_ms, loops)| StepConfig {
            charge_steps,
            discharge_steps,
            charge_delay_ms,
            discharge_delay_ms,
            loops,
        },
    )
}

/// Check every run of same-phase samples moves in the phase's direction
fn assert_monotonic_phases(samples: &[Sample]) {
    for pair in samples.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.phase != b.phase {
            continue;
        }
        match a.phase {
            Phase::Charging => assert!(b.intensity >= a.intensity, "{a:?} -> {b:?}"),
            Phase::Discharging => assert!(b.intensity <= a.intensity, "{a:?} -> {b:?}"),
        }
    }
}

proptest! {
    #[test]
    fn lerp_stays_within_output_range(steps in 1i64..10_000, frac in 0.0f64..=1.0) {
        let v = ((steps as f64) * frac) as i64;
        let out = lerp(v, 0, steps, 0, 255);
        prop_assert!((0..=255).contains(&out));
    }

    #[test]
    fn lerp_hits_endpoints(lo0 in -1000i64..1000, span in 1i64..1000, lo1 in -1000i64..1000, hi1 in -1000i64..1000) {
        prop_assert_eq!(lerp(lo0, lo0, lo0 + span, lo1, hi1), lo1);
        prop_assert_eq!(lerp(lo0 + span, lo0, lo0 + span, lo1, hi1), hi1);
    }

    #[test]
    fn time_effect_is_bounded_and_monotonic(config in time_config(), start in any::<u32>(), stride in 1u32..7) {
        let clock = MillisCounter::starting_at(start);
        let mut effect = TimeInterpolated::start(&clock, config);
        let mut samples = Vec::new();

        while let Some(sample) = effect.next() {
            samples.push(sample);
            for _ in 0..stride {
                clock.tick();
            }
        }

        prop_assert!(!samples.is_empty());
        prop_assert_eq!(samples[0].intensity, 0);
        prop_assert!(samples.iter().all(|s| s.hold_ms == 0));
        assert_monotonic_phases(&samples);
        prop_assert!(clock.elapsed_since(start) > config.on_ms);
    }

    #[test]
    fn step_effect_is_bounded_and_monotonic(config in step_config()) {
        let mut effect = StepInterpolated::start(config);
        let samples: Vec<Sample> = effect.by_ref().collect();

        let per_loop = (config.charge_steps + config.discharge_steps) as usize;
        prop_assert_eq!(samples.len(), per_loop * config.loops as usize);
        prop_assert_eq!(effect.completed_phases(), 2 * config.loops);
        assert_monotonic_phases(&samples);

        let held: u64 = samples.iter().map(|s| s.hold_ms as u64).sum();
        prop_assert_eq!(held, config.total_delay_ms());

        for lap in samples.chunks(per_loop) {
            prop_assert_eq!(lap[0].intensity, 0);
            prop_assert_eq!(lap[config.charge_steps as usize].intensity, 255);
        }
    }
}
