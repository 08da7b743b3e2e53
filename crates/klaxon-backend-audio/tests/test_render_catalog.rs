//! Whole-catalog rendering integration tests.

use klaxon_backend_audio::{render, EngineConfig, SynthesisEngine};
use klaxon_spec::{Catalog, PatternKind, MAX_TONE_ID, MIN_TONE_ID};
use pretty_assertions::assert_eq;

fn engine() -> SynthesisEngine {
    SynthesisEngine::builtin(EngineConfig::default()).unwrap()
}

// ============================================================================
// Length
// ============================================================================

#[test]
fn test_every_tone_has_exact_length() {
    let engine = engine();
    let durations = [0.1, 0.3, 1.0, 2.5, 3.3, 4.0, 5.0, 7.77];

    for tone_id in MIN_TONE_ID..=MAX_TONE_ID {
        for &duration in &durations {
            let waveform = engine.render(tone_id, duration).unwrap();
            let expected = (duration * 44_100.0).round() as usize;
            assert_eq!(
                waveform.len(),
                expected,
                "tone {tone_id} at {duration} s"
            );
        }
    }
}

#[test]
fn test_exact_length_at_other_rates() {
    for sample_rate in [8_000, 22_050, 48_000] {
        for tone_id in [2, 9, 16, 25, 32] {
            let waveform = render(tone_id, 1.37, sample_rate, 0.5).unwrap();
            let expected = (1.37 * sample_rate as f64).round() as usize;
            assert_eq!(waveform.len(), expected, "tone {tone_id} at {sample_rate} Hz");
        }
    }
}

#[test]
fn test_bursts_fill_long_renders() {
    let engine = engine();
    for tone_id in [9, 11, 12, 28] {
        let waveform = engine.render(tone_id, 30.0).unwrap();
        assert_eq!(waveform.len(), 1_323_000);
        // The seventh cycle starts at 24 s with a unit.
        let start = 24 * 44_100;
        assert!(waveform.samples()[start..start + 22_050]
            .iter()
            .any(|&s| s != 0));
    }
}

// ============================================================================
// Amplitude
// ============================================================================

#[test]
fn test_samples_stay_within_amplitude() {
    for amplitude in [0.1, 0.5, 1.0] {
        let limit = (amplitude * 32767.0) as u16;
        for tone_id in MIN_TONE_ID..=MAX_TONE_ID {
            let waveform = render(tone_id, 1.0, 22_050, amplitude).unwrap();
            assert!(
                waveform.peak() <= limit,
                "tone {tone_id} peak {} over {limit}",
                waveform.peak()
            );
        }
    }
}

#[test]
fn test_every_tone_is_audible() {
    let engine = engine();
    for tone_id in MIN_TONE_ID..=MAX_TONE_ID {
        let waveform = engine.render(tone_id, 2.0).unwrap();
        assert!(waveform.peak() > 10_000, "tone {tone_id} is too quiet");
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_renders_are_bit_identical() {
    for tone_id in MIN_TONE_ID..=MAX_TONE_ID {
        let a = engine().render(tone_id, 1.5).unwrap();
        let b = engine().render(tone_id, 1.5).unwrap();
        assert_eq!(a.pcm_hash(), b.pcm_hash(), "tone {tone_id}");
    }
}

#[test]
fn test_tones_are_distinct() {
    let engine = engine();
    let mut hashes: Vec<String> = (MIN_TONE_ID..=MAX_TONE_ID)
        .map(|id| engine.render(id, 2.0).unwrap().pcm_hash())
        .collect();
    hashes.sort();
    hashes.dedup();
    assert_eq!(hashes.len(), 32);
}

#[test]
fn test_shorter_render_is_prefix_of_longer() {
    // Patterns without a rate-dependent partial are pure prefixes.
    let engine = engine();
    for tone_id in [1, 4, 6, 7, 9, 11, 16, 24, 32] {
        let short = engine.render(tone_id, 1.3).unwrap();
        let long = engine.render(tone_id, 6.0).unwrap();
        assert_eq!(
            short.samples(),
            &long.samples()[..short.len()],
            "tone {tone_id}"
        );
    }
}

// ============================================================================
// Catalog coverage
// ============================================================================

#[test]
fn test_every_pattern_kind_renders() {
    let catalog = Catalog::new();
    let engine = engine();
    for kind in PatternKind::ALL {
        let tones = catalog.search_by_pattern(kind);
        assert!(!tones.is_empty(), "no tone of kind {kind}");
        for tone in tones {
            assert_eq!(engine.render(tone.id, 0.75).unwrap().len(), 33_075);
        }
    }
}

// ============================================================================
// Phase continuity
// ============================================================================

/// Largest step a continuous-phase sine at `max_frequency` can take between
/// adjacent samples, plus quantization slack.
fn max_step(amplitude: f64, max_frequency: f64, sample_rate: f64) -> i32 {
    (amplitude * 32767.0 * std::f64::consts::TAU * max_frequency / sample_rate).ceil() as i32 + 2
}

#[test]
fn test_chained_sweeps_have_no_clicks() {
    // (tone, highest frequency) for sweeps that carry phase across repeats.
    let sweeps = [
        (3, 970.0),
        (13, 1200.0),
        (16, 2700.0),
        (24, 1200.0),
        (25, 1200.0),
        (26, 2900.0),
        (27, 2900.0),
        (29, 970.0),
        (30, 970.0),
    ];
    let engine = engine();

    for (tone_id, max_frequency) in sweeps {
        let waveform = engine.render(tone_id, 6.0).unwrap();
        let limit = max_step(0.5, max_frequency, 44_100.0);
        let worst = waveform
            .samples()
            .windows(2)
            .map(|pair| (pair[1] as i32 - pair[0] as i32).abs())
            .max()
            .unwrap();
        assert!(worst <= limit, "tone {tone_id}: step {worst} over {limit}");
    }
}
