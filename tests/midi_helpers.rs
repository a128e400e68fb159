#![cfg(feature = "midi")]

use approx::assert_relative_eq;
use sn76489_psg::{
    frequency_to_note, note_to_frequency, note_to_frequency_int, Channel, Envelope,
    EnvelopeState, MonoPolyMode, Psg,
};

#[test]
fn float_and_int_paths_diverge_inside_octave() {
    for note in 58..=80 {
        assert_eq!(note_to_frequency_int(note), 440);
    }
    assert_relative_eq!(note_to_frequency(61.0f32), 277.1826, epsilon = 1e-2);
    assert_relative_eq!(note_to_frequency(80.0f32), 830.6094, epsilon = 1e-2);
}

#[test]
fn note_round_trip_through_frequency() {
    for note in [21.0f32, 48.0, 60.0, 69.0, 100.5] {
        assert_relative_eq!(frequency_to_note(note_to_frequency(note)), note, epsilon = 1e-3);
    }
}

#[test]
fn playable_note_range() {
    let mut psg = Psg::new(Vec::<u8>::new());
    // B1 (61.7 Hz rounds to 62) is the lowest note with a 10-bit period at 2 MHz
    assert!(psg.set_note(Channel::Ch1, 35).is_ok());
    assert!(psg.set_note(Channel::Ch1, 34).is_err());
    assert!(psg.set_note(Channel::Ch1, 127).is_ok());
}

#[test]
fn octave_lookup_feeds_tone() {
    let mut psg = Psg::new(Vec::<u8>::new());
    let frequency = note_to_frequency_int(81) as u32;
    psg.set_tone(Channel::Ch2, frequency).unwrap();
    // 62500 / 880 = 71 = 0x47
    assert_eq!(psg.sink().as_slice(), &[0b1010_0111, 0b0000_0100]);
}

#[test]
fn envelope_settings_from_json() {
    let env: Envelope = serde_json::from_str(r#"{ "attack": 127, "release": 64 }"#).unwrap();
    assert_eq!(env.attack_time(), 1000);
    assert_eq!(env.decay_time(), 0);
    assert_eq!(env.sustain, 127);
    assert_eq!(env.release_time(), 503);

    let mode: MonoPolyMode = serde_json::from_str(r#""poly""#).unwrap();
    assert!(mode.is_poly());

    let state: EnvelopeState = serde_json::from_str(r#""Decay""#).unwrap();
    assert_eq!(state, EnvelopeState::Decay);
}
