extern crate cadence_audio;

mod common;

use std::sync::Arc;

use cadence_audio::prelude::*;

use common::*;

fn buffer(samples: Vec<i16>) -> Arc<AudioBuffer> {
    Arc::new(AudioBuffer {
        pcm: samples,
        channels: 1,
        sample_rate: RATE,
    })
}

#[test]
fn single_use() {
    let context = offline();
    let mut voice = context.build(buffer(vec![1000; 100])).unwrap();
    assert!(!voice.is_started());

    voice.start(0.0).unwrap();
    assert!(voice.is_started());

    match voice.start(0.0) {
        Err(AudioError::VoiceConsumed(id)) => assert_eq!(id, voice.id()),
        other => panic!("unexpected {:?}", other),
    }

    let other = context.build(buffer(vec![1000; 100])).unwrap();
    assert_ne!(other.id(), voice.id());
}

#[test]
fn silent_until_started() {
    let context = offline();
    let voice = context.build(buffer(vec![1000; 100])).unwrap();

    assert!(context.render(10).iter().all(|&v| v == 0.0));
    assert_eq!(context.active_voices(), 0);
    drop(voice);
}

#[test]
fn gain() {
    let context = offline();
    let unit = f32::from(8000i16) / f32::from(std::i16::MAX);

    let mut voice = context.build(buffer(vec![8000; 100])).unwrap();
    voice.set_gain(0.5);
    voice.start(0.0).unwrap();

    let out = context.render(4);
    assert_eq!(out.len(), 4);
    assert!(out.iter().all(|&v| (v - unit * 0.5).abs() < 1e-6));

    voice.set_gain(2.0);
    let out = context.render(1);
    assert!((out[0] - unit * 2.0).abs() < 1e-6);

    // Voices are summed.
    let mut another = context.build(buffer(vec![8000; 100])).unwrap();
    another.start(0.0).unwrap();
    let out = context.render(1);
    assert!((out[0] - unit * 3.0).abs() < 1e-6);
}

#[test]
fn channels() {
    let context = AudioContext::offline(AudioParams {
        sample_rate: RATE,
        channels: 2,
    });

    let mut voice = context.build(buffer(vec![8000; 100])).unwrap();
    voice.start(0.0).unwrap();

    let out = context.render(3);
    assert_eq!(out.len(), 6);
    assert!(out.iter().all(|&v| v > 0.0));
    assert!(approx(voice.elapsed(), 0.03));
}

#[test]
fn end_of_buffer() {
    let context = offline();

    let mut voice = context.build(buffer(vec![8000; 10])).unwrap();
    voice.start(0.0).unwrap();

    let out = context.render(15);
    assert!(out[..10].iter().all(|&v| v > 0.0));
    assert!(out[10..].iter().all(|&v| v == 0.0));
    assert!(voice.is_ended());
    assert!(approx(voice.elapsed(), 0.1));
    assert_eq!(context.active_voices(), 0);
}

#[test]
fn looping() {
    let context = offline();

    let mut voice = context.build(buffer(vec![8000; 10])).unwrap();
    voice.set_loop(true);
    voice.start(0.25).unwrap();

    // The offset wraps around the buffer.
    assert!(approx(voice.elapsed(), 0.05));

    let out = context.render(22);
    assert!(out.iter().all(|&v| v > 0.0));
    assert!(!voice.is_ended());
    assert!(approx(voice.elapsed(), 0.07));
}

#[test]
fn offset() {
    let context = offline();

    let mut voice = context.build(buffer((0..100).collect())).unwrap();
    voice.start(0.5).unwrap();

    let out = context.render(1);
    assert!((out[0] - 50.0 / f32::from(std::i16::MAX)).abs() < 1e-6);
    assert!(approx(voice.stop(), 0.51));

    // Offsets past the end clamp to the end.
    let mut voice = context.build(buffer(vec![8000; 10])).unwrap();
    voice.start(5.0).unwrap();
    assert!(approx(voice.elapsed(), 0.1));
    context.render(1);
    assert!(voice.is_ended());
}

#[test]
fn drop_releases_slot() {
    let context = offline();

    let mut voices = Vec::new();
    for _ in 0..4 {
        let mut voice = context.build(buffer(vec![8000; 100])).unwrap();
        voice.start(0.0).unwrap();
        voices.push(voice);
    }

    assert_eq!(context.active_voices(), 4);

    voices.truncate(1);
    assert_eq!(context.active_voices(), 1);

    let elapsed = voices.pop().unwrap().stop();
    assert!(approx(elapsed, 0.0));
    assert_eq!(context.active_voices(), 0);
    assert!(context.render(5).iter().all(|&v| v == 0.0));
}

#[test]
fn teardown() {
    let context = offline();

    let mut voice = context.build(buffer(vec![8000; 100])).unwrap();
    voice.start(0.0).unwrap();

    context.teardown();
    assert!(context.is_discarded());
    assert_eq!(context.active_voices(), 0);
    assert!(context.render(5).iter().all(|&v| v == 0.0));

    match context.build(buffer(vec![8000; 100])) {
        Err(AudioError::Discarded) => {}
        other => panic!("unexpected {:?}", other),
    }

    drop(voice);
    context.teardown();
}

#[test]
fn headless() {
    let context = AudioContext::headless(AudioParams {
        sample_rate: RATE,
        channels: 1,
    })
    .unwrap();

    let mut voice = context.build(buffer(vec![8000; 100])).unwrap();
    voice.set_loop(true);
    voice.start(0.0).unwrap();

    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    while voice.elapsed() == 0.0 && std::time::Instant::now() < deadline {
        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    assert!(voice.elapsed() > 0.0);
    drop(voice);
    context.teardown();
}

#[test]
fn ogg() {
    assert!(OggDecoder::decode_ogg(b"definitely not a vorbis stream").is_err());
    assert!(OggDecoder::decode_ogg(&[]).is_err());
}
