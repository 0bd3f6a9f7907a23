extern crate cadence_audio;
extern crate serde_json;

use cadence_audio::prelude::*;

#[test]
fn defaults() {
    let config = BatchConfig::from_json(
        r#"{
            "music": { "file": "res:music.ogg", "loop": true },
            "click": { "file": "res:click.ogg", "interrupt": true },
            "hit": { "file": "hit.ogg" }
        }"#,
    )
    .unwrap();

    assert_eq!(config.len(), 3);

    let descriptors = config.descriptors().unwrap();
    let names: Vec<_> = descriptors.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["click", "hit", "music"]);

    assert_eq!(
        descriptors[1],
        ClipDescriptor {
            name: "hit".into(),
            source: "hit.ogg".into(),
            loops: false,
            interrupt: false,
        }
    );

    assert!(descriptors[0].interrupt && !descriptors[0].loops);
    assert!(descriptors[2].loops && !descriptors[2].interrupt);
}

#[test]
fn builder() {
    let config = BatchConfig::new()
        .with("music", ClipParams::new("res:music.ogg").looped(true))
        .with("click", ClipParams::new("res:click.ogg").interrupt(true));

    let json = BatchConfig::from_json(
        r#"{
            "music": { "file": "res:music.ogg", "loop": true },
            "click": { "file": "res:click.ogg", "interrupt": true }
        }"#,
    )
    .unwrap();

    assert_eq!(config, json);
    assert!(BatchConfig::new().is_empty());
}

#[test]
fn from_value() {
    let value = serde_json::json!({ "a": { "file": "a.ogg" } });
    let config = BatchConfig::from_value(value).unwrap();
    assert_eq!(config.descriptors().unwrap()[0].source, "a.ogg");

    for value in vec![
        serde_json::json!(["a.ogg"]),
        serde_json::json!("a.ogg"),
        serde_json::json!(null),
    ] {
        match BatchConfig::from_value(value) {
            Err(AudioError::InvalidConfig(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}

#[test]
fn err() {
    let malformed = [
        r#"{ "a": { "file": "a.ogg", "volume": 0.5 } }"#,
        r#"{ "a": { "loop": true } }"#,
        r#"{ "a": { "file": "a.ogg", "loop": "yes" } }"#,
        r#"{ "a": "a.ogg" }"#,
        r#"[]"#,
        r#"{ "a": "#,
    ];

    for json in &malformed {
        match BatchConfig::from_json(json) {
            Err(AudioError::InvalidConfig(_)) => {}
            other => panic!("{} is accepted: {:?}", json, other),
        }
    }

    let invalid = [
        r#"{ "a": { "file": "" } }"#,
        r#"{ "a": { "file": "   " } }"#,
        r#"{ "": { "file": "a.ogg" } }"#,
    ];

    for json in &invalid {
        let config = BatchConfig::from_json(json).unwrap();
        match config.descriptors() {
            Err(AudioError::InvalidConfig(_)) => {}
            other => panic!("{} is accepted: {:?}", json, other),
        }
    }
}

#[test]
fn params() {
    let params: AudioParams = serde_json::from_str(r#"{ "sample_rate": 22050 }"#).unwrap();
    assert_eq!(params.sample_rate, 22050);
    assert_eq!(params.channels, 2);
    assert_eq!(AudioParams::default().sample_rate, 44100);
}
