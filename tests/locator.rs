extern crate cadence;

use cadence::res::locator::Locator;
use cadence::res::{ResourceParams, ResourceSystem};

#[test]
fn basic() {
    let locator = Locator::new("file:///usr/share/sounds/click.ogg").unwrap();
    assert_eq!(locator.schema(), "file");
    assert_eq!(locator.path(), "/usr/share/sounds/click.ogg");

    let locator = Locator::new("MEM://click").unwrap();
    assert_eq!(locator.schema(), "mem");
    assert_eq!(locator.path(), "click");
    assert_eq!(locator.to_string(), "mem://click");
}

#[test]
fn plain_path() {
    let locator = Locator::new("sounds/click.ogg").unwrap();
    assert_eq!(locator.schema(), "file");
    assert_eq!(locator.path(), "sounds/click.ogg");
}

#[test]
fn err() {
    assert!(Locator::new("").is_err());
    assert!(Locator::new("://click.ogg").is_err());
    assert!(Locator::new("mem://").is_err());
    assert!(Locator::new("m e m://click").is_err());
}

#[test]
fn drive() {
    let res = ResourceSystem::new(ResourceParams::default());
    let locator = res.locate("C:\\sfx\\click.ogg").unwrap();
    assert_eq!(locator.schema(), "file");
    assert_eq!(locator.path(), "C:\\sfx\\click.ogg");
}
