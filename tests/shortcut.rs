extern crate cadence;

use cadence::res::shortcut::ShortcutResolver;

#[test]
fn basic() {
    let mut shortcuts = ShortcutResolver::new();

    shortcuts.add("home:", "file:///sounds/").unwrap();
    shortcuts.add("sfx:", "home:").unwrap();
    shortcuts.add("ui:", "sfx:menu/").unwrap();

    assert!(shortcuts.has("home:"));
    assert!(shortcuts.has("sfx:"));
    assert!(shortcuts.has("ui:"));
    assert!(!shortcuts.has("music:"));

    assert_eq!(shortcuts.resolve("home:"), Some("file:///sounds/".into()));
    assert_eq!(
        shortcuts.resolve("ui:click.ogg"),
        Some("file:///sounds/menu/click.ogg".into())
    );

    shortcuts.add("home:", "mem://").unwrap();
    assert_eq!(shortcuts.resolve("ui:click.ogg"), Some("mem://menu/click.ogg".into()));
}

#[test]
fn passthrough() {
    let shortcuts = ShortcutResolver::new();
    assert_eq!(shortcuts.resolve("click.ogg"), Some("click.ogg".into()));
    assert_eq!(
        shortcuts.resolve("file:///tmp/click.ogg"),
        Some("file:///tmp/click.ogg".into())
    );
    assert_eq!(shortcuts.resolve("unknown:click.ogg"), None);
}

#[test]
fn drive() {
    let mut shortcuts = ShortcutResolver::new();
    assert_eq!(
        shortcuts.resolve("C:\\sfx\\click.ogg"),
        Some("C:\\sfx\\click.ogg".into())
    );

    shortcuts.add("sfx:", "D:/sounds/").unwrap();
    assert_eq!(
        shortcuts.resolve("sfx:click.ogg"),
        Some("D:/sounds/click.ogg".into())
    );
}

#[test]
fn cycle() {
    let mut shortcuts = ShortcutResolver::new();
    shortcuts.add("ping:", "pong:").unwrap();
    shortcuts.add("pong:", "ping:").unwrap();

    assert_eq!(shortcuts.resolve("ping:click.ogg"), None);
}

#[test]
fn err() {
    let mut shortcuts = ShortcutResolver::new();
    // Shortcut must end with a colon.
    assert!(shortcuts.add("home", "file:///sounds/").is_err());
    // Single letters are DOS drives.
    assert!(shortcuts.add(":", "file:///sounds/").is_err());
    assert!(shortcuts.add("c:", "file:///sounds/").is_err());
    // Fullname must end in a '/' (dir) or ':' (other shortcut).
    assert!(shortcuts.add("home:", "file:///sounds").is_err());
}
