use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn glyphtable(prefs: &Path, args: &[&str]) -> Command {
    let mut command = Command::cargo_bin("glyphtable").unwrap();
    command.args(args).arg("--prefs-file").arg(prefs);
    command
}

/// Favorites mutations persist through the preference file and survive
/// separate process invocations.
#[test]
fn test_favorites_add_list_remove_flow() {
    let temp_dir = TempDir::new().unwrap();
    let prefs = temp_dir.path().join("prefs.toml");

    glyphtable(&prefs, &["favorites", "add", "A"])
        .assert()
        .success();
    glyphtable(&prefs, &["favorites", "add", "U+20AC"])
        .assert()
        .success();

    glyphtable(&prefs, &["favorites", "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("★ Favorites (2/50)"))
        .stdout(predicates::str::contains("Latin Capital Letter A"))
        .stdout(predicates::str::contains("Euro Sign"));

    glyphtable(&prefs, &["favorites", "remove", "A"])
        .assert()
        .success();

    glyphtable(&prefs, &["favorites", "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("★ Favorites (1/50)"))
        .stdout(predicates::str::contains("Latin Capital Letter A").not());
}

#[test]
fn test_favorites_duplicate_add_is_a_silent_no_op() {
    let temp_dir = TempDir::new().unwrap();
    let prefs = temp_dir.path().join("prefs.toml");

    glyphtable(&prefs, &["favorites", "add", "A"])
        .assert()
        .success();
    glyphtable(&prefs, &["favorites", "add", "A"])
        .assert()
        .success();

    glyphtable(&prefs, &["favorites", "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("★ Favorites (1/50)"));
}

#[test]
fn test_favorites_toggle() {
    let temp_dir = TempDir::new().unwrap();
    let prefs = temp_dir.path().join("prefs.toml");

    glyphtable(&prefs, &["favorites", "toggle", "★"])
        .assert()
        .success();
    glyphtable(&prefs, &["favorites", "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Black Star"));

    glyphtable(&prefs, &["favorites", "toggle", "★"])
        .assert()
        .success();
    glyphtable(&prefs, &["favorites", "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("★ Favorites (0/50)"));
}

#[test]
fn test_favorites_clear() {
    let temp_dir = TempDir::new().unwrap();
    let prefs = temp_dir.path().join("prefs.toml");

    for symbol in ["A", "B", "C"] {
        glyphtable(&prefs, &["favorites", "add", symbol])
            .assert()
            .success();
    }

    glyphtable(&prefs, &["favorites", "clear"])
        .assert()
        .success();

    glyphtable(&prefs, &["favorites", "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("★ Favorites (0/50)"));
}

#[test]
fn test_favorites_appear_in_table_view() {
    let temp_dir = TempDir::new().unwrap();
    let prefs = temp_dir.path().join("prefs.toml");

    glyphtable(&prefs, &["favorites", "add", "U+2669"])
        .assert()
        .success();

    glyphtable(&prefs, &["table", "-C", "favorites"])
        .assert()
        .success()
        .stdout(predicates::str::contains("★ Favorites (1)"))
        .stdout(predicates::str::contains("Quarter Note"));
}

#[test]
fn test_favorites_preference_file_is_written() {
    let temp_dir = TempDir::new().unwrap();
    let prefs = temp_dir.path().join("prefs.toml");

    glyphtable(&prefs, &["favorites", "add", "A"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&prefs).unwrap();
    assert!(content.contains("Favorite Symbol[0]"));
    assert!(content.contains("65"));
}
