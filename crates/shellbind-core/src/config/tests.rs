use super::loader::{parse, try_load_from};
use super::*;
use crate::browse::{BIF_BROWSEINCLUDEFILES, BIF_RETURNONLYFSDIRS};
use crate::execute::ShowCommand;
use crate::notify::BalloonKind;

#[test]
fn default_config_has_expected_values() {
    // Arrange
    let config = Config::default();

    // Assert
    assert_eq!(config.open.show, ShowCommand::Normal);
    assert_eq!(config.browse.title, "Select a folder");
    assert_eq!(config.tray.id, 1);
    assert_eq!(config.tray.kind, BalloonKind::Info);
    assert!(!config.log.enabled);
}

#[test]
fn template_parses_to_defaults() {
    // Act
    let config = parse(&template::generate_config()).unwrap();
    let defaults = Config::default();

    // Assert
    assert_eq!(config.open.show, defaults.open.show);
    assert_eq!(config.browse.title, defaults.browse.title);
    assert_eq!(config.browse.flags(), defaults.browse.flags());
    assert_eq!(config.tray.tooltip, defaults.tray.tooltip);
    assert_eq!(config.tray.timeout_ms, defaults.tray.timeout_ms);
    assert_eq!(config.log.level, defaults.log.level);
}

#[test]
fn partial_file_keeps_other_defaults() {
    // Arrange
    let toml = r#"
[open]
show = "maximized"
"#;

    // Act
    let config = parse(toml).unwrap();

    // Assert
    assert_eq!(config.open.show, ShowCommand::Maximized);
    assert_eq!(config.tray.tooltip, "shellbind");
}

#[test]
fn kebab_case_show_commands_parse() {
    // Act
    let config = parse("[open]\nshow = \"show-na\"\n").unwrap();

    // Assert
    assert_eq!(config.open.show, ShowCommand::ShowNa);
}

#[test]
fn unknown_show_command_is_an_error() {
    // Act
    let result = parse("[open]\nshow = \"sideways\"\n");

    // Assert
    assert!(result.is_err());
}

#[test]
fn balloon_timeout_is_clamped() {
    // Act
    let low = parse("[tray]\ntimeout_ms = 500\n").unwrap();
    let high = parse("[tray]\ntimeout_ms = 120000\n").unwrap();

    // Assert
    assert_eq!(low.tray.timeout_ms, BALLOON_TIMEOUT_MIN_MS);
    assert_eq!(high.tray.timeout_ms, BALLOON_TIMEOUT_MAX_MS);
}

#[test]
fn browse_flags_follow_settings() {
    // Arrange
    let config = BrowseConfig {
        new_dialog_style: false,
        include_files: true,
        ..Default::default()
    };

    // Assert
    assert_eq!(config.flags(), BIF_RETURNONLYFSDIRS | BIF_BROWSEINCLUDEFILES);
}

#[test]
fn missing_file_reports_path() {
    // Arrange
    let path = std::env::temp_dir().join("shellbind-does-not-exist").join("config.toml");

    // Act
    let err = try_load_from(&path).unwrap_err();

    // Assert
    assert!(err.contains("shellbind-does-not-exist"));
}

#[test]
fn file_round_trip() {
    // Arrange
    let dir = std::env::temp_dir().join(format!("shellbind-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "[tray]\ntooltip = \"Builds\"\nkind = \"warning\"\n").unwrap();

    // Act
    let config = try_load_from(&path).unwrap();

    // Assert
    assert_eq!(config.tray.tooltip, "Builds");
    assert_eq!(config.tray.kind, BalloonKind::Warning);

    let _ = std::fs::remove_dir_all(&dir);
}
