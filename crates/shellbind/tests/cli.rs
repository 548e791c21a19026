use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shellbind"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute shellbind");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tray balloons"));
    for command in ["init", "open", "browse", "icon", "drop", "notify"] {
        assert!(stdout.contains(command), "missing {command}");
    }
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shellbind"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute shellbind");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("shellbind"));
}

#[test]
fn open_requires_a_file() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shellbind"));
    cmd.arg("open");

    // Act
    let output = cmd.output().expect("failed to execute shellbind");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<FILE>"));
}

#[test]
fn open_rejects_unknown_show_state() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shellbind"));
    cmd.args(["open", "notes.txt", "--show", "sideways"]);

    // Act
    let output = cmd.output().expect("failed to execute shellbind");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown show command"));
}

#[test]
fn notify_rejects_unknown_kind() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shellbind"));
    cmd.args(["notify", "hello", "--kind", "loud"]);

    // Act
    let output = cmd.output().expect("failed to execute shellbind");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown balloon kind"));
}

#[cfg(not(windows))]
#[test]
fn shell_commands_fail_off_windows() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shellbind"));
    cmd.args(["icon", "shell32.dll"]);

    // Act
    let output = cmd.output().expect("failed to execute shellbind");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Windows"));
}
