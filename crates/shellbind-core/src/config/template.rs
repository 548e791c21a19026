//! Commented default `config.toml` written by `shellbind init`.

/// Generates the default config file with every option explained.
pub fn generate_config() -> String {
    r#"# shellbind configuration
# Every value shown is the default. Delete a line to keep the default.

[log]
# Write a log file to ~/.config/shellbind/logs/shellbind.log
enabled = false
# Minimum level: "debug", "info", "warn", or "error".
# "debug" traces every native shell32 call.
level = "info"
# Rotate the log after this many megabytes (one backup is kept).
max_file_mb = 10

[open]
# Window state for launched programs:
# "hide", "normal", "minimized", "maximized", "no-activate", "show",
# "minimize", "min-no-active", "show-na", "restore", "default",
# "force-minimize"
show = "normal"

[browse]
# Instruction text above the folder tree.
title = "Select a folder"
# Resizable dialog with a "Make New Folder" button.
new_dialog_style = true
# List files as well as folders.
include_files = false

[tray]
# Identifier of the notification icon.
id = 1
# Tooltip shown when hovering the icon.
tooltip = "shellbind"
# Balloon icon: "none", "info", "warning", "error", or "user".
kind = "info"
# Suppress the balloon sound.
silent = false
# Balloon timeout in milliseconds (10000-30000). Recent Windows versions
# use the accessibility setting instead.
timeout_ms = 10000
"#
    .to_string()
}
