use shellbind_core::{Hwnd, config::Config};

use crate::OpenArgs;

/// Hands a file, URL, or program to `ShellExecuteW`.
///
/// Without `--show` the configured show state is used.
pub fn execute(args: &OpenArgs, config: &Config) {
    let shell = shellbind_windows::shell();
    let show = args.show.unwrap_or(config.open.show);

    if let Err(e) = shell.shell_execute(
        Hwnd::NULL,
        &args.verb,
        &args.file,
        &args.params,
        &args.dir,
        show,
    ) {
        eprintln!("Error: could not open {}: {e}", args.file);
        std::process::exit(1);
    }
}
