use shellbind_core::BrowseOptions;
use shellbind_core::browse::BIF_BROWSEINCLUDEFILES;
use shellbind_core::config::Config;

use crate::BrowseArgs;

/// Shows the folder picker and prints the chosen file-system path.
///
/// Cancelling prints nothing and exits with status 1. So does picking a
/// virtual item such as "Control Panel" that has no path.
pub fn execute(args: &BrowseArgs, config: &Config) {
    let shell = shellbind_windows::shell();

    let mut flags = config.browse.flags();
    if args.include_files {
        flags |= BIF_BROWSEINCLUDEFILES;
    }
    let title = args.title.as_deref().unwrap_or(&config.browse.title);
    let mut options = BrowseOptions::new().with_title(title).with_flags(flags);

    let Some(idl) = shell.browse_for_folder(&mut options) else {
        eprintln!("Cancelled.");
        std::process::exit(1);
    };

    let path = shell.path_from_id_list(idl);
    shell.free_id_list(idl);

    if path.is_empty() {
        eprintln!(
            "Error: \"{}\" is not a file-system location.",
            options.display_name()
        );
        std::process::exit(1);
    }
    println!("{path}");
}
