use crate::IconArgs;

/// Extracts one icon and reports its handle.
///
/// The icon is destroyed before returning; this only checks that the file
/// holds an icon at the given index.
pub fn execute(args: &IconArgs) {
    let shell = shellbind_windows::shell();

    let Some(icon) = shell.extract_icon(&args.path, args.index) else {
        eprintln!(
            "Error: no icon at index {} in {}.",
            args.index, args.path
        );
        std::process::exit(1);
    };

    println!("Icon {} of {}: {icon:#x}", args.index, args.path);

    if let Err(e) = shellbind_windows::destroy_icon(icon) {
        eprintln!("Error: could not destroy icon: {e}");
        std::process::exit(1);
    }
}
