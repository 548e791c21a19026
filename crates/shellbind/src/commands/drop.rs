use shellbind_core::HDrop;
use shellbind_windows::{HostWindow, ctrl_c, post_quit};

use crate::DropArgs;

const WM_DROPFILES: u32 = 0x0233;

/// Opens a window that accepts dropped files and prints the first drop.
///
/// Ctrl+C or closing the window ends the command without a drop.
pub fn execute(args: &DropArgs) {
    let window = match HostWindow::new("Drop files here", true) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: could not create window: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = ctrl_c::quit_pump_on_ctrl_c() {
        eprintln!("Error: could not install Ctrl+C handler: {e}");
        std::process::exit(1);
    }

    let shell = shellbind_windows::shell();
    shell.drag_accept_files(window.handle(), true);
    if !args.json {
        println!("Drop files onto the window (Ctrl+C to cancel).");
    }

    let json = args.json;
    window.run(move |msg| {
        if msg.id != WM_DROPFILES {
            return None;
        }

        let shell = shellbind_windows::shell();
        let report = shell.drop_session(HDrop(msg.wparam)).report();
        print_report(&report, json);
        post_quit();
        Some(0)
    });

    shell.drag_accept_files(window.handle(), false);
}

fn print_report(report: &shellbind_core::DropReport, json: bool) {
    if json {
        match report.to_json() {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Error: could not serialize drop: {e}"),
        }
        return;
    }

    let area = if report.point.in_client_area {
        "client area"
    } else {
        "non-client area"
    };
    println!(
        "{} file(s) dropped at ({}, {}) in the {area}:",
        report.files.len(),
        report.point.point.x,
        report.point.point.y
    );
    for file in &report.files {
        println!("  {file}");
    }
}
