use shellbind_core::config::Config;
use shellbind_core::notify::{
    NIN_BALLOONTIMEOUT, NIN_BALLOONUSERCLICK, NOTIFYICON_VERSION_4, NotifyIconData,
};
use shellbind_core::{Balloon, BalloonKind, NotifyIcon, NotifyMessage, log_info, log_warn};
use shellbind_windows::{HostWindow, ctrl_c, post_quit};

use crate::NotifyArgs;

/// `WM_APP + 1`, the tray callback message.
const TRAY_CALLBACK: u32 = 0x8001;

/// Adds a tray icon, shows a balloon, and waits for it to time out or be
/// clicked. The icon is removed before returning.
pub fn execute(args: &NotifyArgs, config: &Config) {
    let window = match HostWindow::new("shellbind", false) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: could not create window: {e}");
            std::process::exit(1);
        }
    };
    let icon = match shellbind_windows::application_icon() {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Error: could not load icon: {e}");
            std::process::exit(1);
        }
    };

    let shell = shellbind_windows::shell();
    let tray = &config.tray;
    let hwnd = window.handle();
    let tip = args.tip.as_deref().unwrap_or(&tray.tooltip);

    let added = NotifyIcon::new(hwnd, tray.id)
        .callback_message(TRAY_CALLBACK)
        .icon(icon)
        .tip(tip)
        .to_data();
    if !shell.notify_icon(NotifyMessage::Add, &added) {
        eprintln!("Error: the shell refused the tray icon.");
        std::process::exit(1);
    }

    let version = NotifyIconData::version(hwnd, tray.id, NOTIFYICON_VERSION_4);
    if !shell.notify_icon(NotifyMessage::SetVersion, &version) {
        log_warn!("tray icon kept the legacy callback format");
    }

    let kind = args.kind.unwrap_or(tray.kind);
    let balloon = Balloon {
        title: args.title.clone(),
        text: args.message.clone(),
        kind,
        silent: tray.silent,
        timeout_ms: tray.timeout_ms,
        icon: (kind == BalloonKind::User).then_some(icon),
    };
    let shown = NotifyIcon::new(hwnd, tray.id).balloon(balloon).to_data();
    if shell.notify_icon(NotifyMessage::Modify, &shown) {
        if let Err(e) = ctrl_c::quit_pump_on_ctrl_c() {
            log_warn!("Ctrl+C handler not installed: {e}");
        }
        window.run(|msg| {
            if msg.id != TRAY_CALLBACK {
                return None;
            }
            let event = msg.lparam_low();
            if event == NIN_BALLOONTIMEOUT || event == NIN_BALLOONUSERCLICK {
                log_info!("balloon closed (event {event:#x})");
                post_quit();
            }
            Some(0)
        });
    } else {
        eprintln!("Error: the shell refused the balloon.");
    }

    let removed = NotifyIconData::identify(hwnd, tray.id);
    shell.notify_icon(NotifyMessage::Delete, &removed);
}
