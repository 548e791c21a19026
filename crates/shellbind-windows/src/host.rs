//! A plain top-level window that receives shell callbacks.
//!
//! Drop targets get `WM_DROPFILES` and tray icons get their callback
//! message through a window procedure, so the CLI needs a window of its
//! own. Messages are forwarded to a handler installed for the duration of
//! [`HostWindow::run`].

use std::cell::RefCell;
use std::sync::Once;

use shellbind_core::{Hwnd, ShellResult, wide};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CW_USEDEFAULT, CreateWindowExW, DefWindowProcW, DestroyWindow, PostMessageW, PostQuitMessage,
    RegisterClassW, SW_SHOW, ShowWindow, WINDOW_EX_STYLE, WM_CLOSE, WM_DESTROY, WNDCLASSW,
    WS_OVERLAPPEDWINDOW,
};
use windows::core::PCWSTR;

use crate::message_pump;

/// A window message as seen by a [`HostWindow`] handler.
#[derive(Debug, Clone, Copy)]
pub struct HostMessage {
    pub hwnd: Hwnd,
    pub id: u32,
    pub wparam: usize,
    pub lparam: isize,
}

impl HostMessage {
    /// Low 16 bits of `lParam`, where tray events carry their `NIN_*` code.
    pub fn lparam_low(&self) -> u32 {
        (self.lparam as usize & 0xFFFF) as u32
    }
}

/// Returns `Some(result)` when the message was handled.
type Handler = Box<dyn FnMut(&HostMessage) -> Option<isize>>;

thread_local! {
    static HANDLER: RefCell<Option<Handler>> = const { RefCell::new(None) };
}

static REGISTER_CLASS: Once = Once::new();

fn class_name() -> &'static [u16] {
    static NAME: std::sync::OnceLock<Vec<u16>> = std::sync::OnceLock::new();
    NAME.get_or_init(|| wide::to_wide("ShellbindHost"))
}

fn ensure_class_registered() {
    REGISTER_CLASS.call_once(|| {
        let wc = WNDCLASSW {
            lpfnWndProc: Some(host_wnd_proc),
            lpszClassName: PCWSTR(class_name().as_ptr()),
            ..Default::default()
        };
        unsafe {
            RegisterClassW(&wc);
        }
    });
}

unsafe extern "system" fn host_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let message = HostMessage {
        hwnd: Hwnd(hwnd.0 as usize),
        id: msg,
        wparam: wparam.0,
        lparam: lparam.0,
    };

    // Messages sent re-entrantly while the handler runs go to the default
    // procedure.
    let handled = HANDLER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => slot.as_mut().and_then(|handler| handler(&message)),
        Err(_) => None,
    });
    if let Some(result) = handled {
        return LRESULT(result);
    }

    if msg == WM_DESTROY {
        unsafe { PostQuitMessage(0) };
        return LRESULT(0);
    }
    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

/// Ends [`HostWindow::run`] on the calling thread.
pub fn post_quit() {
    unsafe { PostQuitMessage(0) };
}

/// A top-level window owned by the calling thread.
pub struct HostWindow {
    hwnd: HWND,
}

impl HostWindow {
    /// Creates the window, shown or hidden.
    pub fn new(title: &str, visible: bool) -> ShellResult<Self> {
        ensure_class_registered();

        let title = wide::to_wide(title);
        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                PCWSTR(class_name().as_ptr()),
                PCWSTR(title.as_ptr()),
                WS_OVERLAPPEDWINDOW,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                480,
                320,
                None,
                None,
                None,
                None,
            )?
        };

        if visible {
            unsafe {
                let _ = ShowWindow(hwnd, SW_SHOW);
            }
        }

        Ok(Self { hwnd })
    }

    pub fn handle(&self) -> Hwnd {
        Hwnd(self.hwnd.0 as usize)
    }

    /// Asks the window to close, which ends [`run`](Self::run).
    pub fn close(&self) {
        unsafe {
            let _ = PostMessageW(Some(self.hwnd), WM_CLOSE, WPARAM(0), LPARAM(0));
        }
    }

    /// Pumps messages until `WM_QUIT`, passing each one to `handler` first.
    pub fn run<F>(&self, handler: F)
    where
        F: FnMut(&HostMessage) -> Option<isize> + 'static,
    {
        HANDLER.with(|cell| *cell.borrow_mut() = Some(Box::new(handler)));
        message_pump::run_message_pump();
        HANDLER.with(|cell| *cell.borrow_mut() = None);
    }
}

impl Drop for HostWindow {
    fn drop(&mut self) {
        unsafe {
            let _ = DestroyWindow(self.hwnd);
        }
    }
}
