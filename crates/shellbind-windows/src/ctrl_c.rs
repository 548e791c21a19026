//! Ctrl+C handling for commands that run a message pump.
//!
//! The console control handler runs on its own thread, so it ends the
//! pump by posting `WM_QUIT` to the thread that registered it.

use std::sync::OnceLock;

use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::System::Console::{CTRL_BREAK_EVENT, CTRL_C_EVENT, SetConsoleCtrlHandler};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{PostThreadMessageW, WM_QUIT};

/// Thread whose message pump is stopped on Ctrl+C.
static PUMP_THREAD: OnceLock<u32> = OnceLock::new();

/// Makes Ctrl+C quit the message pump running on the current thread.
///
/// Only the first registration takes effect.
pub fn quit_pump_on_ctrl_c() -> shellbind_core::ShellResult<()> {
    let thread = unsafe { GetCurrentThreadId() };
    if PUMP_THREAD.set(thread).is_err() {
        return Ok(());
    }
    unsafe { SetConsoleCtrlHandler(Some(handler), true)? };
    Ok(())
}

unsafe extern "system" fn handler(ctrl_type: u32) -> windows::core::BOOL {
    if (ctrl_type == CTRL_C_EVENT || ctrl_type == CTRL_BREAK_EVENT)
        && let Some(&thread) = PUMP_THREAD.get()
    {
        unsafe {
            let _ = PostThreadMessageW(thread, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        return windows::core::BOOL(1);
    }
    windows::core::BOOL(0)
}
