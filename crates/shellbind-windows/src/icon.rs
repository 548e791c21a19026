//! Icon helpers that sit outside the shell32 binding.

use std::ffi::c_void;

use shellbind_core::{HIcon, ShellResult};
use windows::Win32::UI::WindowsAndMessaging::{DestroyIcon, HICON, IDI_APPLICATION, LoadIconW};

/// Destroys an icon returned by `ExtractIconW`.
///
/// Do not call this on shared icons such as [`application_icon`].
pub fn destroy_icon(icon: HIcon) -> ShellResult<()> {
    // SAFETY: the caller owns the icon and does not use it afterwards.
    unsafe { DestroyIcon(HICON(icon.0 as *mut c_void))? };
    Ok(())
}

/// Returns the stock application icon. Shared; never destroy it.
pub fn application_icon() -> ShellResult<HIcon> {
    let icon = unsafe { LoadIconW(None, IDI_APPLICATION)? };
    Ok(HIcon(icon.0 as usize))
}
