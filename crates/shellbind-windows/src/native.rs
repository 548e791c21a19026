use std::ffi::c_void;

use shellbind_core::{
    BrowseInfo, HDrop, HIcon, HInstance, Hwnd, IdList, NotifyIconData, Point, Shell, Shell32,
};
use windows::Win32::Foundation::{HINSTANCE, HWND, POINT};
use windows::Win32::System::Com::CoTaskMemFree;
use windows::Win32::UI::Shell::Common::ITEMIDLIST;
use windows::Win32::UI::Shell::{
    BROWSEINFOW, DragAcceptFiles, DragFinish, DragQueryFileW, DragQueryPoint, ExtractIconW,
    GPFIDL_DEFAULT, HDROP, NOTIFY_ICON_MESSAGE, NOTIFYICONDATAW, SHBrowseForFolderW,
    SHGetPathFromIDListEx, Shell_NotifyIconW, ShellExecuteW,
};
use windows::Win32::UI::WindowsAndMessaging::SHOW_WINDOW_CMD;
use windows::core::PCWSTR;

// The core layouts are handed to shell32 by pointer; they must match the SDK.
const _: () = assert!(size_of::<BrowseInfo<'static>>() == size_of::<BROWSEINFOW>());
const _: () = assert!(align_of::<BrowseInfo<'static>>() == align_of::<BROWSEINFOW>());
const _: () = assert!(size_of::<NotifyIconData>() == size_of::<NOTIFYICONDATAW>());
const _: () = assert!(align_of::<NotifyIconData>() == align_of::<NOTIFYICONDATAW>());
const _: () = assert!(size_of::<Point>() == size_of::<POINT>());

/// The real `shell32.dll` entry points.
#[derive(Debug, Default, Clone, Copy)]
pub struct Native;

/// Returns a [`Shell`] backed by `shell32.dll`.
pub fn shell() -> Shell<Native> {
    Shell::new(Native)
}

pub(crate) fn hwnd(h: Hwnd) -> HWND {
    HWND(h.0 as *mut c_void)
}

fn optional_hwnd(h: Hwnd) -> Option<HWND> {
    h.non_null().map(hwnd)
}

fn hdrop(h: HDrop) -> HDROP {
    HDROP(h.0 as *mut c_void)
}

fn pcwstr(s: Option<&[u16]>) -> PCWSTR {
    s.map_or(PCWSTR::null(), |w| PCWSTR(w.as_ptr()))
}

impl Shell32 for Native {
    fn browse_for_folder(&self, info: &mut BrowseInfo<'_>) -> IdList {
        // SAFETY: BrowseInfo has the BROWSEINFOW layout (asserted above) and
        // its string pointers borrow live buffers for the duration of the call.
        let pidl = unsafe { SHBrowseForFolderW(info as *mut BrowseInfo<'_> as *const BROWSEINFOW) };
        IdList(pidl as usize)
    }

    fn path_from_id_list(&self, idl: IdList, buf: &mut [u16]) -> i32 {
        // SAFETY: `idl` came from SHBrowseForFolderW and has not been freed;
        // the buffer length is passed along with the pointer.
        unsafe { SHGetPathFromIDListEx(idl.0 as *const ITEMIDLIST, buf, GPFIDL_DEFAULT).0 }
    }

    fn free_id_list(&self, idl: IdList) {
        // SAFETY: item lists returned by the shell are allocated with the
        // COM task allocator and released exactly once by the caller.
        unsafe { CoTaskMemFree(Some(idl.0 as *const c_void)) }
    }

    fn drag_accept_files(&self, window: Hwnd, accept: i32) {
        // SAFETY: DragAcceptFiles only updates the window's extended style.
        unsafe { DragAcceptFiles(hwnd(window), accept != 0) }
    }

    fn drag_query_file(&self, handle: HDrop, index: u32, buf: Option<&mut [u16]>) -> u32 {
        // SAFETY: the drop handle is live until DragFinish; the buffer, when
        // present, is passed with its length.
        unsafe { DragQueryFileW(hdrop(handle), index, buf) }
    }

    fn drag_query_point(&self, handle: HDrop, point: &mut Point) -> i32 {
        // SAFETY: Point has the POINT layout (asserted above).
        unsafe { DragQueryPoint(hdrop(handle), point as *mut Point as *mut POINT).0 }
    }

    fn drag_finish(&self, handle: HDrop) {
        // SAFETY: releases the drop handle; the caller does not use it again.
        unsafe { DragFinish(hdrop(handle)) }
    }

    fn shell_execute(
        &self,
        window: Hwnd,
        operation: Option<&[u16]>,
        file: &[u16],
        parameters: Option<&[u16]>,
        directory: Option<&[u16]>,
        show: i32,
    ) -> usize {
        // SAFETY: every string is NUL-terminated UTF-16 that outlives the
        // call; absent strings are null pointers.
        let instance = unsafe {
            ShellExecuteW(
                optional_hwnd(window),
                pcwstr(operation),
                PCWSTR(file.as_ptr()),
                pcwstr(parameters),
                pcwstr(directory),
                SHOW_WINDOW_CMD(show),
            )
        };
        instance.0 as usize
    }

    fn extract_icon(&self, instance: HInstance, path: &[u16], index: u32) -> HIcon {
        let instance = instance
            .non_null()
            .map(|h| HINSTANCE(h.0 as *mut c_void));
        // SAFETY: `path` is NUL-terminated UTF-16 that outlives the call.
        let icon = unsafe { ExtractIconW(instance, PCWSTR(path.as_ptr()), index) };
        HIcon(icon.0 as usize)
    }

    fn shell_notify_icon(&self, message: u32, data: &NotifyIconData) -> i32 {
        // SAFETY: NotifyIconData has the NOTIFYICONDATAW layout (asserted
        // above) and `size` is set to the full structure size.
        unsafe {
            Shell_NotifyIconW(
                NOTIFY_ICON_MESSAGE(message),
                data as *const NotifyIconData as *const NOTIFYICONDATAW,
            )
            .0
        }
    }
}
