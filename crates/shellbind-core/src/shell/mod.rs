//! Caller-facing shell operations.
//!
//! [`Shell`] wraps a [`Shell32`] implementation and does the boundary
//! conversions: strings to UTF-16, `bool` to `BOOL`, empty optional
//! strings to null, and raw results to `Option`/`Result`/`String`.
//! Every call is a synchronous pass-through on the calling thread.

mod session;

use crate::api::Shell32;
use crate::browse::{BrowseOptions, PATH_BUFFER_LEN};
use crate::execute::{self, ExecuteError, ShowCommand};
use crate::handle::{self, HDrop, HIcon, HInstance, Hwnd, IdList};
use crate::notify::{NotifyIconData, NotifyMessage};
use crate::point::{DropPoint, Point};
use crate::wide;

pub use session::{DropReport, DropSession};

/// `DragQueryFileW` index that asks for the number of dropped files.
pub const DRAG_QUERY_COUNT: u32 = 0xFFFF_FFFF;

/// Shell operations over a set of native entry points.
#[derive(Debug, Default, Clone)]
pub struct Shell<A> {
    api: A,
}

impl<A: Shell32> Shell<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Returns the underlying entry points.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Shows the modal folder-browse dialog and blocks until it closes.
    ///
    /// Returns `None` if the user cancelled. The returned item list must be
    /// released with [`free_id_list`](Self::free_id_list). The dialog's
    /// display name and image index are written back into `options`.
    pub fn browse_for_folder(&self, options: &mut BrowseOptions) -> Option<IdList> {
        let mut info = options.raw();
        let idl = self.api.browse_for_folder(&mut info);
        let image = info.image();
        options.set_image(image);

        crate::log_debug!("SHBrowseForFolderW -> {idl:#x}");
        idl.non_null()
    }

    /// Converts an item list to a file-system path.
    ///
    /// Uses a fixed [`PATH_BUFFER_LEN`] buffer. Whatever the native call
    /// leaves in the buffer is returned, so a failed conversion yields an
    /// empty string.
    pub fn path_from_id_list(&self, idl: IdList) -> String {
        let mut buf = vec![0u16; PATH_BUFFER_LEN];
        let ok = self.api.path_from_id_list(idl, &mut buf);
        crate::log_debug!("SHGetPathFromIDListEx {idl:#x} -> {ok}");
        wide::from_wide(&buf)
    }

    /// Releases an item list returned by [`browse_for_folder`](Self::browse_for_folder).
    pub fn free_id_list(&self, idl: IdList) {
        if !idl.is_null() {
            crate::log_debug!("CoTaskMemFree {idl:#x}");
            self.api.free_id_list(idl);
        }
    }

    /// Browses for a folder and returns its path, releasing the item list.
    ///
    /// Returns `None` on cancel or when the selection has no file-system
    /// path (for example "This PC").
    pub fn browse_for_path(&self, options: &mut BrowseOptions) -> Option<String> {
        let idl = self.browse_for_folder(options)?;
        let path = self.path_from_id_list(idl);
        self.free_id_list(idl);
        if path.is_empty() { None } else { Some(path) }
    }

    /// Registers or unregisters a window as a drop target.
    pub fn drag_accept_files(&self, hwnd: Hwnd, accept: bool) {
        crate::log_debug!("DragAcceptFiles {hwnd:#x} accept={accept}");
        self.api.drag_accept_files(hwnd, handle::to_bool32(accept));
    }

    /// Queries a drop for its file count and, optionally, one file name.
    ///
    /// With `index == DRAG_QUERY_COUNT` this returns `(String::new(), count)`
    /// after a single native call and never reads a name. With any other
    /// index it returns that file's name together with the total count.
    ///
    /// # Panics
    ///
    /// Panics if the native call fails to copy the name of a non-sentinel
    /// index. An out-of-range index is treated as a programming error.
    pub fn drag_query_file(&self, hdrop: HDrop, index: u32) -> (String, u32) {
        let count = self.api.drag_query_file(hdrop, DRAG_QUERY_COUNT, None);
        crate::log_debug!("DragQueryFileW {hdrop:#x} index={index:#x} count={count}");
        if index == DRAG_QUERY_COUNT {
            return (String::new(), count);
        }

        let len = self.api.drag_query_file(hdrop, index, None);
        let mut buf = vec![0u16; len as usize + 1];
        let copied = self.api.drag_query_file(hdrop, index, Some(&mut buf));
        if copied == 0 {
            panic!("DragQueryFileW failed for file {index} of {count}");
        }

        (wide::from_wide(&buf), count)
    }

    /// Returns the names of every file in a drop.
    pub fn dropped_files(&self, hdrop: HDrop) -> Vec<String> {
        let (_, count) = self.drag_query_file(hdrop, DRAG_QUERY_COUNT);
        crate::log_debug!("collecting {count} dropped file(s) from {hdrop:#x}");
        (0..count)
            .map(|i| self.drag_query_file(hdrop, i).0)
            .collect()
    }

    /// Returns where a drop happened and whether it hit the client area.
    pub fn drag_query_point(&self, hdrop: HDrop) -> DropPoint {
        let mut point = Point::default();
        let raw = self.api.drag_query_point(hdrop, &mut point);
        crate::log_debug!("DragQueryPoint {hdrop:#x} -> ({}, {}) raw={raw}", point.x, point.y);
        DropPoint::from_raw(point, raw)
    }

    /// Releases a drop handle. Call exactly once per handle.
    pub fn drag_finish(&self, hdrop: HDrop) {
        crate::log_debug!("DragFinish {hdrop:#x}");
        self.api.drag_finish(hdrop);
    }

    /// Wraps a drop handle in a guard that calls
    /// [`drag_finish`](Self::drag_finish) when it goes out of scope.
    pub fn drop_session(&self, hdrop: HDrop) -> DropSession<'_, A> {
        DropSession::new(self, hdrop)
    }

    /// Opens a file, URL, or command through the shell.
    ///
    /// Empty `verb`, `parameters`, and `directory` are passed as null so the
    /// shell applies its defaults (the default verb, no arguments, the
    /// current directory).
    pub fn shell_execute(
        &self,
        hwnd: Hwnd,
        verb: &str,
        file: &str,
        parameters: &str,
        directory: &str,
        show: ShowCommand,
    ) -> Result<(), ExecuteError> {
        let verb_w = wide::to_wide_opt(verb);
        let file_w = wide::to_wide(file);
        let params_w = wide::to_wide_opt(parameters);
        let dir_w = wide::to_wide_opt(directory);

        let raw = self.api.shell_execute(
            hwnd,
            verb_w.as_deref(),
            &file_w,
            params_w.as_deref(),
            dir_w.as_deref(),
            show.as_raw(),
        );
        crate::log_debug!("ShellExecuteW {file:?} verb={verb:?} -> {raw:#x}");

        execute::check_instance(raw).inspect_err(|e| {
            crate::log_warn!("ShellExecuteW {file:?} failed: {e} (code {})", e.code());
        })
    }

    /// Extracts an icon from an executable, DLL, or `.ico` file.
    ///
    /// Returns `None` when the native call returns null. The icon belongs
    /// to the caller, who must destroy it.
    pub fn extract_icon(&self, path: &str, index: u32) -> Option<HIcon> {
        let path_w = wide::to_wide(path);
        let icon = self.api.extract_icon(HInstance::NULL, &path_w, index);
        crate::log_debug!("ExtractIconW {path:?}[{index}] -> {icon:#x}");
        icon.non_null()
    }

    /// Sends a message to the notification area. Returns the native
    /// success flag only.
    pub fn notify_icon(&self, message: NotifyMessage, data: &NotifyIconData) -> bool {
        let ok = handle::from_bool32(self.api.shell_notify_icon(message.as_raw(), data));
        crate::log_debug!("Shell_NotifyIconW {message:?} id={} -> {ok}", data.id);
        ok
    }
}

#[cfg(test)]
mod fake;
