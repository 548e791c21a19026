use crate::browse::BrowseInfo;
use crate::handle::{HDrop, HIcon, HInstance, Hwnd, IdList};
use crate::notify::NotifyIconData;
use crate::point::Point;

/// The raw `shell32.dll` entry points, one method per export.
///
/// Arguments are already in native form: NUL-terminated UTF-16, `BOOL`
/// as `i32`, `None` for a null string pointer. Return values are passed
/// through untouched. The platform crate implements this over the real
/// DLL; [`crate::Shell`] layers the caller-facing conversions on top.
pub trait Shell32 {
    /// `SHBrowseForFolderW`. Returns the null item list on cancel.
    fn browse_for_folder(&self, info: &mut BrowseInfo<'_>) -> IdList;

    /// `SHGetPathFromIDListEx` into a caller-sized buffer. Returns `BOOL`.
    fn path_from_id_list(&self, idl: IdList, buf: &mut [u16]) -> i32;

    /// `CoTaskMemFree` for an item list returned by the dialog.
    fn free_id_list(&self, idl: IdList);

    /// `DragAcceptFiles`.
    fn drag_accept_files(&self, hwnd: Hwnd, accept: i32);

    /// `DragQueryFileW`. With no buffer, returns the required length (or
    /// the file count for the `0xFFFFFFFF` index); with a buffer, returns
    /// the number of units copied.
    fn drag_query_file(&self, hdrop: HDrop, index: u32, buf: Option<&mut [u16]>) -> u32;

    /// `DragQueryPoint`. Returns `1` for a client-area drop.
    fn drag_query_point(&self, hdrop: HDrop, point: &mut Point) -> i32;

    /// `DragFinish`.
    fn drag_finish(&self, hdrop: HDrop);

    /// `ShellExecuteW`. Returns the raw `HINSTANCE` value.
    fn shell_execute(
        &self,
        hwnd: Hwnd,
        operation: Option<&[u16]>,
        file: &[u16],
        parameters: Option<&[u16]>,
        directory: Option<&[u16]>,
        show: i32,
    ) -> usize;

    /// `ExtractIconW`.
    fn extract_icon(&self, instance: HInstance, path: &[u16], index: u32) -> HIcon;

    /// `Shell_NotifyIconW`. Returns `BOOL`.
    fn shell_notify_icon(&self, message: u32, data: &NotifyIconData) -> i32;
}
