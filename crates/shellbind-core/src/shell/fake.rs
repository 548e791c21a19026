//! A recording `Shell32` used by the wrapper tests.

use std::cell::{Cell, RefCell};

use crate::api::Shell32;
use crate::browse::BrowseInfo;
use crate::handle::{HDrop, HIcon, HInstance, Hwnd, IdList};
use crate::notify::NotifyIconData;
use crate::point::Point;
use crate::wide;

use super::DRAG_QUERY_COUNT;

/// One native call as the fake saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Browse {
        has_title: bool,
        flags: u32,
    },
    PathFromIdList(IdList, usize),
    FreeIdList(IdList),
    DragAcceptFiles(Hwnd, i32),
    DragQueryFile {
        index: u32,
        buffer: Option<usize>,
    },
    DragQueryPoint,
    DragFinish(HDrop),
    ShellExecute {
        operation: Option<String>,
        file: String,
        parameters: Option<String>,
        directory: Option<String>,
        show: i32,
    },
    ExtractIcon(HInstance, String, u32),
    NotifyIcon(u32, u32),
}

#[derive(Default)]
pub struct FakeShell {
    pub calls: RefCell<Vec<Call>>,
    pub files: Vec<String>,
    pub drop_point: Point,
    pub drop_point_result: i32,
    pub execute_result: usize,
    pub icon: HIcon,
    pub notify_result: i32,
    pub browse_result: IdList,
    pub browse_display_name: String,
    pub browse_image: i32,
    pub path: String,
    /// Makes the next copying `DragQueryFileW` call report failure.
    pub fail_copy: Cell<bool>,
}

impl FakeShell {
    pub fn with_files(files: &[&str]) -> Self {
        Self {
            files: files.iter().map(|f| f.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

fn opt_string(s: Option<&[u16]>) -> Option<String> {
    s.map(wide::from_wide)
}

impl Shell32 for FakeShell {
    fn browse_for_folder(&self, info: &mut BrowseInfo<'_>) -> IdList {
        self.record(Call::Browse {
            has_title: info.has_title(),
            flags: info.flags(),
        });
        wide::copy_truncated(&self.browse_display_name, info.display_name_mut());
        info.set_image(self.browse_image);
        self.browse_result
    }

    fn path_from_id_list(&self, idl: IdList, buf: &mut [u16]) -> i32 {
        self.record(Call::PathFromIdList(idl, buf.len()));
        // SHGetPathFromIDListEx fails rather than truncating.
        if self.path.is_empty() || self.path.encode_utf16().count() >= buf.len() {
            buf.fill(0);
            return 0;
        }
        wide::copy_truncated(&self.path, buf);
        1
    }

    fn free_id_list(&self, idl: IdList) {
        self.record(Call::FreeIdList(idl));
    }

    fn drag_accept_files(&self, hwnd: Hwnd, accept: i32) {
        self.record(Call::DragAcceptFiles(hwnd, accept));
    }

    fn drag_query_file(&self, _hdrop: HDrop, index: u32, buf: Option<&mut [u16]>) -> u32 {
        self.record(Call::DragQueryFile {
            index,
            buffer: buf.as_ref().map(|b| b.len()),
        });

        if index == DRAG_QUERY_COUNT {
            return self.files.len() as u32;
        }
        let Some(name) = self.files.get(index as usize) else {
            return 0;
        };
        let units: Vec<u16> = name.encode_utf16().collect();
        match buf {
            None => units.len() as u32,
            Some(_) if self.fail_copy.replace(false) => 0,
            Some(buf) => {
                let n = units.len().min(buf.len().saturating_sub(1));
                buf[..n].copy_from_slice(&units[..n]);
                buf[n] = 0;
                n as u32
            }
        }
    }

    fn drag_query_point(&self, _hdrop: HDrop, point: &mut Point) -> i32 {
        self.record(Call::DragQueryPoint);
        *point = self.drop_point;
        self.drop_point_result
    }

    fn drag_finish(&self, hdrop: HDrop) {
        self.record(Call::DragFinish(hdrop));
    }

    fn shell_execute(
        &self,
        _hwnd: Hwnd,
        operation: Option<&[u16]>,
        file: &[u16],
        parameters: Option<&[u16]>,
        directory: Option<&[u16]>,
        show: i32,
    ) -> usize {
        self.record(Call::ShellExecute {
            operation: opt_string(operation),
            file: wide::from_wide(file),
            parameters: opt_string(parameters),
            directory: opt_string(directory),
            show,
        });
        self.execute_result
    }

    fn extract_icon(&self, instance: HInstance, path: &[u16], index: u32) -> HIcon {
        self.record(Call::ExtractIcon(instance, wide::from_wide(path), index));
        self.icon
    }

    fn shell_notify_icon(&self, message: u32, data: &NotifyIconData) -> i32 {
        self.record(Call::NotifyIcon(message, data.id));
        self.notify_result
    }
}
