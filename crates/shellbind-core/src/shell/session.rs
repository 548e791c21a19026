use serde::Serialize;

use crate::api::Shell32;
use crate::handle::HDrop;
use crate::point::DropPoint;

use super::{DRAG_QUERY_COUNT, Shell};

/// A drop handle scoped to a block.
///
/// Calls `DragFinish` exactly once when dropped, on every exit path.
pub struct DropSession<'a, A: Shell32> {
    shell: &'a Shell<A>,
    hdrop: HDrop,
}

impl<'a, A: Shell32> DropSession<'a, A> {
    pub(super) fn new(shell: &'a Shell<A>, hdrop: HDrop) -> Self {
        Self { shell, hdrop }
    }

    pub fn handle(&self) -> HDrop {
        self.hdrop
    }

    /// Number of files in the drop.
    pub fn count(&self) -> u32 {
        self.shell.drag_query_file(self.hdrop, DRAG_QUERY_COUNT).1
    }

    /// Name of the file at `index`. Panics like [`Shell::drag_query_file`].
    pub fn file(&self, index: u32) -> String {
        self.shell.drag_query_file(self.hdrop, index).0
    }

    pub fn files(&self) -> Vec<String> {
        self.shell.dropped_files(self.hdrop)
    }

    pub fn point(&self) -> DropPoint {
        self.shell.drag_query_point(self.hdrop)
    }

    /// Collects everything the drop carries.
    pub fn report(&self) -> DropReport {
        DropReport {
            files: self.files(),
            point: self.point(),
        }
    }
}

impl<A: Shell32> Drop for DropSession<'_, A> {
    fn drop(&mut self) {
        self.shell.drag_finish(self.hdrop);
    }
}

/// The contents of one drop, as printed by `shellbind drop --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropReport {
    pub files: Vec<String>,
    pub point: DropPoint,
}

impl DropReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
