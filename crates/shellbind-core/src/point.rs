use serde::Serialize;

/// A point in window coordinates, laid out like the Win32 `POINT`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Where a drop happened, as reported by `DragQueryPoint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DropPoint {
    /// Drop position relative to the target window.
    pub point: Point,
    /// True only when the native call reported exactly `1` (client area).
    pub in_client_area: bool,
}

impl DropPoint {
    /// Builds a drop point from the raw `DragQueryPoint` result.
    pub fn from_raw(point: Point, raw: i32) -> Self {
        Self {
            point,
            in_client_area: raw == 1,
        }
    }
}
