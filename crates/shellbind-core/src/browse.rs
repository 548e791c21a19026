//! Folder-browse dialog configuration (`BROWSEINFOW`).

use std::marker::PhantomData;

use crate::handle::{Hwnd, IdList};
use crate::wide;

/// Capacity of the buffer used to convert an item list to a path.
pub const PATH_BUFFER_LEN: usize = 1024;

/// Capacity of the display-name buffer the dialog writes into (`MAX_PATH`).
pub const DISPLAY_NAME_LEN: usize = 260;

pub const BIF_RETURNONLYFSDIRS: u32 = 0x0000_0001;
pub const BIF_DONTGOBELOWDOMAIN: u32 = 0x0000_0002;
pub const BIF_STATUSTEXT: u32 = 0x0000_0004;
pub const BIF_RETURNFSANCESTORS: u32 = 0x0000_0008;
pub const BIF_EDITBOX: u32 = 0x0000_0010;
pub const BIF_VALIDATE: u32 = 0x0000_0020;
pub const BIF_NEWDIALOGSTYLE: u32 = 0x0000_0040;
pub const BIF_USENEWUI: u32 = BIF_NEWDIALOGSTYLE | BIF_EDITBOX;
pub const BIF_BROWSEINCLUDEURLS: u32 = 0x0000_0080;
pub const BIF_UAHINT: u32 = 0x0000_0100;
pub const BIF_NONEWFOLDERBUTTON: u32 = 0x0000_0200;
pub const BIF_NOTRANSLATETARGETS: u32 = 0x0000_0400;
pub const BIF_BROWSEFORCOMPUTER: u32 = 0x0000_1000;
pub const BIF_BROWSEFORPRINTER: u32 = 0x0000_2000;
pub const BIF_BROWSEINCLUDEFILES: u32 = 0x0000_4000;
pub const BIF_SHAREABLE: u32 = 0x0000_8000;
pub const BIF_BROWSEFILEJUNCTIONS: u32 = 0x0001_0000;

/// `BFFCALLBACK`: receives dialog events such as `BFFM_INITIALIZED`.
pub type BrowseCallback =
    unsafe extern "system" fn(hwnd: Hwnd, msg: u32, lparam: isize, data: isize) -> i32;

/// The native `BROWSEINFOW` record.
///
/// Field order, size, and alignment match the Windows SDK definition so a
/// pointer to this struct can be handed to `SHBrowseForFolderW` directly.
/// Values are only created by [`BrowseOptions::raw`], which guarantees the
/// string pointers stay valid for the lifetime `'a`.
#[repr(C)]
#[derive(Debug)]
pub struct BrowseInfo<'a> {
    owner: Hwnd,
    root: IdList,
    display_name: *mut u16,
    title: *const u16,
    flags: u32,
    callback: Option<BrowseCallback>,
    callback_data: isize,
    image: i32,
    _buffers: PhantomData<&'a mut [u16]>,
}

impl BrowseInfo<'_> {
    pub fn owner(&self) -> Hwnd {
        self.owner
    }

    pub fn flags(&self) -> u32 {
        self.flags
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_null()
    }

    /// The image index written by the dialog.
    pub fn image(&self) -> i32 {
        self.image
    }

    /// Sets the image index, as the dialog does on return.
    pub fn set_image(&mut self, image: i32) {
        self.image = image;
    }

    /// The display-name buffer the dialog fills in.
    pub fn display_name_mut(&mut self) -> &mut [u16] {
        // SAFETY: `display_name` points at the `DISPLAY_NAME_LEN` buffer owned
        // by the `BrowseOptions` this record borrows mutably for `'a`.
        unsafe { std::slice::from_raw_parts_mut(self.display_name, DISPLAY_NAME_LEN) }
    }
}

/// Caller-owned configuration for the folder-browse dialog.
///
/// Holds the UTF-16 buffers the native record points into. After the
/// dialog returns, [`display_name`](Self::display_name) and
/// [`image`](Self::image) report what the dialog wrote.
#[derive(Debug, Clone)]
pub struct BrowseOptions {
    pub owner: Hwnd,
    pub root: IdList,
    pub flags: u32,
    pub callback: Option<BrowseCallback>,
    pub callback_data: isize,
    title: Option<Vec<u16>>,
    display_name: Vec<u16>,
    image: i32,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            owner: Hwnd::NULL,
            root: IdList::NULL,
            flags: BIF_RETURNONLYFSDIRS | BIF_NEWDIALOGSTYLE,
            callback: None,
            callback_data: 0,
            title: None,
            display_name: vec![0; DISPLAY_NAME_LEN],
            image: 0,
        }
    }
}

impl BrowseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the instruction text shown above the tree. Empty means none.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = wide::to_wide_opt(title);
        self
    }

    pub fn with_owner(mut self, owner: Hwnd) -> Self {
        self.owner = owner;
        self
    }

    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    /// Builds the native record pointing into this configuration's buffers.
    pub fn raw(&mut self) -> BrowseInfo<'_> {
        BrowseInfo {
            owner: self.owner,
            root: self.root,
            display_name: self.display_name.as_mut_ptr(),
            title: self
                .title
                .as_ref()
                .map_or(std::ptr::null(), |t| t.as_ptr()),
            flags: self.flags,
            callback: self.callback,
            callback_data: self.callback_data,
            image: self.image,
            _buffers: PhantomData,
        }
    }

    /// Records the image index the dialog returned.
    pub(crate) fn set_image(&mut self, image: i32) {
        self.image = image;
    }

    /// Display name of the selected item (not a full path).
    pub fn display_name(&self) -> String {
        wide::from_wide(&self.display_name)
    }

    /// System image-list index of the selected item's icon.
    pub fn image(&self) -> i32 {
        self.image
    }
}
