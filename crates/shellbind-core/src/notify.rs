//! Notification-area (tray) icon descriptor (`NOTIFYICONDATAW`).
//!
//! The shell owns everything about how the icon and its balloon behave.
//! With `NOTIFYICON_VERSION_4` the shell reports events through the
//! callback message, with the event code in the low word of `lParam`:
//!
//! - `NIN_BALLOONSHOW` when a balloon is shown (balloons are queued).
//! - `NIN_BALLOONHIDE` when a balloon disappears because the icon was
//!   deleted. Not sent on timeout or click.
//! - `NIN_BALLOONTIMEOUT` when a balloon times out.
//! - `NIN_BALLOONUSERCLICK` when the user clicks a balloon away.
//! - `NIN_SELECT` / `NIN_KEYSELECT` when the icon is activated by mouse
//!   or keyboard, and `WM_CONTEXTMENU` for its context menu.

use serde::{Deserialize, Serialize};

use crate::handle::{HIcon, Hwnd};
use crate::wide;

pub const NIF_MESSAGE: u32 = 0x0000_0001;
pub const NIF_ICON: u32 = 0x0000_0002;
pub const NIF_TIP: u32 = 0x0000_0004;
pub const NIF_STATE: u32 = 0x0000_0008;
pub const NIF_INFO: u32 = 0x0000_0010;
pub const NIF_GUID: u32 = 0x0000_0020;
pub const NIF_REALTIME: u32 = 0x0000_0040;
pub const NIF_SHOWTIP: u32 = 0x0000_0080;

pub const NIS_HIDDEN: u32 = 0x0000_0001;
pub const NIS_SHAREDICON: u32 = 0x0000_0002;

pub const NIIF_NONE: u32 = 0x0000_0000;
pub const NIIF_INFO: u32 = 0x0000_0001;
pub const NIIF_WARNING: u32 = 0x0000_0002;
pub const NIIF_ERROR: u32 = 0x0000_0003;
pub const NIIF_USER: u32 = 0x0000_0004;
pub const NIIF_NOSOUND: u32 = 0x0000_0010;
pub const NIIF_LARGE_ICON: u32 = 0x0000_0020;
pub const NIIF_RESPECT_QUIET_TIME: u32 = 0x0000_0080;

pub const NOTIFYICON_VERSION: u32 = 3;
pub const NOTIFYICON_VERSION_4: u32 = 4;

const WM_USER: u32 = 0x0400;
pub const NIN_SELECT: u32 = WM_USER;
pub const NIN_KEYSELECT: u32 = WM_USER + 1;
pub const NIN_BALLOONSHOW: u32 = WM_USER + 2;
pub const NIN_BALLOONHIDE: u32 = WM_USER + 3;
pub const NIN_BALLOONTIMEOUT: u32 = WM_USER + 4;
pub const NIN_BALLOONUSERCLICK: u32 = WM_USER + 5;
pub const NIN_POPUPOPEN: u32 = WM_USER + 6;
pub const NIN_POPUPCLOSE: u32 = WM_USER + 7;

/// Capacity of `szTip`, including the NUL.
pub const TIP_LEN: usize = 128;
/// Capacity of `szInfo`, including the NUL.
pub const INFO_LEN: usize = 256;
/// Capacity of `szInfoTitle`, including the NUL.
pub const INFO_TITLE_LEN: usize = 64;

/// The `dwMessage` argument of `Shell_NotifyIconW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyMessage {
    Add,
    Modify,
    Delete,
    SetFocus,
    SetVersion,
}

impl NotifyMessage {
    pub fn as_raw(self) -> u32 {
        match self {
            Self::Add => 0,
            Self::Modify => 1,
            Self::Delete => 2,
            Self::SetFocus => 3,
            Self::SetVersion => 4,
        }
    }
}

/// A COM `GUID`, laid out like the native struct.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    pub const fn from_u128(uuid: u128) -> Self {
        Self {
            data1: (uuid >> 96) as u32,
            data2: ((uuid >> 80) & 0xFFFF) as u16,
            data3: ((uuid >> 64) & 0xFFFF) as u16,
            data4: (uuid as u64).to_be_bytes(),
        }
    }
}

/// The native `NOTIFYICONDATAW` descriptor.
///
/// Field order, size, and alignment match the Windows SDK definition
/// (976 bytes on 64-bit targets, 956 on 32-bit). `size` is preset to the
/// full structure size. Nothing here is validated; the shell interprets
/// the fields according to `flags`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyIconData {
    pub size: u32,
    pub hwnd: Hwnd,
    pub id: u32,
    pub flags: u32,
    pub callback_message: u32,
    pub icon: HIcon,
    pub tip: [u16; TIP_LEN],
    pub state: u32,
    pub state_mask: u32,
    pub info: [u16; INFO_LEN],
    /// `uTimeout` for balloons, `uVersion` for `NIM_SETVERSION` (a union).
    pub timeout_or_version: u32,
    pub info_title: [u16; INFO_TITLE_LEN],
    pub info_flags: u32,
    pub guid: Guid,
    pub balloon_icon: HIcon,
}

impl Default for NotifyIconData {
    fn default() -> Self {
        Self {
            size: size_of::<Self>() as u32,
            hwnd: Hwnd::NULL,
            id: 0,
            flags: 0,
            callback_message: 0,
            icon: HIcon::NULL,
            tip: [0; TIP_LEN],
            state: 0,
            state_mask: 0,
            info: [0; INFO_LEN],
            timeout_or_version: 0,
            info_title: [0; INFO_TITLE_LEN],
            info_flags: 0,
            guid: Guid::default(),
            balloon_icon: HIcon::NULL,
        }
    }
}

impl NotifyIconData {
    /// A descriptor that identifies an icon by window and id only, as
    /// needed for `NIM_DELETE`.
    pub fn identify(hwnd: Hwnd, id: u32) -> Self {
        Self {
            hwnd,
            id,
            ..Self::default()
        }
    }

    /// A descriptor for `NIM_SETVERSION`.
    pub fn version(hwnd: Hwnd, id: u32, version: u32) -> Self {
        Self {
            timeout_or_version: version,
            ..Self::identify(hwnd, id)
        }
    }

    pub fn set_tip(&mut self, tip: &str) {
        wide::copy_truncated(tip, &mut self.tip);
    }

    pub fn set_info(&mut self, info: &str) {
        wide::copy_truncated(info, &mut self.info);
    }

    pub fn set_info_title(&mut self, title: &str) {
        wide::copy_truncated(title, &mut self.info_title);
    }

    pub fn tip(&self) -> String {
        wide::from_wide(&self.tip)
    }

    pub fn info(&self) -> String {
        wide::from_wide(&self.info)
    }

    pub fn info_title(&self) -> String {
        wide::from_wide(&self.info_title)
    }
}

/// The standard icon shown in a balloon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalloonKind {
    None,
    #[default]
    Info,
    Warning,
    Error,
    /// Uses the balloon icon supplied in the descriptor.
    User,
}

impl BalloonKind {
    /// Parses a lowercase name such as `"warning"`, as written in config.
    pub fn from_name(name: &str) -> Option<Self> {
        crate::config::parse_name(name)
    }

    pub fn info_flags(self) -> u32 {
        match self {
            Self::None => NIIF_NONE,
            Self::Info => NIIF_INFO,
            Self::Warning => NIIF_WARNING,
            Self::Error => NIIF_ERROR,
            Self::User => NIIF_USER,
        }
    }
}

/// Balloon notification content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Balloon {
    pub title: String,
    pub text: String,
    pub kind: BalloonKind,
    pub silent: bool,
    /// Ignored by the shell since Vista; it uses accessibility settings.
    pub timeout_ms: u32,
    pub icon: Option<HIcon>,
}

/// Builds a [`NotifyIconData`], setting `NIF_*` flags for the fields given.
#[derive(Debug, Clone, Default)]
pub struct NotifyIcon {
    pub hwnd: Hwnd,
    pub id: u32,
    pub callback_message: Option<u32>,
    pub icon: Option<HIcon>,
    pub tip: Option<String>,
    pub show_tip: bool,
    pub balloon: Option<Balloon>,
    pub guid: Option<Guid>,
    pub hidden: Option<bool>,
}

impl NotifyIcon {
    pub fn new(hwnd: Hwnd, id: u32) -> Self {
        Self {
            hwnd,
            id,
            ..Self::default()
        }
    }

    pub fn callback_message(mut self, message: u32) -> Self {
        self.callback_message = Some(message);
        self
    }

    pub fn icon(mut self, icon: HIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    pub fn balloon(mut self, balloon: Balloon) -> Self {
        self.balloon = Some(balloon);
        self
    }

    pub fn guid(mut self, guid: Guid) -> Self {
        self.guid = Some(guid);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    /// Fills the native descriptor.
    pub fn to_data(&self) -> NotifyIconData {
        let mut data = NotifyIconData::identify(self.hwnd, self.id);

        if let Some(message) = self.callback_message {
            data.flags |= NIF_MESSAGE;
            data.callback_message = message;
        }
        if let Some(icon) = self.icon {
            data.flags |= NIF_ICON;
            data.icon = icon;
        }
        if let Some(tip) = &self.tip {
            data.flags |= NIF_TIP;
            data.set_tip(tip);
        }
        if self.show_tip {
            data.flags |= NIF_SHOWTIP;
        }
        if let Some(balloon) = &self.balloon {
            data.flags |= NIF_INFO;
            data.set_info_title(&balloon.title);
            data.set_info(&balloon.text);
            data.timeout_or_version = balloon.timeout_ms;
            data.info_flags = balloon.kind.info_flags();
            if balloon.silent {
                data.info_flags |= NIIF_NOSOUND;
            }
            if let Some(icon) = balloon.icon {
                data.balloon_icon = icon;
            }
        }
        if let Some(guid) = self.guid {
            data.flags |= NIF_GUID;
            data.guid = guid;
        }
        if let Some(hidden) = self.hidden {
            data.flags |= NIF_STATE;
            data.state_mask = NIS_HIDDEN;
            data.state = if hidden { NIS_HIDDEN } else { 0 };
        }

        data
    }
}

#[cfg(test)]
mod tests {
    use std::mem::offset_of;

    use super::*;

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn descriptor_matches_native_layout_x64() {
        // Assert
        assert_eq!(size_of::<NotifyIconData>(), 976);
        assert_eq!(offset_of!(NotifyIconData, hwnd), 8);
        assert_eq!(offset_of!(NotifyIconData, icon), 32);
        assert_eq!(offset_of!(NotifyIconData, tip), 40);
        assert_eq!(offset_of!(NotifyIconData, info), 304);
        assert_eq!(offset_of!(NotifyIconData, timeout_or_version), 816);
        assert_eq!(offset_of!(NotifyIconData, guid), 952);
        assert_eq!(offset_of!(NotifyIconData, balloon_icon), 968);
    }

    #[test]
    #[cfg(target_pointer_width = "32")]
    fn descriptor_matches_native_layout_x86() {
        // Assert
        assert_eq!(size_of::<NotifyIconData>(), 956);
        assert_eq!(offset_of!(NotifyIconData, tip), 24);
    }

    #[test]
    fn default_sets_cb_size() {
        // Assert
        assert_eq!(
            NotifyIconData::default().size as usize,
            size_of::<NotifyIconData>()
        );
        assert_eq!(size_of::<Guid>(), 16);
    }

    #[test]
    fn message_values() {
        // Assert
        assert_eq!(NotifyMessage::Add.as_raw(), 0);
        assert_eq!(NotifyMessage::Modify.as_raw(), 1);
        assert_eq!(NotifyMessage::Delete.as_raw(), 2);
        assert_eq!(NotifyMessage::SetVersion.as_raw(), 4);
    }

    #[test]
    fn builder_sets_flags_for_present_fields() {
        // Arrange
        let icon = NotifyIcon::new(Hwnd(0x10), 7)
            .callback_message(0x8001)
            .icon(HIcon(0x20))
            .tip("shellbind");

        // Act
        let data = icon.to_data();

        // Assert
        assert_eq!(data.flags, NIF_MESSAGE | NIF_ICON | NIF_TIP);
        assert_eq!(data.hwnd, Hwnd(0x10));
        assert_eq!(data.id, 7);
        assert_eq!(data.callback_message, 0x8001);
        assert_eq!(data.icon, HIcon(0x20));
        assert_eq!(data.tip(), "shellbind");
    }

    #[test]
    fn balloon_kind_names_follow_config_spelling() {
        // Assert
        assert_eq!(BalloonKind::from_name("warning"), Some(BalloonKind::Warning));
        assert_eq!(BalloonKind::from_name("NONE"), Some(BalloonKind::None));
        assert_eq!(BalloonKind::from_name("user"), Some(BalloonKind::User));
        assert_eq!(BalloonKind::from_name("loud"), None);
    }

    #[test]
    fn balloon_sets_info_fields() {
        // Arrange
        let icon = NotifyIcon::new(Hwnd(1), 1).balloon(Balloon {
            title: "Build".into(),
            text: "Finished".into(),
            kind: BalloonKind::Warning,
            silent: true,
            timeout_ms: 15_000,
            icon: None,
        });

        // Act
        let data = icon.to_data();

        // Assert
        assert_eq!(data.flags, NIF_INFO);
        assert_eq!(data.info_title(), "Build");
        assert_eq!(data.info(), "Finished");
        assert_eq!(data.info_flags, NIIF_WARNING | NIIF_NOSOUND);
        assert_eq!(data.timeout_or_version, 15_000);
    }

    #[test]
    fn long_tip_is_truncated() {
        // Arrange
        let long = "x".repeat(300);

        // Act
        let data = NotifyIcon::new(Hwnd(1), 1).tip(long).to_data();

        // Assert
        assert_eq!(data.tip().len(), TIP_LEN - 1);
        assert_eq!(data.tip[TIP_LEN - 1], 0);
    }

    #[test]
    fn hidden_state_uses_mask() {
        // Act
        let data = NotifyIcon::new(Hwnd(1), 1).hidden(true).to_data();

        // Assert
        assert_eq!(data.flags, NIF_STATE);
        assert_eq!(data.state, NIS_HIDDEN);
        assert_eq!(data.state_mask, NIS_HIDDEN);
    }

    #[test]
    fn version_descriptor() {
        // Act
        let data = NotifyIconData::version(Hwnd(3), 9, NOTIFYICON_VERSION_4);

        // Assert
        assert_eq!(data.timeout_or_version, 4);
        assert_eq!(data.flags, 0);
        assert_eq!((data.hwnd, data.id), (Hwnd(3), 9));
    }

    #[test]
    fn guid_from_u128() {
        // Act
        let guid = Guid::from_u128(0x0123_4567_89ab_cdef_0011_2233_4455_6677);

        // Assert
        assert_eq!(guid.data1, 0x0123_4567);
        assert_eq!(guid.data2, 0x89ab);
        assert_eq!(guid.data3, 0xcdef);
        assert_eq!(guid.data4, [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77]);
    }
}
