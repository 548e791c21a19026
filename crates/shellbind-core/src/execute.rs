//! `ShellExecuteW` result mapping and show-command values.
//!
//! `ShellExecuteW` returns an `HINSTANCE` for compatibility with 16-bit
//! Windows. Values in `1..=32` are not handles but error codes.

use serde::{Deserialize, Serialize};

pub const ERROR_FILE_NOT_FOUND: usize = 2;
pub const ERROR_PATH_NOT_FOUND: usize = 3;
pub const ERROR_BAD_FORMAT: usize = 11;
pub const SE_ERR_FNF: usize = 2;
pub const SE_ERR_PNF: usize = 3;
pub const SE_ERR_ACCESSDENIED: usize = 5;
pub const SE_ERR_OOM: usize = 8;
pub const SE_ERR_DLLNOTFOUND: usize = 32;
pub const SE_ERR_SHARE: usize = 26;
pub const SE_ERR_ASSOCINCOMPLETE: usize = 27;
pub const SE_ERR_DDETIMEOUT: usize = 28;
pub const SE_ERR_DDEFAIL: usize = 29;
pub const SE_ERR_DDEBUSY: usize = 30;
pub const SE_ERR_NOASSOC: usize = 31;

/// Largest value that `ShellExecuteW` uses as an error code.
pub const MAX_ERROR_CODE: usize = 32;

/// A failure reported by `ShellExecuteW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteError {
    FileNotFound,
    PathNotFound,
    BadFormat,
    AccessDenied,
    AssociationIncomplete,
    DdeBusy,
    DdeFail,
    DdeTimeout,
    DllNotFound,
    NoAssociation,
    OutOfMemory,
    SharingViolation,
    /// Any other code in `1..=32`.
    Unknown(usize),
}

impl ExecuteError {
    /// Maps an error code in `1..=32` to its variant.
    pub fn from_code(code: usize) -> Self {
        match code {
            ERROR_FILE_NOT_FOUND => Self::FileNotFound,
            ERROR_PATH_NOT_FOUND => Self::PathNotFound,
            ERROR_BAD_FORMAT => Self::BadFormat,
            SE_ERR_ACCESSDENIED => Self::AccessDenied,
            SE_ERR_ASSOCINCOMPLETE => Self::AssociationIncomplete,
            SE_ERR_DDEBUSY => Self::DdeBusy,
            SE_ERR_DDEFAIL => Self::DdeFail,
            SE_ERR_DDETIMEOUT => Self::DdeTimeout,
            SE_ERR_DLLNOTFOUND => Self::DllNotFound,
            SE_ERR_NOASSOC => Self::NoAssociation,
            SE_ERR_OOM => Self::OutOfMemory,
            SE_ERR_SHARE => Self::SharingViolation,
            other => Self::Unknown(other),
        }
    }

    /// Returns the raw pseudo-handle value.
    pub fn code(self) -> usize {
        match self {
            Self::FileNotFound => ERROR_FILE_NOT_FOUND,
            Self::PathNotFound => ERROR_PATH_NOT_FOUND,
            Self::BadFormat => ERROR_BAD_FORMAT,
            Self::AccessDenied => SE_ERR_ACCESSDENIED,
            Self::AssociationIncomplete => SE_ERR_ASSOCINCOMPLETE,
            Self::DdeBusy => SE_ERR_DDEBUSY,
            Self::DdeFail => SE_ERR_DDEFAIL,
            Self::DdeTimeout => SE_ERR_DDETIMEOUT,
            Self::DllNotFound => SE_ERR_DLLNOTFOUND,
            Self::NoAssociation => SE_ERR_NOASSOC,
            Self::OutOfMemory => SE_ERR_OOM,
            Self::SharingViolation => SE_ERR_SHARE,
            Self::Unknown(code) => code,
        }
    }
}

impl std::fmt::Display for ExecuteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::FileNotFound => "The specified file was not found.",
            Self::PathNotFound => "The specified path was not found.",
            Self::BadFormat => "The .exe file is invalid (non-Win32 .exe or error in .exe image).",
            Self::AccessDenied => "The operating system denied access to the specified file.",
            Self::AssociationIncomplete => "The file name association is incomplete or invalid.",
            Self::DdeBusy => {
                "The DDE transaction could not be completed because other DDE transactions were being processed."
            }
            Self::DdeFail => "The DDE transaction failed.",
            Self::DdeTimeout => {
                "The DDE transaction could not be completed because the request timed out."
            }
            Self::DllNotFound => "The specified DLL was not found.",
            Self::NoAssociation => {
                "There is no application associated with the given file name extension. This error will also be returned if you attempt to print a file that is not printable."
            }
            Self::OutOfMemory => "There was not enough memory to complete the operation.",
            Self::SharingViolation => "A sharing violation occurred.",
            Self::Unknown(code) => {
                return write!(f, "Unknown error occurred with error code {code}");
            }
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ExecuteError {}

/// Interprets the value returned by `ShellExecuteW`.
///
/// Only `1..=32` is a failure. Zero and anything above 32 are success.
pub fn check_instance(raw: usize) -> Result<(), ExecuteError> {
    if raw != 0 && raw <= MAX_ERROR_CODE {
        Err(ExecuteError::from_code(raw))
    } else {
        Ok(())
    }
}

/// How the launched application should show its window (`SW_*`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShowCommand {
    Hide,
    #[default]
    Normal,
    Minimized,
    Maximized,
    NoActivate,
    Show,
    Minimize,
    MinNoActive,
    ShowNa,
    Restore,
    Default,
    ForceMinimize,
}

impl ShowCommand {
    /// Returns the `SW_*` value passed as `nShowCmd`.
    pub fn as_raw(self) -> i32 {
        match self {
            Self::Hide => 0,
            Self::Normal => 1,
            Self::Minimized => 2,
            Self::Maximized => 3,
            Self::NoActivate => 4,
            Self::Show => 5,
            Self::Minimize => 6,
            Self::MinNoActive => 7,
            Self::ShowNa => 8,
            Self::Restore => 9,
            Self::Default => 10,
            Self::ForceMinimize => 11,
        }
    }

    /// Parses a kebab-case name such as `"maximized"` or `"show-na"`.
    pub fn from_name(name: &str) -> Option<Self> {
        crate::config::parse_name(name)
    }
}
