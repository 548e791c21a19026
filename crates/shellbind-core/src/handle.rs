//! Opaque Win32 handle types.
//!
//! Each handle is a pointer-sized integer with no meaning beyond identity.
//! They are `#[repr(transparent)]` so they can sit inside `#[repr(C)]`
//! structures in place of the native `HWND`, `HICON`, etc.

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name(pub usize);

        impl $name {
            /// The null handle.
            pub const NULL: Self = Self(0);

            /// Returns whether this is the null handle.
            pub fn is_null(self) -> bool {
                self.0 == 0
            }

            /// Returns `None` for the null handle.
            pub fn non_null(self) -> Option<Self> {
                if self.is_null() { None } else { Some(self) }
            }
        }

        impl std::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::LowerHex::fmt(&self.0, f)
            }
        }
    };
}

handle!(
    /// A window handle (`HWND`).
    Hwnd
);
handle!(
    /// A drag-and-drop handle (`HDROP`) delivered with `WM_DROPFILES`.
    HDrop
);
handle!(
    /// An icon handle (`HICON`).
    HIcon
);
handle!(
    /// A module instance handle (`HINSTANCE`).
    HInstance
);
handle!(
    /// A shell item-list pointer (`PIDLIST_ABSOLUTE`).
    IdList
);

/// Converts a Rust `bool` to the Win32 `BOOL` convention.
pub fn to_bool32(value: bool) -> i32 {
    i32::from(value)
}

/// Converts a Win32 `BOOL` to a Rust `bool`. Any nonzero value is true.
pub fn from_bool32(value: i32) -> bool {
    value != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_marshals_to_one_and_zero() {
        // Assert
        assert_eq!(to_bool32(true), 1);
        assert_eq!(to_bool32(false), 0);
        assert!(from_bool32(1));
        assert!(from_bool32(-1));
        assert!(!from_bool32(0));
    }

    #[test]
    fn null_handles() {
        // Assert
        assert!(Hwnd::NULL.is_null());
        assert_eq!(HIcon(0).non_null(), None);
        assert_eq!(HIcon(0x1234).non_null(), Some(HIcon(0x1234)));
    }

    #[test]
    fn handles_are_pointer_sized() {
        // Assert
        assert_eq!(size_of::<Hwnd>(), size_of::<*mut u8>());
        assert_eq!(align_of::<IdList>(), align_of::<*mut u8>());
    }
}
