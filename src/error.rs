// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in disable-peek return `error::Result<T>`.  Argument
// errors surface to the host as thrown JS errors (see `bindings`); compositor
// errors are recorded in a `PeekReport` and never thrown.

use thiserror::Error;

/// Every error that disable-peek can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeekError {
    /// The host passed something other than a buffer.
    #[error("Argument must be a window buffer (got {type_name})")]
    NotABuffer {
        /// JS type name of the offending value, for display purposes.
        type_name: String,
    },

    /// The buffer is not 4 or 8 bytes long.
    #[error("Window buffer must be 4 or 8 bytes long (got {len})")]
    HandleLength { len: usize },

    /// An 8-byte handle that does not fit this process's pointer width.
    #[error("Window handle {value:#x} does not fit a {bits}-bit pointer")]
    HandleOutOfRange { value: u64, bits: u32 },

    /// A Win32 API call returned a failure code.
    #[error("{function} failed (error {code:#010x})")]
    Win32 {
        /// The name of the failing function.
        function: &'static str,
        /// The raw HRESULT, reinterpreted as `u32`.
        code: u32,
    },

    /// No window compositor exists on this platform.
    #[error("window compositor is not available on this platform")]
    Unsupported,
}

impl PeekError {
    /// Stable code prefixed onto messages thrown to JS.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotABuffer { .. } | Self::HandleLength { .. } | Self::HandleOutOfRange { .. } => {
                "INVALID_ARGUMENT"
            }
            Self::Win32 { .. } => "WIN32_ERROR",
            Self::Unsupported => "UNSUPPORTED_PLATFORM",
        }
    }

    /// True for errors caused by the caller's argument rather than the OS.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::NotABuffer { .. } | Self::HandleLength { .. } | Self::HandleOutOfRange { .. }
        )
    }

    /// The raw failure code recorded for a compositor call, if any.
    pub fn raw_code(&self) -> Option<u32> {
        match self {
            Self::Win32 { code, .. } => Some(*code),
            _ => None,
        }
    }
}

// Convert a windows-crate error (HRESULT) directly into a PeekError so that
// `?` can be used on `windows::core::Result<T>` in the platform module.
#[cfg(windows)]
impl From<windows::core::Error> for PeekError {
    fn from(e: windows::core::Error) -> Self {
        // HRESULT.0 is i32; reinterpret bits as u32 for display purposes.
        Self::Win32 {
            function: "DwmSetWindowAttribute",
            code: e.code().0 as u32,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PeekError>;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_errors_share_a_code() {
        let errs = [
            PeekError::NotABuffer { type_name: "String".to_owned() },
            PeekError::HandleLength { len: 3 },
            PeekError::HandleOutOfRange { value: u64::MAX, bits: 32 },
        ];
        for e in errs {
            assert_eq!(e.code(), "INVALID_ARGUMENT");
            assert!(e.is_argument_error());
        }
    }

    #[test]
    fn win32_display_is_hex() {
        let e = PeekError::Win32 { function: "DwmSetWindowAttribute", code: 0x8007_0006 };
        assert_eq!(e.to_string(), "DwmSetWindowAttribute failed (error 0x80070006)");
        assert_eq!(e.raw_code(), Some(0x8007_0006));
        assert!(!e.is_argument_error());
    }

    #[test]
    fn not_a_buffer_names_the_type() {
        let e = PeekError::NotABuffer { type_name: "Number".to_owned() };
        assert_eq!(e.to_string(), "Argument must be a window buffer (got Number)");
    }

    #[test]
    fn argument_classification_agrees_with_code() {
        let errs = [
            PeekError::NotABuffer { type_name: "Object".to_owned() },
            PeekError::HandleLength { len: 0 },
            PeekError::HandleOutOfRange { value: 1 << 40, bits: 32 },
            PeekError::Win32 { function: "DwmSetWindowAttribute", code: 0x8000_4005 },
            PeekError::Unsupported,
        ];
        for e in errs {
            assert_eq!(e.is_argument_error(), e.code() == "INVALID_ARGUMENT", "{e}");
        }
    }

    #[test]
    fn unsupported_has_no_raw_code() {
        assert_eq!(PeekError::Unsupported.raw_code(), None);
        assert_eq!(PeekError::Unsupported.code(), "UNSUPPORTED_PLATFORM");
    }
}
