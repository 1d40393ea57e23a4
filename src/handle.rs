// ── Window-handle decoding ────────────────────────────────────────────────────
//
// The host hands us the raw bytes of an `HWND` (Electron's
// `getNativeWindowHandle()`), in native byte order and pointer-sized.
// No `unsafe` here: the handle is only ever turned back into a pointer inside
// `platform::win32`.

use crate::error::{PeekError, Result};

/// An opaque native window handle, valid only for the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(usize);

impl WindowHandle {
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    pub fn as_raw(self) -> usize {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Decode a handle from the host's buffer.
    ///
    /// 8-byte buffers are read as `u64`, 4-byte buffers as `u32`, both in
    /// native byte order.  A null handle is accepted; the compositor rejects it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let value = match *bytes {
            [a, b, c, d, e, f, g, h] => u64::from_ne_bytes([a, b, c, d, e, f, g, h]),
            [a, b, c, d] => u64::from(u32::from_ne_bytes([a, b, c, d])),
            _ => return Err(PeekError::HandleLength { len: bytes.len() }),
        };
        let raw = usize::try_from(value).map_err(|_| PeekError::HandleOutOfRange {
            value,
            bits: usize::BITS,
        })?;
        Ok(Self(raw))
    }
}

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// The single argument received from the host, classified by JS type.
#[derive(Debug, Clone, Copy)]
pub enum HostArgument<'a> {
    Buffer(&'a [u8]),
    Other { type_name: &'a str },
}

/// Validate the host argument and unpack the window handle it carries.
pub fn window_from_argument(arg: HostArgument<'_>) -> Result<WindowHandle> {
    match arg {
        HostArgument::Buffer(bytes) => WindowHandle::from_bytes(bytes),
        HostArgument::Other { type_name } => Err(PeekError::NotABuffer {
            type_name: type_name.to_owned(),
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
