// ── Platform abstraction layer ────────────────────────────────────────────────
//
// This module defines the interface the rest of the crate uses to talk to the
// window compositor.  No `unsafe` lives here; all Win32 FFI is confined to the
// `win32` sub-module and never leaks outward.

#[cfg(windows)]
pub mod win32;

use crate::{
    attributes::{AttributeValue, PeekAttribute},
    error::{PeekError, Result},
    handle::WindowHandle,
};

/// Something that can set window attributes on the desktop compositor.
pub trait Compositor {
    fn set_attribute(
        &self,
        window: WindowHandle,
        attribute: PeekAttribute,
        value: AttributeValue,
    ) -> Result<()>;
}

/// Stand-in for targets without DWM: every call fails with `Unsupported`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unsupported;

impl Compositor for Unsupported {
    fn set_attribute(&self, _: WindowHandle, _: PeekAttribute, _: AttributeValue) -> Result<()> {
        Err(PeekError::Unsupported)
    }
}

/// The compositor for the current target.
#[cfg(windows)]
pub fn system() -> win32::DwmCompositor {
    win32::DwmCompositor
}

/// The compositor for the current target.
#[cfg(not(windows))]
pub fn system() -> Unsupported {
    Unsupported
}
