// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except:
//   • `platform::win32` – DWM FFI
//   • `bindings`        – Node-API glue (macro output and one buffer cast)
// Each hand-written unsafe block in those modules MUST carry a `// SAFETY:`
// comment.
#![deny(unsafe_code)]

//! Excludes a window from the Desktop Window Manager's Peek preview.
//!
//! The host passes the bytes of a native window handle; we decode them
//! ([`handle`]) and issue a fixed sequence of compositor attribute writes
//! ([`attributes`], [`peek`]) through the [`platform`] layer.  With the `napi`
//! feature the crate builds as a Node-API addon exporting `disablePeek`.

pub mod attributes;
pub mod error;
pub mod handle;
pub mod logging;
pub mod peek;
pub mod platform;

#[cfg(feature = "napi")]
mod bindings;

pub use attributes::{AttributeValue, PeekAttribute, DISABLE_PLAN, RESTORE_PLAN};
pub use error::{PeekError, Result};
pub use handle::{window_from_argument, HostArgument, WindowHandle};
pub use peek::{apply_plan, disable_peek, restore_peek, AttributeOutcome, PeekReport};
pub use platform::Compositor;
