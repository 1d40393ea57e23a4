// ── Node-API exports ──────────────────────────────────────────────────────────
//
// Loaded by the host's main process as `disable_peek.node`:
//
//   const { disablePeek } = require('./disable_peek.node')
//   if (process.platform === 'win32') disablePeek(win.getNativeWindowHandle())
//
// Only a malformed argument throws.  Compositor failures are logged and, for
// `disablePeekWithReport`, returned to the caller.

#![allow(unsafe_code)]

use napi::{JsBuffer, JsUnknown, Status};
use napi_derive::napi;

use crate::{
    error::PeekError,
    handle::{window_from_argument, HostArgument, WindowHandle},
    logging,
    peek::{self, AttributeOutcome, PeekReport},
    platform,
};

impl From<PeekError> for napi::Error {
    fn from(e: PeekError) -> Self {
        let status = if e.is_argument_error() {
            Status::InvalidArg
        } else {
            Status::GenericFailure
        };
        napi::Error::new(status, format!("[{}] {e}", e.code()))
    }
}

#[napi(object)]
pub struct JsAttributeOutcome {
    /// `DWMWA_*` name, e.g. `"DWMWA_EXCLUDED_FROM_PEEK"`.
    pub attribute: String,
    pub value: i32,
    pub succeeded: bool,
    pub code: Option<u32>,
    pub error: Option<String>,
}

impl From<AttributeOutcome> for JsAttributeOutcome {
    fn from(o: AttributeOutcome) -> Self {
        Self {
            attribute: o.attribute.name().to_owned(),
            value: o.value.as_raw(),
            succeeded: o.succeeded(),
            code: o.code,
            error: o.error,
        }
    }
}

/// Classify the JS value and unpack the window handle from it.
fn unpack_window(handle: JsUnknown) -> napi::Result<WindowHandle> {
    let window = if handle.is_buffer()? {
        // SAFETY: `is_buffer` just confirmed the value is a Buffer.
        let buffer = unsafe { handle.cast::<JsBuffer>() }.into_value()?;
        window_from_argument(HostArgument::Buffer(&*buffer))
    } else {
        let type_name = format!("{:?}", handle.get_type()?);
        window_from_argument(HostArgument::Other { type_name: &type_name })
    };
    Ok(window?)
}

type ApplyFn = fn(&(dyn platform::Compositor + 'static), WindowHandle) -> PeekReport;

const DISABLE: ApplyFn = peek::disable_peek::<dyn platform::Compositor>;
const RESTORE: ApplyFn = peek::restore_peek::<dyn platform::Compositor>;

fn run(handle: JsUnknown, apply: ApplyFn) -> napi::Result<PeekReport> {
    logging::init();
    let window = unpack_window(handle)?;
    let compositor = platform::system();
    Ok(apply(&compositor, window))
}

/// Exclude the window from Peek and Flip3D.
///
/// @param handle - `BrowserWindow.getNativeWindowHandle()`.
/// @throws if `handle` is not a 4- or 8-byte Buffer.
#[napi(js_name = "disablePeek")]
pub fn disable_peek(handle: JsUnknown) -> napi::Result<()> {
    run(handle, DISABLE)?;
    Ok(())
}

/// Same as `disablePeek`, returning the outcome of each attribute call.
#[napi(js_name = "disablePeekWithReport")]
pub fn disable_peek_with_report(handle: JsUnknown) -> napi::Result<Vec<JsAttributeOutcome>> {
    let report = run(handle, DISABLE)?;
    Ok(report.outcomes.into_iter().map(Into::into).collect())
}

/// Return the attributes touched by `disablePeek` to their defaults.
#[napi(js_name = "restorePeek")]
pub fn restore_peek(handle: JsUnknown) -> napi::Result<()> {
    run(handle, RESTORE)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
