use std::ffi::c_void;

use windows::Win32::{
    Foundation::HWND,
    Graphics::Dwm::{
        DwmSetWindowAttribute, DWMWA_ALLOW_NCPAINT, DWMWA_DISALLOW_PEEK,
        DWMWA_EXCLUDED_FROM_PEEK, DWMWA_FLIP3D_POLICY, DWMWA_NCRENDERING_POLICY,
        DWMWA_NONCLIENT_RTL_LAYOUT, DWMWA_TRANSITIONS_FORCEDISABLED, DWMWINDOWATTRIBUTE,
    },
};

use crate::{
    attributes::{AttributeValue, PeekAttribute},
    error::Result,
    handle::WindowHandle,
    platform::Compositor,
};

/// The Desktop Window Manager of the running session.
#[derive(Debug, Default, Clone, Copy)]
pub struct DwmCompositor;

impl Compositor for DwmCompositor {
    fn set_attribute(
        &self,
        window: WindowHandle,
        attribute: PeekAttribute,
        value: AttributeValue,
    ) -> Result<()> {
        let hwnd = HWND(window.as_raw() as *mut c_void);
        // BOOL and both policy enums are 4-byte ints.
        let raw: i32 = value.as_raw();

        // SAFETY: `raw` lives on this stack frame for the whole call and its
        // size is passed alongside the pointer.  DWM validates `hwnd` itself
        // and returns E_HANDLE / E_INVALIDARG rather than faulting on a stale
        // or foreign handle.
        unsafe {
            DwmSetWindowAttribute(
                hwnd,
                to_dwmwa(attribute),
                &raw as *const i32 as *const c_void,
                std::mem::size_of::<i32>() as u32,
            )?;
        }
        Ok(())
    }
}

fn to_dwmwa(attribute: PeekAttribute) -> DWMWINDOWATTRIBUTE {
    match attribute {
        PeekAttribute::NcRenderingPolicy => DWMWA_NCRENDERING_POLICY,
        PeekAttribute::TransitionsForceDisabled => DWMWA_TRANSITIONS_FORCEDISABLED,
        PeekAttribute::AllowNcPaint => DWMWA_ALLOW_NCPAINT,
        PeekAttribute::NonClientRtlLayout => DWMWA_NONCLIENT_RTL_LAYOUT,
        PeekAttribute::Flip3dPolicy => DWMWA_FLIP3D_POLICY,
        PeekAttribute::DisallowPeek => DWMWA_DISALLOW_PEEK,
        PeekAttribute::ExcludedFromPeek => DWMWA_EXCLUDED_FROM_PEEK,
    }
}
