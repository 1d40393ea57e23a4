// ── Applying attribute plans ──────────────────────────────────────────────────
//
// Every entry of a plan is issued, in order, regardless of earlier failures.
// Failures are logged and recorded in the returned `PeekReport`; they never
// propagate to the caller.

use serde::Serialize;

use crate::{
    attributes::{AttributeValue, PeekAttribute, PlanEntry, DISABLE_PLAN, RESTORE_PLAN},
    handle::WindowHandle,
    platform::Compositor,
};

/// Result of one `set_attribute` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeOutcome {
    pub attribute: PeekAttribute,
    pub value: AttributeValue,
    /// Failing HRESULT bits.  `None` on success and on platforms without DWM.
    pub code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AttributeOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Ordered outcomes of one plan application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeekReport {
    pub outcomes: Vec<AttributeOutcome>,
}

impl PeekReport {
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(AttributeOutcome::succeeded)
    }

    pub fn failures(&self) -> impl Iterator<Item = &AttributeOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}

/// Issue every entry of `plan` against `window`.
pub fn apply_plan<C: Compositor + ?Sized>(
    compositor: &C,
    window: WindowHandle,
    plan: &[PlanEntry],
) -> PeekReport {
    let outcomes = plan
        .iter()
        .map(|entry| {
            let result = compositor.set_attribute(window, entry.attribute, entry.value);
            match &result {
                Ok(()) => tracing::debug!(
                    %window,
                    attribute = entry.attribute.name(),
                    value = entry.value.as_raw(),
                    "attribute set"
                ),
                Err(e) => tracing::warn!(
                    %window,
                    attribute = entry.attribute.name(),
                    error = %e,
                    "attribute not set"
                ),
            }
            AttributeOutcome {
                attribute: entry.attribute,
                value: entry.value,
                code: result.as_ref().err().and_then(|e| e.raw_code()),
                error: result.err().map(|e| e.to_string()),
            }
        })
        .collect();

    let report = PeekReport { outcomes };
    if tracing::enabled!(tracing::Level::TRACE) {
        if let Ok(json) = serde_json::to_string(&report) {
            tracing::trace!(%window, report = %json, "plan applied");
        }
    }
    report
}

/// Exclude `window` from Peek and Flip3D.
pub fn disable_peek<C: Compositor + ?Sized>(compositor: &C, window: WindowHandle) -> PeekReport {
    apply_plan(compositor, window, &DISABLE_PLAN)
}

/// Undo `disable_peek`, returning the attributes to their defaults.
pub fn restore_peek<C: Compositor + ?Sized>(compositor: &C, window: WindowHandle) -> PeekReport {
    apply_plan(compositor, window, &RESTORE_PLAN)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{
        error::{PeekError, Result},
        platform::Unsupported,
    };

    /// Records every call; fails the attributes listed in `fail`.
    #[derive(Default)]
    struct RecordingCompositor {
        calls: RefCell<Vec<(WindowHandle, i32, i32)>>,
        fail: Vec<PeekAttribute>,
    }

    impl Compositor for RecordingCompositor {
        fn set_attribute(
            &self,
            window: WindowHandle,
            attribute: PeekAttribute,
            value: AttributeValue,
        ) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((window, attribute.id(), value.as_raw()));
            if self.fail.contains(&attribute) {
                return Err(PeekError::Win32 {
                    function: "DwmSetWindowAttribute",
                    code: 0x8007_0057,
                });
            }
            Ok(())
        }
    }

    const HWND: WindowHandle = WindowHandle::from_raw(0x5_0a2c);

    #[test]
    fn disable_issues_plan_in_order() {
        let dwm = RecordingCompositor::default();
        let report = disable_peek(&dwm, HWND);

        assert!(report.all_succeeded());
        let calls = dwm.calls.borrow();
        assert_eq!(
            *calls,
            vec![
                (HWND, 12, 1),
                (HWND, 11, 1),
                (HWND, 2, 2),
                (HWND, 3, 1),
                (HWND, 4, 1),
                (HWND, 6, 1),
                (HWND, 8, 2),
            ]
        );
    }

    #[test]
    fn failure_does_not_stop_the_sequence() {
        let dwm = RecordingCompositor {
            fail: vec![PeekAttribute::ExcludedFromPeek, PeekAttribute::AllowNcPaint],
            ..Default::default()
        };
        let report = disable_peek(&dwm, HWND);

        assert_eq!(dwm.calls.borrow().len(), 7);
        assert!(!report.all_succeeded());
        let failed: Vec<PeekAttribute> = report.failures().map(|o| o.attribute).collect();
        assert_eq!(failed, vec![PeekAttribute::ExcludedFromPeek, PeekAttribute::AllowNcPaint]);
        assert_eq!(report.outcomes[0].code, Some(0x8007_0057));
        assert_eq!(report.outcomes[1].code, None);
    }

    #[test]
    fn restore_writes_defaults() {
        let dwm = RecordingCompositor::default();
        restore_peek(&dwm, HWND);
        let calls = dwm.calls.borrow();
        assert_eq!(calls.len(), 7);
        assert!(calls.iter().all(|&(_, _, raw)| raw == 0));
    }

    #[test]
    fn unsupported_platform_completes_without_panicking() {
        let report = disable_peek(&Unsupported, HWND);
        assert_eq!(report.outcomes.len(), 7);
        assert!(report.outcomes.iter().all(|o| o.code.is_none() && !o.succeeded()));
    }

    #[test]
    fn works_through_a_trait_object() {
        let dwm = RecordingCompositor::default();
        let dynamic: &dyn Compositor = &dwm;
        disable_peek(dynamic, HWND);
        assert_eq!(dwm.calls.borrow().len(), 7);
    }

    #[test]
    fn report_serializes_without_empty_errors() {
        let dwm = RecordingCompositor {
            fail: vec![PeekAttribute::Flip3dPolicy],
            ..Default::default()
        };
        let report = disable_peek(&dwm, HWND);
        let json: serde_json::Value = serde_json::to_value(&report).expect("serialize");
        let outcomes = json["outcomes"].as_array().expect("array");
        assert!(outcomes[0].get("error").is_none());
        assert_eq!(outcomes[6]["attribute"], "FLIP3D_POLICY");
        assert_eq!(outcomes[6]["code"], 0x8007_0057u32);
    }
}
