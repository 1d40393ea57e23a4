// ── Compositor attribute plans ─────────────────────────────────────────────────
//
// The DWM window attributes we touch, the values we write, and the fixed
// order they are written in.  Ids and values mirror <dwmapi.h> so the plan
// can be checked on any host; `platform::win32` maps them onto the
// windows-crate types.

use serde::Serialize;

/// A `DWMWINDOWATTRIBUTE` used by the peek plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeekAttribute {
    NcRenderingPolicy,
    TransitionsForceDisabled,
    AllowNcPaint,
    NonClientRtlLayout,
    Flip3dPolicy,
    DisallowPeek,
    ExcludedFromPeek,
}

impl PeekAttribute {
    /// The `DWMWA_*` value.
    pub const fn id(self) -> i32 {
        match self {
            Self::NcRenderingPolicy => 2,
            Self::TransitionsForceDisabled => 3,
            Self::AllowNcPaint => 4,
            Self::NonClientRtlLayout => 6,
            Self::Flip3dPolicy => 8,
            Self::DisallowPeek => 11,
            Self::ExcludedFromPeek => 12,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NcRenderingPolicy => "DWMWA_NCRENDERING_POLICY",
            Self::TransitionsForceDisabled => "DWMWA_TRANSITIONS_FORCEDISABLED",
            Self::AllowNcPaint => "DWMWA_ALLOW_NCPAINT",
            Self::NonClientRtlLayout => "DWMWA_NONCLIENT_RTL_LAYOUT",
            Self::Flip3dPolicy => "DWMWA_FLIP3D_POLICY",
            Self::DisallowPeek => "DWMWA_DISALLOW_PEEK",
            Self::ExcludedFromPeek => "DWMWA_EXCLUDED_FROM_PEEK",
        }
    }
}

/// `DWMNCRENDERINGPOLICY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NcRenderingPolicy {
    UseWindowStyle = 0,
    Disabled = 1,
    Enabled = 2,
}

/// `DWMFLIP3DWINDOWPOLICY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Flip3dPolicy {
    Default = 0,
    ExcludeBelow = 1,
    ExcludeAbove = 2,
}

/// The payload written for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    /// A Win32 `BOOL`.
    Flag(bool),
    NcRendering(NcRenderingPolicy),
    Flip3d(Flip3dPolicy),
}

impl AttributeValue {
    /// The 4-byte value handed to `DwmSetWindowAttribute`.
    pub const fn as_raw(self) -> i32 {
        match self {
            Self::Flag(b) => b as i32,
            Self::NcRendering(p) => p as i32,
            Self::Flip3d(p) => p as i32,
        }
    }
}

/// One `DwmSetWindowAttribute` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub attribute: PeekAttribute,
    pub value: AttributeValue,
}

const fn entry(attribute: PeekAttribute, value: AttributeValue) -> PlanEntry {
    PlanEntry { attribute, value }
}

/// Excludes the window from Peek and Flip3D.  Order matters.
pub const DISABLE_PLAN: [PlanEntry; 7] = [
    entry(PeekAttribute::ExcludedFromPeek, AttributeValue::Flag(true)),
    entry(PeekAttribute::DisallowPeek, AttributeValue::Flag(true)),
    entry(
        PeekAttribute::NcRenderingPolicy,
        AttributeValue::NcRendering(NcRenderingPolicy::Enabled),
    ),
    entry(PeekAttribute::TransitionsForceDisabled, AttributeValue::Flag(true)),
    entry(PeekAttribute::AllowNcPaint, AttributeValue::Flag(true)),
    entry(PeekAttribute::NonClientRtlLayout, AttributeValue::Flag(true)),
    entry(
        PeekAttribute::Flip3dPolicy,
        AttributeValue::Flip3d(Flip3dPolicy::ExcludeAbove),
    ),
];

/// Same attributes, back to the compositor defaults.
pub const RESTORE_PLAN: [PlanEntry; 7] = [
    entry(PeekAttribute::ExcludedFromPeek, AttributeValue::Flag(false)),
    entry(PeekAttribute::DisallowPeek, AttributeValue::Flag(false)),
    entry(
        PeekAttribute::NcRenderingPolicy,
        AttributeValue::NcRendering(NcRenderingPolicy::UseWindowStyle),
    ),
    entry(PeekAttribute::TransitionsForceDisabled, AttributeValue::Flag(false)),
    entry(PeekAttribute::AllowNcPaint, AttributeValue::Flag(false)),
    entry(PeekAttribute::NonClientRtlLayout, AttributeValue::Flag(false)),
    entry(
        PeekAttribute::Flip3dPolicy,
        AttributeValue::Flip3d(Flip3dPolicy::Default),
    ),
];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disable_plan_order() {
        let ids: Vec<i32> = DISABLE_PLAN.iter().map(|e| e.attribute.id()).collect();
        assert_eq!(ids, vec![12, 11, 2, 3, 4, 6, 8]);
    }

    #[test]
    fn disable_plan_values() {
        let raw: Vec<i32> = DISABLE_PLAN.iter().map(|e| e.value.as_raw()).collect();
        // TRUE everywhere except DWMNCRP_ENABLED (2) and DWMFLIP3D_EXCLUDEABOVE (2).
        assert_eq!(raw, vec![1, 1, 2, 1, 1, 1, 2]);
    }

    #[test]
    fn restore_plan_mirrors_disable_plan() {
        for (d, r) in DISABLE_PLAN.iter().zip(RESTORE_PLAN.iter()) {
            assert_eq!(d.attribute, r.attribute);
            assert_eq!(r.value.as_raw(), 0, "{} should reset to 0", r.attribute.name());
        }
    }

    #[test]
    fn entry_serializes_for_diagnostics() {
        let json = serde_json::to_string(&DISABLE_PLAN[6]).expect("serialize");
        assert_eq!(
            json,
            r#"{"attribute":"FLIP3D_POLICY","value":{"kind":"flip3d","value":"ExcludeAbove"}}"#
        );
    }
}
