//! Responsive breakpoint tables for both frameworks.
//!
//! Both sides use a fixed six-tier order (`none` is the unprefixed base tier and
//! is represented as `Option::None`). Widths are the frameworks' default
//! `min-width` thresholds in px.

use serde::{Deserialize, Serialize};

/// Which framework a breakpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Bootstrap,
    Tailwind,
}

/// A named `min-width` threshold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointSpec {
    pub name: String,
    pub min_width_px: u32,
    pub origin: Origin,
}

impl BreakpointSpec {
    pub fn new(name: impl Into<String>, min_width_px: u32, origin: Origin) -> Self {
        Self {
            name: name.into(),
            min_width_px,
            origin,
        }
    }
}

/// Bootstrap responsive infix (`d-md-none`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BootstrapBreakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

/// Tailwind responsive variant (`md:hidden`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TailwindBreakpoint {
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl2,
}

impl BootstrapBreakpoint {
    /// All tiers in ascending order.
    pub const ALL: [BootstrapBreakpoint; 5] = [
        BootstrapBreakpoint::Sm,
        BootstrapBreakpoint::Md,
        BootstrapBreakpoint::Lg,
        BootstrapBreakpoint::Xl,
        BootstrapBreakpoint::Xxl,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            "xxl" => Some(Self::Xxl),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }

    /// Position in the responsive sequence, 1-based (0 is the base tier).
    pub fn ordinal(self) -> usize {
        self as usize + 1
    }

    pub fn min_width_px(self) -> u32 {
        match self {
            Self::Sm => 576,
            Self::Md => 768,
            Self::Lg => 992,
            Self::Xl => 1200,
            Self::Xxl => 1400,
        }
    }

    pub fn spec(self) -> BreakpointSpec {
        BreakpointSpec::new(self.as_str(), self.min_width_px(), Origin::Bootstrap)
    }
}

impl TailwindBreakpoint {
    /// All tiers in ascending order.
    pub const ALL: [TailwindBreakpoint; 5] = [
        TailwindBreakpoint::Sm,
        TailwindBreakpoint::Md,
        TailwindBreakpoint::Lg,
        TailwindBreakpoint::Xl,
        TailwindBreakpoint::Xxl2,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl2 => "2xl",
        }
    }

    pub fn ordinal(self) -> usize {
        self as usize + 1
    }

    pub fn min_width_px(self) -> u32 {
        match self {
            Self::Sm => 640,
            Self::Md => 768,
            Self::Lg => 1024,
            Self::Xl => 1280,
            Self::Xxl2 => 1536,
        }
    }

    pub fn spec(self) -> BreakpointSpec {
        BreakpointSpec::new(self.as_str(), self.min_width_px(), Origin::Tailwind)
    }
}

impl std::fmt::Display for BootstrapBreakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for TailwindBreakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
