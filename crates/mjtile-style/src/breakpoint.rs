#![forbid(unsafe_code)]

//! Viewport width tiers.
//!
//! [`Breakpoint`] names five width tiers ordered from smallest to largest.
//! [`Breakpoints`] holds the pixel thresholds that separate them and
//! classifies a viewport width. The defaults match the common utility-CSS
//! scale, so `Lg` begins at 1024px.
//!
//! # Invariants
//!
//! 1. `Xs < Sm < Md < Lg < Xl` (derive order equals ordinal order).
//! 2. `classify_width` is monotone: a wider viewport never maps to a smaller
//!    tier.
//! 3. Each tier's class prefix is empty for `Xs` and `"{name}:"` otherwise.

use std::fmt;
use std::str::FromStr;

/// A viewport width tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Breakpoint {
    #[default]
    Xs = 0,
    Sm = 1,
    Md = 2,
    Lg = 3,
    Xl = 4,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Prefix for a utility class that only applies from this tier upward.
    #[must_use]
    pub const fn class_prefix(self) -> &'static str {
        match self {
            Self::Xs => "",
            Self::Sm => "sm:",
            Self::Md => "md:",
            Self::Lg => "lg:",
            Self::Xl => "xl:",
        }
    }

    #[must_use]
    pub fn is_at_least(self, other: Breakpoint) -> bool {
        self >= other
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .into_iter()
            .find(|bp| bp.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown breakpoint: {s} (expected xs, sm, md, lg or xl)"))
    }
}

/// Minimum viewport widths, in CSS pixels, for each tier above `Xs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
}

impl Breakpoints {
    /// 640 / 768 / 1024 / 1280.
    pub const DEFAULT: Self = Self {
        sm: 640,
        md: 768,
        lg: 1024,
        xl: 1280,
    };

    /// Thresholds must be non-decreasing; out-of-order values are sorted.
    #[must_use]
    pub fn new(sm: u16, md: u16, lg: u16, xl: u16) -> Self {
        let mut t = [sm, md, lg, xl];
        t.sort_unstable();
        Self {
            sm: t[0],
            md: t[1],
            lg: t[2],
            xl: t[3],
        }
    }

    #[must_use]
    pub fn classify_width(&self, width: u16) -> Breakpoint {
        if width >= self.xl {
            Breakpoint::Xl
        } else if width >= self.lg {
            Breakpoint::Lg
        } else if width >= self.md {
            Breakpoint::Md
        } else if width >= self.sm {
            Breakpoint::Sm
        } else {
            Breakpoint::Xs
        }
    }

    /// Lower bound of a tier's width range.
    #[must_use]
    pub const fn min_width(&self, bp: Breakpoint) -> u16 {
        match bp {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}
