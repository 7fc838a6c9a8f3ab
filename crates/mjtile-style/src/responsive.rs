#![forbid(unsafe_code)]

//! Breakpoint-aware values.
//!
//! [`Responsive<T>`] stores an optional value per [`Breakpoint`]. A tier
//! without its own value inherits from the nearest smaller tier, the same
//! cascade a `lg:` utility class follows in CSS.
//!
//! ```
//! use mjtile_style::{Breakpoint, Responsive};
//!
//! let font = Responsive::new("text-lg").at(Breakpoint::Lg, "text-3xl");
//! assert_eq!(font.resolve(Breakpoint::Md), &"text-lg");
//! assert_eq!(font.resolve(Breakpoint::Xl), &"text-3xl");
//! ```
//!
//! # Invariants
//!
//! 1. `Xs` always holds a value, so `resolve` cannot fail.
//! 2. Explicit values are visited smallest tier first.

use crate::breakpoint::Breakpoint;
use crate::class::ClassList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responsive<T> {
    /// Indexed by breakpoint ordinal; slot 0 is always `Some`.
    values: [Option<T>; 5],
}

impl<T> Responsive<T> {
    #[must_use]
    pub const fn new(base: T) -> Self {
        Self {
            values: [Some(base), None, None, None, None],
        }
    }

    #[must_use]
    pub fn at(mut self, bp: Breakpoint, value: T) -> Self {
        self.values[bp as usize] = Some(value);
        self
    }

    /// Drop the override at `bp`. `Xs` cannot be cleared.
    pub fn clear(&mut self, bp: Breakpoint) {
        if bp != Breakpoint::Xs {
            self.values[bp as usize] = None;
        }
    }

    #[must_use]
    pub fn resolve(&self, bp: Breakpoint) -> &T {
        self.values[..=bp as usize]
            .iter()
            .rev()
            .find_map(Option::as_ref)
            .unwrap_or_else(|| self.base())
    }

    #[must_use]
    pub fn base(&self) -> &T {
        match &self.values[0] {
            Some(v) => v,
            None => unreachable!("Xs slot is populated by the constructor"),
        }
    }

    #[must_use]
    pub fn has_explicit(&self, bp: Breakpoint) -> bool {
        self.values[bp as usize].is_some()
    }

    pub fn explicit_values(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        Breakpoint::ALL
            .into_iter()
            .zip(self.values.iter())
            .filter_map(|(bp, v)| v.as_ref().map(|v| (bp, v)))
    }
}

/// Types that expand into utility-class tokens.
pub trait ClassTokens {
    /// Tokens without any breakpoint prefix.
    fn tokens(&self) -> Vec<String>;
}

impl ClassTokens for &'static str {
    fn tokens(&self) -> Vec<String> {
        vec![(*self).to_string()]
    }
}

impl<T: ClassTokens> Responsive<T> {
    /// One token per explicit tier, prefixed with that tier's class prefix.
    #[must_use]
    pub fn classes(&self) -> ClassList {
        let mut list = ClassList::new();
        for (bp, value) in self.explicit_values() {
            for token in value.tokens() {
                list.push(format!("{}{token}", bp.class_prefix()));
            }
        }
        list
    }
}
