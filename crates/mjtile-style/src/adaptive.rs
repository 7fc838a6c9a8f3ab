//! Theme-dependent classes.

use mjtile_core::Theme;

use crate::class::ClassList;

/// A utility class with a light and a dark variant.
///
/// Emitted as `"{light} dark:{dark}"` so the page can switch themes without
/// re-rendering, or resolved to the single token for a known theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdaptiveClass {
    pub light: &'static str,
    pub dark: &'static str,
}

impl AdaptiveClass {
    #[must_use]
    pub const fn new(light: &'static str, dark: &'static str) -> Self {
        Self { light, dark }
    }

    /// Same class in both themes.
    #[must_use]
    pub const fn fixed(class: &'static str) -> Self {
        Self::new(class, class)
    }

    #[must_use]
    pub const fn resolve(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }

    #[must_use]
    pub fn classes(&self) -> ClassList {
        if self.light == self.dark {
            return ClassList::new().with(self.light);
        }
        ClassList::new()
            .with(self.light)
            .with(format!("dark:{}", self.dark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_dark_variant() {
        let c = AdaptiveClass::new("text-red-600", "text-red-700");
        assert_eq!(c.classes().to_string(), "text-red-600 dark:text-red-700");
    }

    #[test]
    fn fixed_emits_one_token() {
        assert_eq!(AdaptiveClass::fixed("border-dashed").classes().len(), 1);
    }

    #[test]
    fn resolves_per_theme() {
        let c = AdaptiveClass::new("border-black", "border-white");
        assert_eq!(c.resolve(Theme::Light), "border-black");
        assert_eq!(c.resolve(Theme::Dark), "border-white");
    }
}
