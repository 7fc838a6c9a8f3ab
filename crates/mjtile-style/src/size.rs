//! Box dimensions as utility classes.

use crate::responsive::ClassTokens;

/// Height, width and minimum width of a box, as utility-class values
/// (`"16"`, `"12"`, `"[3.75rem]"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxSize {
    pub height: &'static str,
    pub width: &'static str,
    pub min_width: &'static str,
}

impl BoxSize {
    #[must_use]
    pub const fn new(height: &'static str, width: &'static str, min_width: &'static str) -> Self {
        Self {
            height,
            width,
            min_width,
        }
    }
}

impl ClassTokens for BoxSize {
    fn tokens(&self) -> Vec<String> {
        vec![
            format!("h-{}", self.height),
            format!("w-{}", self.width),
            format!("min-w-{}", self.min_width),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Breakpoint, Responsive};

    #[test]
    fn responsive_size_classes() {
        let size = Responsive::new(BoxSize::new("8", "6", "[1.5rem]"))
            .at(Breakpoint::Lg, BoxSize::new("16", "12", "[3rem]"));
        assert_eq!(
            size.classes().to_string(),
            "h-8 w-6 min-w-[1.5rem] lg:h-16 lg:w-12 lg:min-w-[3rem]"
        );
    }
}
