//! Class-name composition.
//!
//! [`ClassList`] collects utility-class tokens in insertion order and renders
//! them space-separated. Empty tokens are dropped, conditional tokens are
//! pushed with [`ClassList::push_if`], and whole lists merge with
//! [`ClassList::extend`]. Duplicates are kept; order carries meaning for
//! utility CSS and the caller decides it.

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<Cow<'static, str>>,
}

impl ClassList {
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Split a whitespace-separated class string into tokens.
    #[must_use]
    pub fn parse(classes: &'static str) -> Self {
        Self {
            tokens: classes.split_whitespace().map(Cow::Borrowed).collect(),
        }
    }

    pub fn push(&mut self, token: impl Into<Cow<'static, str>>) {
        let token = token.into();
        if !token.trim().is_empty() {
            self.tokens.push(token);
        }
    }

    pub fn push_if(&mut self, condition: bool, token: impl Into<Cow<'static, str>>) {
        if condition {
            self.push(token);
        }
    }

    #[must_use]
    pub fn with(mut self, token: impl Into<Cow<'static, str>>) -> Self {
        self.push(token);
        self
    }

    #[must_use]
    pub fn with_list(mut self, other: ClassList) -> Self {
        self.extend(other);
        self
    }

    pub fn extend(&mut self, other: ClassList) {
        self.tokens.extend(other.tokens);
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| &**t)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl From<&'static str> for ClassList {
    fn from(classes: &'static str) -> Self {
        Self::parse(classes)
    }
}

impl<T: Into<Cow<'static, str>>> FromIterator<T> for ClassList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for token in iter {
            list.push(token);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::ClassList;

    #[test]
    fn joins_with_single_spaces() {
        let list = ClassList::parse("  flex   items-center ").with("font-bold");
        assert_eq!(list.to_string(), "flex items-center font-bold");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn skips_empty_and_false_tokens() {
        let mut list = ClassList::new();
        list.push("");
        list.push("   ");
        list.push_if(false, "hidden");
        list.push_if(true, "block");
        assert_eq!(list.to_string(), "block");
    }

    #[test]
    fn extend_keeps_order() {
        let list = ClassList::parse("a b").with_list(ClassList::parse("c"));
        assert_eq!(list.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert!(list.contains("b"));
        assert!(!list.contains("d"));
    }

    #[test]
    fn collects_owned_tokens() {
        let list: ClassList = ["lg:h-20".to_string(), String::new()].into_iter().collect();
        assert_eq!(list.to_string(), "lg:h-20");
    }
}
