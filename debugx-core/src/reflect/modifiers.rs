//! Member modifiers and their canonical text form.

use std::fmt;

/// Declared visibility of a field or function.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Visibility {
    /// `pub`
    Public,
    /// `pub(crate)`
    Crate,
    /// `pub(super)`
    Super,
    /// `pub(in path)`
    Restricted(String),
    /// Inherited (no visibility keyword) or `pub(self)`
    #[default]
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "pub"),
            Visibility::Crate => write!(f, "pub(crate)"),
            Visibility::Super => write!(f, "pub(super)"),
            Visibility::Restricted(path) => write!(f, "pub(in {})", path),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// Modifier set of a declared member.
///
/// Renders as the visibility followed by the set qualifiers in declaration
/// order, e.g. `pub static const` or `private`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub visibility: Visibility,
    /// Associated function without a `self` receiver
    pub is_static: bool,
    pub is_const: bool,
    pub is_async: bool,
    pub is_unsafe: bool,
    pub is_extern: bool,
}

impl Modifiers {
    pub fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            ..Self::default()
        }
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn with_async(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn with_unsafe(mut self) -> Self {
        self.is_unsafe = true;
        self
    }

    pub fn with_extern(mut self) -> Self {
        self.is_extern = true;
        self
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.visibility)?;

        let qualifiers = [
            (self.is_static, "static"),
            (self.is_const, "const"),
            (self.is_async, "async"),
            (self.is_unsafe, "unsafe"),
            (self.is_extern, "extern"),
        ];
        for (set, word) in qualifiers {
            if set {
                write!(f, " {}", word)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_display() {
        assert_eq!(Visibility::Public.to_string(), "pub");
        assert_eq!(Visibility::Crate.to_string(), "pub(crate)");
        assert_eq!(Visibility::Super.to_string(), "pub(super)");
        assert_eq!(
            Visibility::Restricted("crate::session".to_string()).to_string(),
            "pub(in crate::session)"
        );
        assert_eq!(Visibility::Private.to_string(), "private");
    }

    #[test]
    fn test_modifiers_canonical_order() {
        let mods = Modifiers::new(Visibility::Public)
            .with_unsafe()
            .with_const()
            .with_static();
        assert_eq!(mods.to_string(), "pub static const unsafe");

        let mods = Modifiers::new(Visibility::Crate).with_async();
        assert_eq!(mods.to_string(), "pub(crate) async");
    }

    #[test]
    fn test_default_is_private() {
        assert_eq!(Modifiers::default().to_string(), "private");
    }
}
