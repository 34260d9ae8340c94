//! Configuration scope mapping.
//!
//! A scope decides how broadly a git config value applies: to every
//! repository of the current user, to one repository, or to every user
//! on the machine. Each scope maps to a fixed git flag and a lowercase
//! label used in user-facing messages.

use std::fmt::{Display, Formatter};

/// Breadth of applicability of a configuration value.
///
/// The menu order is fixed by [`Scope::ALL`], with `Global` in the
/// default position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Global,
    Local,
    System,
}

impl Scope {
    /// All scopes in menu order. `Global` first, so it is the initial
    /// selection in the interactive menu.
    pub const ALL: [Scope; 3] = [Scope::Global, Scope::Local, Scope::System];

    /// The flag token passed to `git config`.
    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Scope::Global => "--global",
            Scope::Local => "--local",
            Scope::System => "--system",
        }
    }

    /// The lowercase label used in summaries and log lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Local => "local",
            Scope::System => "system",
        }
    }

    /// The line shown for this scope in the selection menu.
    #[must_use]
    pub fn menu_item(self) -> &'static str {
        match self {
            Scope::Global => "Global (applies to all repos)",
            Scope::Local => "Local (applies only to this repo)",
            Scope::System => "System (rarely used, for all users)",
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_mapping_is_fixed() {
        assert_eq!(Scope::Global.flag(), "--global");
        assert_eq!(Scope::Local.flag(), "--local");
        assert_eq!(Scope::System.flag(), "--system");
    }

    #[test]
    fn test_label_mapping_is_fixed() {
        assert_eq!(Scope::Global.label(), "global");
        assert_eq!(Scope::Local.label(), "local");
        assert_eq!(Scope::System.label(), "system");
    }

    #[test]
    fn test_menu_order_has_global_first() {
        assert_eq!(Scope::ALL[0], Scope::Global);
        assert_eq!(Scope::ALL[1], Scope::Local);
        assert_eq!(Scope::ALL[2], Scope::System);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Scope::Global.to_string(), "global");
        assert_eq!(Scope::System.to_string(), "system");
    }
}
