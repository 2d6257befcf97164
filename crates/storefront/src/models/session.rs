//! Session-related types.
//!
//! All per-visitor state lives in the session: the signed-in identity, the
//! cart, the applied coupon code, the assistant conversation, and the image
//! search. Nothing is persisted outside it.

use serde::{Deserialize, Serialize};

/// Default display name when sign-in provides none.
pub const DEFAULT_DISPLAY_NAME: &str = "Jane Doe";

/// Session-stored user identity.
///
/// Authentication is mocked: any submitted credentials produce a signed-in
/// identity, and nothing is verified or stored server-side beyond this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Display name.
    pub name: String,
    /// Submitted email address.
    pub email: String,
}

impl CurrentUser {
    /// Build an identity from sign-in input, falling back to the default
    /// display name when none is given.
    #[must_use]
    pub fn new(name: Option<String>, email: String) -> Self {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());
        Self { name, email }
    }
}

/// Session keys for per-visitor state.
pub mod keys {
    /// Key for storing the current signed-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the cart ledger.
    pub const CART: &str = "cart";

    /// Key for the applied coupon code.
    pub const COUPON: &str = "coupon";

    /// Key for the assistant conversation.
    pub const CHAT: &str = "chat";

    /// Key for the image search state.
    pub const VISION: &str = "vision";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_defaults_name() {
        let user = CurrentUser::new(None, "jane@example.com".to_string());
        assert_eq!(user.name, DEFAULT_DISPLAY_NAME);

        let user = CurrentUser::new(Some("  ".to_string()), "jane@example.com".to_string());
        assert_eq!(user.name, DEFAULT_DISPLAY_NAME);
    }

    #[test]
    fn test_current_user_keeps_given_name() {
        let user = CurrentUser::new(Some("Amara".to_string()), "amara@example.com".to_string());
        assert_eq!(user.name, "Amara");
    }
}
