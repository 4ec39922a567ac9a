use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Represents a user identifier (subject of the identity provider token).
/// Used to isolate carts, orders and reviews between users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Users allowed to manage the catalog and any order's payment status.
///
/// Loaded once at startup; never mutated while the server runs.
#[derive(Debug, Clone, Default)]
pub struct StoreAdmins(HashSet<UserId>);

impl StoreAdmins {
    pub fn new(ids: impl IntoIterator<Item = UserId>) -> Self {
        Self(ids.into_iter().collect())
    }

    pub fn contains(&self, user_id: &UserId) -> bool {
        self.0.contains(user_id)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantityError {
    #[error("quantity.below_minimum")]
    BelowMinimum,
    #[error("quantity.too_large")]
    TooLarge,
}

/// Number of copies on a cart or order line. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    pub fn new(value: i64) -> Result<Self, QuantityError> {
        if value < 1 {
            return Err(QuantityError::BelowMinimum);
        }
        if value > i64::from(i32::MAX) {
            return Err(QuantityError::TooLarge);
        }
        Ok(Self(value as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Wraps a stored quantity; the column's CHECK keeps it at one or more.
    pub fn from_repository(value: i32) -> Self {
        Self(value.max(1) as u32)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
