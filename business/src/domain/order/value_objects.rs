use serde::{Deserialize, Serialize};

const SHIPPING_ADDRESS_MAX_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Canceled,
}

impl PaymentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Paid | PaymentStatus::Canceled)
    }

    /// Pending may settle either way or be canceled; a failed payment can be
    /// retried or canceled. Paid and canceled orders never change again.
    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        use PaymentStatus::*;
        matches!(
            (self, next),
            (Pending, Paid)
                | (Pending, Failed)
                | (Pending, Canceled)
                | (Failed, Pending)
                | (Failed, Canceled)
        )
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "PENDING"),
            PaymentStatus::Paid => write!(f, "PAID"),
            PaymentStatus::Failed => write!(f, "FAILED"),
            PaymentStatus::Canceled => write!(f, "CANCELED"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(PaymentStatus::Pending),
            "PAID" => Ok(PaymentStatus::Paid),
            "FAILED" => Ok(PaymentStatus::Failed),
            "CANCELED" => Ok(PaymentStatus::Canceled),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShippingAddressError {
    #[error("order.shipping_address_empty")]
    Empty,
    #[error("order.shipping_address_too_long")]
    TooLong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddress(String);

impl ShippingAddress {
    pub fn new(value: impl Into<String>) -> Result<Self, ShippingAddressError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(ShippingAddressError::Empty);
        }
        if value.chars().count() > SHIPPING_ADDRESS_MAX_CHARS {
            return Err(ShippingAddressError::TooLong);
        }
        Ok(Self(value))
    }

    /// Wraps a value read back from storage.
    pub fn from_repository(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShippingAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
