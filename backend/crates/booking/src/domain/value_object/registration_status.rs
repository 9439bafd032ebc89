//! Registration payment state

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BookingError;

/// `pending_payment` until the school confirms payment; may be reverted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    #[default]
    #[display("pending_payment")]
    PendingPayment,
    #[display("approved")]
    Approved,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::PendingPayment => "pending_payment",
            RegistrationStatus::Approved => "approved",
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, RegistrationStatus::Approved)
    }
}

impl FromStr for RegistrationStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_payment" => Ok(RegistrationStatus::PendingPayment),
            "approved" => Ok(RegistrationStatus::Approved),
            _ => Err(BookingError::InvalidStatus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_agree() {
        for status in [RegistrationStatus::PendingPayment, RegistrationStatus::Approved] {
            assert_eq!(status.as_str().parse::<RegistrationStatus>().unwrap(), status);
            assert_eq!(status.to_string(), status.as_str());
        }
        assert!("paid".parse::<RegistrationStatus>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&RegistrationStatus::PendingPayment).unwrap();
        assert_eq!(json, "\"pending_payment\"");
    }
}
