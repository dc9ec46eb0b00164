//! Payment Status Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment lifecycle status
///
/// Transitions are forward-only: pending -> verified -> completed,
/// with pending -> rejected as the refusal branch. Rejected and
/// completed are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum PaymentStatus {
    /// Submitted, awaiting review
    #[default]
    Pending = 0,

    /// Checked, ready for settlement
    Verified = 1,

    /// Refused during review
    Rejected = 2,

    /// Settled
    Completed = 3,
}

impl PaymentStatus {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
        }
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Pending),
            1 => Some(Self::Verified),
            2 => Some(Self::Rejected),
            3 => Some(Self::Completed),
            _ => None,
        }
    }

    /// Whether moving to `next` is allowed
    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Verified)
                | (Self::Pending, Self::Rejected)
                | (Self::Verified, Self::Completed)
        )
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
