//! Reservation rejection taxonomy.

use chrono::Weekday;
use thiserror::Error;

use super::time_period::TimePeriod;

/// Why a reservation request was refused.
///
/// All variants are caller errors. `Conflict` is the one reason that can
/// arise purely from racing another request and is worth retrying with a
/// different slot; the others describe the request itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectionReason {
    #[error("court {0} not found")]
    CourtNotFound(i32),

    #[error("facility {0} not found")]
    FacilityNotFound(i32),

    #[error("invalid period: start must be strictly before end")]
    InvalidPeriod,

    #[error("facility is closed on {0}")]
    Closed(Weekday),

    #[error("requested period is outside the operating window {window}")]
    OutOfHours { window: TimePeriod },

    #[error("requested period conflicts with {with}")]
    Conflict { with: TimePeriod },
}

impl RejectionReason {
    /// Whether retrying the same court with a different slot can succeed.
    ///
    /// Distinguishes "try a different time" from "bad request" for the
    /// API layer's response mapping.
    pub fn is_slot_related(&self) -> bool {
        matches!(
            self,
            Self::Closed(_) | Self::OutOfHours { .. } | Self::Conflict { .. }
        )
    }
}
