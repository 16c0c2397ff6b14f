use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Delivery channel for one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Medium {
    Sms,
    Email,
    System,
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sms => write!(f, "SMS"),
            Self::Email => write!(f, "EMAIL"),
            Self::System => write!(f, "SYSTEM"),
        }
    }
}

impl std::str::FromStr for Medium {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SMS" => Ok(Self::Sms),
            "EMAIL" => Ok(Self::Email),
            "SYSTEM" => Ok(Self::System),
            _ => Err(format!("Invalid notification medium: {s}")),
        }
    }
}

/// The lifecycle events the dispatcher knows how to phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Resident confirmation after a pickup request is created.
    PickupConfirmation,
    /// New-job alert toward the assigned operator.
    OperatorNewJob,
    /// The collection driver is on the way.
    DriverEnRoute,
    /// Pickup finished.
    PickupCompleted,
    /// Any other status change.
    StatusUpdate,
}

impl EventKind {
    /// Creation/confirmation events go out by email, status changes by SMS.
    pub fn medium(self) -> Medium {
        match self {
            Self::PickupConfirmation | Self::OperatorNewJob => Medium::Email,
            Self::DriverEnRoute | Self::PickupCompleted | Self::StatusUpdate => Medium::Sms,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PickupConfirmation => write!(f, "PICKUP_CONFIRMATION"),
            Self::OperatorNewJob => write!(f, "OPERATOR_NEW_JOB"),
            Self::DriverEnRoute => write!(f, "DRIVER_EN_ROUTE"),
            Self::PickupCompleted => write!(f, "PICKUP_COMPLETED"),
            Self::StatusUpdate => write!(f, "STATUS_UPDATE"),
        }
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PICKUP_CONFIRMATION" => Ok(Self::PickupConfirmation),
            "OPERATOR_NEW_JOB" => Ok(Self::OperatorNewJob),
            "DRIVER_EN_ROUTE" => Ok(Self::DriverEnRoute),
            "PICKUP_COMPLETED" => Ok(Self::PickupCompleted),
            "STATUS_UPDATE" => Ok(Self::StatusUpdate),
            _ => Err(format!("Invalid event kind: {s}")),
        }
    }
}

/// Free-form context handed to message composition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventContext {
    pub recipient_name: String,
    pub waste_type: Option<String>,
    pub zone: Option<String>,
    pub status: Option<String>,
}

/// One dispatch request: who gets told about what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyEvent {
    pub kind: EventKind,
    pub recipient_id: Uuid,
    pub context: EventContext,
}

/// Persisted (and broadcast) notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    pub id: Uuid,
    /// Recipient.
    pub user_id: Uuid,
    pub kind: EventKind,
    pub message: String,
    pub medium: Medium,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}
