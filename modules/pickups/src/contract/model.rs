use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use uuid::Uuid;

/// Pickup request lifecycle states.
///
/// The only legal edges are PENDING → SCHEDULED → ON_THE_WAY → COMPLETED,
/// with CANCELLED reachable from PENDING or SCHEDULED. COMPLETED and
/// CANCELLED are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickupStatus {
    Pending,
    Scheduled,
    OnTheWay,
    Completed,
    Cancelled,
}

impl PickupStatus {
    /// Check whether `next` is a legal transition target from this state.
    ///
    /// A state is never a legal target from itself; the lifecycle engine
    /// treats same-state updates as a no-op before consulting this table.
    pub fn can_transition_to(self, next: PickupStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Scheduled)
                | (Self::Pending, Self::Cancelled)
                | (Self::Scheduled, Self::OnTheWay)
                | (Self::Scheduled, Self::Cancelled)
                | (Self::OnTheWay, Self::Completed)
        )
    }

    /// Check if this is a terminal state (no further transitions allowed)
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for PickupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Scheduled => write!(f, "SCHEDULED"),
            Self::OnTheWay => write!(f, "ON_THE_WAY"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl std::str::FromStr for PickupStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "SCHEDULED" => Ok(Self::Scheduled),
            "ON_THE_WAY" => Ok(Self::OnTheWay),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid pickup status: {s}")),
        }
    }
}

/// Categories of household waste, displayed with the labels residents see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WasteType {
    General,
    Recyclable,
    Organic,
    Hazardous,
    Construction,
}

impl fmt::Display for WasteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General => write!(f, "General Household"),
            Self::Recyclable => write!(f, "Recyclable (Plastic/Paper)"),
            Self::Organic => write!(f, "Organic/Food Waste"),
            Self::Hazardous => write!(f, "Hazardous/Medical"),
            Self::Construction => write!(f, "Construction/Bulky"),
        }
    }
}

impl std::str::FromStr for WasteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "General Household" | "GENERAL" => Ok(Self::General),
            "Recyclable (Plastic/Paper)" | "RECYCLABLE" => Ok(Self::Recyclable),
            "Organic/Food Waste" | "ORGANIC" => Ok(Self::Organic),
            "Hazardous/Medical" | "HAZARDOUS" => Ok(Self::Hazardous),
            "Construction/Bulky" | "CONSTRUCTION" => Ok(Self::Construction),
            _ => Err(format!("Invalid waste type: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" | "LOW" => Ok(Self::Low),
            "Medium" | "MEDIUM" => Ok(Self::Medium),
            "High" | "HIGH" => Ok(Self::High),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

/// Map pin for a pickup address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Pure pickup-request model for inter-module communication (no serde)
#[derive(Debug, Clone, PartialEq)]
pub struct PickupRequest {
    pub id: Uuid,
    pub resident_id: Uuid,
    pub resident_name: String,
    pub operator_id: Option<Uuid>,
    pub operator_name: Option<String>,
    /// The general area/zone.
    pub zone: String,
    pub house_number: String,
    pub street_name: String,
    pub landmark: String,
    pub contact_phone: String,
    pub coordinates: Option<Coordinates>,
    pub waste_type: WasteType,
    pub priority: Priority,
    pub scheduled_date: NaiveDate,
    pub status: PickupStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a pickup request.
///
/// `resident_id` is only consulted for manual entries by non-resident
/// actors; residents are always their own origin.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewPickupRequest {
    pub resident_id: Option<Uuid>,
    /// Defaults to the origin resident's zone.
    pub zone: Option<String>,
    pub house_number: String,
    pub street_name: String,
    pub landmark: String,
    pub contact_phone: String,
    pub coordinates: Option<Coordinates>,
    pub waste_type: Option<WasteType>,
    /// Defaults to Medium.
    pub priority: Option<Priority>,
    /// Defaults to today.
    pub scheduled_date: Option<NaiveDate>,
    pub notes: Option<String>,
    /// Overrides zone matching when it names an existing operator.
    pub preferred_operator_id: Option<Uuid>,
}

/// Role-scoped visibility for request listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestScope {
    All,
    Resident(Uuid),
    Operator(Uuid),
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [PickupStatus; 5] = [
        PickupStatus::Pending,
        PickupStatus::Scheduled,
        PickupStatus::OnTheWay,
        PickupStatus::Completed,
        PickupStatus::Cancelled,
    ];

    #[test]
    fn exactly_the_five_legal_edges() {
        let legal = [
            (PickupStatus::Pending, PickupStatus::Scheduled),
            (PickupStatus::Pending, PickupStatus::Cancelled),
            (PickupStatus::Scheduled, PickupStatus::OnTheWay),
            (PickupStatus::Scheduled, PickupStatus::Cancelled),
            (PickupStatus::OnTheWay, PickupStatus::Completed),
        ];

        for from in ALL_STATUSES {
            for to in ALL_STATUSES {
                let expected = legal.contains(&(from, to));
                assert_eq!(
                    from.can_transition_to(to),
                    expected,
                    "edge {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn terminal_states_reject_everything() {
        for terminal in [PickupStatus::Completed, PickupStatus::Cancelled] {
            assert!(terminal.is_terminal());
            for to in ALL_STATUSES {
                assert!(!terminal.can_transition_to(to));
            }
        }
    }

    #[test]
    fn same_state_is_never_a_legal_edge() {
        for status in ALL_STATUSES {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn status_tokens_round_trip() {
        for status in ALL_STATUSES {
            let parsed: PickupStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("EN_ROUTE".parse::<PickupStatus>().is_err());
    }

    #[test]
    fn waste_type_accepts_labels_and_tokens() {
        assert_eq!(
            "General Household".parse::<WasteType>().unwrap(),
            WasteType::General
        );
        assert_eq!("RECYCLABLE".parse::<WasteType>().unwrap(), WasteType::Recyclable);
        assert!("Nuclear".parse::<WasteType>().is_err());
    }
}
