use crate::contract::model::{EventContext, EventKind};

/// Deterministic message for an event kind, used whenever the
/// text-generation collaborator fails, times out, or returns nothing.
pub fn fallback_message(kind: EventKind, ctx: &EventContext) -> String {
    let name = if ctx.recipient_name.trim().is_empty() {
        "Citizen"
    } else {
        ctx.recipient_name.as_str()
    };
    let waste = ctx.waste_type.as_deref().unwrap_or("waste");
    let zone = ctx.zone.as_deref().unwrap_or("your area");

    match kind {
        EventKind::PickupConfirmation => {
            format!("Hello {name}, your {waste} pickup at {zone} is confirmed.")
        }
        EventKind::OperatorNewJob => format!("New pickup job: {waste} at {zone}."),
        EventKind::DriverEnRoute => {
            format!("Waste Up: your collection driver is en route to {zone}.")
        }
        EventKind::PickupCompleted => format!(
            "Waste Up: your {waste} pickup is complete. Thank you for keeping your city clean."
        ),
        EventKind::StatusUpdate => format!(
            "Waste Up: your pickup status is now {}. Thank you!",
            ctx.status.as_deref().unwrap_or("updated")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EventContext {
        EventContext {
            recipient_name: "Ayo Balogun".to_string(),
            waste_type: Some("General Household".to_string()),
            zone: Some("Bodija".to_string()),
            status: Some("SCHEDULED".to_string()),
        }
    }

    #[test]
    fn every_kind_has_a_nonempty_template() {
        for kind in [
            EventKind::PickupConfirmation,
            EventKind::OperatorNewJob,
            EventKind::DriverEnRoute,
            EventKind::PickupCompleted,
            EventKind::StatusUpdate,
        ] {
            assert!(!fallback_message(kind, &ctx()).is_empty());
        }
    }

    #[test]
    fn confirmation_mentions_waste_type_and_zone() {
        let msg = fallback_message(EventKind::PickupConfirmation, &ctx());
        assert_eq!(
            msg,
            "Hello Ayo Balogun, your General Household pickup at Bodija is confirmed."
        );
    }

    #[test]
    fn en_route_and_completed_have_distinct_copy() {
        let en_route = fallback_message(EventKind::DriverEnRoute, &ctx());
        let completed = fallback_message(EventKind::PickupCompleted, &ctx());
        assert!(en_route.contains("en route"));
        assert!(completed.contains("Thank you"));
        assert_ne!(en_route, completed);
    }

    #[test]
    fn missing_context_falls_back_to_placeholders() {
        let msg = fallback_message(EventKind::PickupConfirmation, &EventContext::default());
        assert_eq!(msg, "Hello Citizen, your waste pickup at your area is confirmed.");
    }
}
