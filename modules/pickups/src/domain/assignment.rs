//! Operator assignment policy.

use uuid::Uuid;

use users_directory::contract::model::User;

/// Pick an operator for a request from a snapshot of the PSP pool.
///
/// An explicit preferred operator wins regardless of zone when it exists in
/// the pool. Otherwise the first operator whose zone matches the request and
/// who has not flagged themselves unavailable is chosen; the pool arrives in
/// stable registration order, so first-match-wins is deterministic. `None`
/// leaves the request unassigned, awaiting manual dispatch.
pub fn resolve<'a>(preferred: Option<Uuid>, zone: &str, pool: &'a [User]) -> Option<&'a User> {
    if let Some(preferred_id) = preferred {
        if let Some(operator) = pool.iter().find(|op| op.id == preferred_id) {
            return Some(operator);
        }
    }

    pool.iter().find(|op| op.zone == zone && op.is_available())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use users_directory::contract::model::UserRole;

    fn operator(name: &str, zone: &str, availability: Option<bool>) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@ops.ng", name.to_lowercase().replace(' ', ".")),
            phone: "08000000000".to_string(),
            role: UserRole::PspOperator,
            zone: zone.to_string(),
            availability,
            preferred_operator_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn matches_zone_and_availability() {
        let pool = vec![
            operator("Far Ops", "Akobo", Some(true)),
            operator("CleanOyo", "Bodija", Some(true)),
        ];

        let chosen = resolve(None, "Bodija", &pool).expect("operator assigned");
        assert_eq!(chosen.name, "CleanOyo");
    }

    #[test]
    fn unset_availability_counts_as_available() {
        let pool = vec![operator("CleanOyo", "Bodija", None)];
        assert!(resolve(None, "Bodija", &pool).is_some());
    }

    #[test]
    fn unavailable_operators_are_skipped() {
        let pool = vec![
            operator("Busy Ops", "Bodija", Some(false)),
            operator("CleanOyo", "Bodija", Some(true)),
        ];

        let chosen = resolve(None, "Bodija", &pool).expect("operator assigned");
        assert_eq!(chosen.name, "CleanOyo");
    }

    #[test]
    fn no_match_leaves_unassigned() {
        let pool = vec![operator("Far Ops", "Akobo", Some(true))];
        assert!(resolve(None, "Bodija", &pool).is_none());
        assert!(resolve(None, "Bodija", &[]).is_none());
    }

    #[test]
    fn first_match_wins_in_pool_order() {
        let pool = vec![
            operator("First Ops", "Bodija", Some(true)),
            operator("Second Ops", "Bodija", Some(true)),
        ];

        let chosen = resolve(None, "Bodija", &pool).expect("operator assigned");
        assert_eq!(chosen.id, pool[0].id);
    }

    #[test]
    fn preferred_operator_overrides_zone() {
        let pool = vec![
            operator("Local Ops", "Bodija", Some(true)),
            operator("Preferred Ops", "Akobo", Some(false)),
        ];

        let chosen = resolve(Some(pool[1].id), "Bodija", &pool).expect("operator assigned");
        assert_eq!(chosen.id, pool[1].id);
    }

    #[test]
    fn unknown_preference_falls_back_to_zone_match() {
        let pool = vec![operator("Local Ops", "Bodija", Some(true))];

        let chosen = resolve(Some(Uuid::new_v4()), "Bodija", &pool).expect("operator assigned");
        assert_eq!(chosen.id, pool[0].id);
    }
}
