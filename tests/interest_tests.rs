mod common;

#[cfg(test)]
pub mod interest_tests {
    use uuid::Uuid;

    use super::common::*;

    use parivar::models::*;
    use parivar::services::*;

    #[test]
    fn test_ledger_second_send_is_a_no_op() {
        let ledger = InterestLedger::new();
        let me = seed_member_0().id;
        let profile = Uuid::new_v4();

        assert!(ledger.record(me, profile));
        assert!(!ledger.record(me, profile));
        assert!(ledger.already_sent(me, profile));
    }

    #[test]
    fn test_ledger_is_scoped_per_member() {
        let ledger = InterestLedger::new();
        let profile = Uuid::new_v4();

        assert!(ledger.record(seed_member_0().id, profile));
        assert!(!ledger.already_sent(seed_member_1().id, profile));
    }

    #[test]
    fn test_failed_send_rolls_back_and_re_enables() {
        let ledger = InterestLedger::new();
        let me = seed_member_0().id;
        let profile = Uuid::new_v4();

        assert!(ledger.record(me, profile));
        ledger.forget(me, profile);
        assert!(!ledger.already_sent(me, profile));
        assert!(ledger.record(me, profile));
    }

    #[test]
    fn test_seed_marks_previously_sent_interests() {
        let ledger = InterestLedger::new();
        let sender = seed_member_0();
        let recipient = seed_member_1();
        let interest = seed_interest(&sender, &recipient, InterestStatus::Pending);

        ledger.seed(sender.id, std::slice::from_ref(&interest));

        let profile = interest.profile_id.unwrap();
        assert!(ledger.already_sent(sender.id, profile));
        // The recipient never sent anything; their set stays empty.
        assert!(!ledger.already_sent(recipient.id, profile));
    }

    #[test]
    fn test_only_recipient_can_accept_pending_interest() {
        let sender = seed_member_0();
        let recipient = seed_member_1();
        let interest = seed_interest(&sender, &recipient, InterestStatus::Pending);

        assert!(can_accept(&interest, recipient.id));
        assert!(!can_accept(&interest, sender.id));
        assert!(!can_accept(&interest, Uuid::new_v4()));
    }

    #[test]
    fn test_accepted_interest_cannot_be_accepted_again() {
        let sender = seed_member_0();
        let recipient = seed_member_1();
        let interest = seed_interest(&sender, &recipient, InterestStatus::Accepted);

        assert!(!can_accept(&interest, recipient.id));
    }

    #[test]
    fn test_pending_interest_never_exposes_phone() {
        let owner = seed_member_1();
        let profile = seed_profile_for(&owner);
        assert!(profile.phone.is_some());

        assert_eq!(visible_phone(&profile, Some(InterestStatus::Pending)), None);
        assert_eq!(visible_phone(&profile, None), None);
    }

    #[test]
    fn test_accepted_interest_reveals_phone() {
        let owner = seed_member_1();
        let profile = seed_profile_for(&owner);

        assert_eq!(
            visible_phone(&profile, Some(InterestStatus::Accepted)),
            Some("9876500001")
        );
    }

    #[test]
    fn test_phone_stays_hidden_when_payload_has_none() {
        let owner = seed_member_1();
        let mut profile = seed_profile_for(&owner);
        profile.phone = None;

        assert_eq!(visible_phone(&profile, Some(InterestStatus::Accepted)), None);
    }

    #[test]
    fn test_pair_status_prefers_accepted_over_pending() {
        let a = seed_member_0();
        let b = seed_member_1();
        let pending = seed_interest(&a, &b, InterestStatus::Pending);
        let mut accepted = seed_interest(&b, &a, InterestStatus::Accepted);
        accepted.id = Uuid::new_v4();

        let interests = vec![pending, accepted];
        assert_eq!(
            pair_status(&interests, a.id, b.id),
            Some(InterestStatus::Accepted)
        );
    }

    #[test]
    fn test_pair_status_matches_both_directions() {
        let a = seed_member_0();
        let b = seed_member_1();
        let interests = vec![seed_interest(&a, &b, InterestStatus::Pending)];

        assert_eq!(
            pair_status(&interests, b.id, a.id),
            Some(InterestStatus::Pending)
        );
        assert_eq!(pair_status(&interests, a.id, Uuid::new_v4()), None);
    }
}
