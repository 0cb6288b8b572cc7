#[cfg(test)]
pub mod client_tests {
    use parivar::common::*;
    use parivar::i18n::Lang;
    use parivar::models::*;

    #[test]
    fn test_unauthorized_matches_invalid_credential_signature() {
        assert!(ApiError::Unauthorized.is_invalid_credentials());
        assert!(ApiError::from_status(401, String::new()).is_invalid_credentials());
        assert!(ApiError::from_status(403, "forbidden".to_string()).is_invalid_credentials());
    }

    #[test]
    fn test_other_failures_do_not_trigger_login_fallback() {
        assert!(!ApiError::from_status(500, "boom".to_string()).is_invalid_credentials());
        assert!(!ApiError::NotFound.is_invalid_credentials());

        let decode: ApiError = serde_json::from_str::<Member>("not json")
            .unwrap_err()
            .into();
        assert!(!decode.is_invalid_credentials());
    }

    #[test]
    fn test_from_status_maps_auth_and_missing() {
        assert!(matches!(
            ApiError::from_status(401, "anything".to_string()),
            ApiError::Unauthorized
        ));
        assert!(ApiError::from_status(404, String::new()).is_not_found());
    }

    #[test]
    fn test_from_status_derives_message_for_empty_bodies() {
        match ApiError::from_status(503, "  ".to_string()) {
            ApiError::Status { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, status_message(503));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_status_keeps_server_message_when_present() {
        match ApiError::from_status(422, "phone already registered".to_string()) {
            ApiError::Status { message, .. } => {
                assert_eq!(message, "phone already registered");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_member_payload_defaults_optional_fields() {
        let member: Member = serde_json::from_str(
            r#"{
                "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "name": "Ramesh Choudhary",
                "phone": "9876500000"
            }"#,
        )
        .unwrap();

        assert!(!member.is_admin);
        assert!(!member.membership_active);
        assert_eq!(member.avatar_url, None);
        assert_eq!(member.referral_code, None);
    }

    #[test]
    fn test_matrimony_payload_defaults_optional_fields() {
        let profile: MatrimonyProfile = serde_json::from_str(
            r#"{
                "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "member_id": "7c9e6679-7425-40de-944b-e07fc1f90ae8",
                "name": "Suman Punia"
            }"#,
        )
        .unwrap();

        assert_eq!(profile.age, None);
        assert_eq!(profile.phone, None);
        assert!(profile.photos.is_empty());
    }

    #[test]
    fn test_interest_status_wire_format_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&InterestStatus::Pending).unwrap(),
            "\"pending\""
        );
        let status: InterestStatus = serde_json::from_str("\"accepted\"").unwrap();
        assert_eq!(status, InterestStatus::Accepted);
    }

    #[test]
    fn test_bilingual_falls_back_to_the_other_locale() {
        let partial = Bilingual::new("Community meet", "");
        assert_eq!(partial.get(Lang::En), "Community meet");
        assert_eq!(partial.get(Lang::Hi), "Community meet");

        let full = Bilingual::new("News", "समाचार");
        assert_eq!(full.get(Lang::Hi), "समाचार");
    }

    #[test]
    fn test_bilingual_defaults_missing_sides() {
        let text: Bilingual = serde_json::from_str(r#"{"hi": "समाचार"}"#).unwrap();
        assert_eq!(text.en, "");
        assert_eq!(text.get(Lang::En), "समाचार");
    }

    #[test]
    fn test_news_item_without_date_has_empty_label() {
        let item: NewsItem = serde_json::from_str(
            r#"{
                "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "slug": "sammelan-2026",
                "title": {"en": "Annual gathering"}
            }"#,
        )
        .unwrap();

        assert_eq!(item.published_label(), "");
        assert!(item.body.is_empty());
    }
}
