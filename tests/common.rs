use uuid::Uuid;

use parivar::models::*;

pub fn seed_member_0() -> Member {
    Member {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000000").unwrap(),
        name: "Ramesh Choudhary".to_string(),
        phone: "9876500000".to_string(),
        avatar_url: None,
        is_admin: false,
        membership_active: true,
        referral_code: Some("JP-RAM-001".to_string()),
    }
}

pub fn seed_member_1() -> Member {
    Member {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        name: "Suman Punia".to_string(),
        phone: "9876500001".to_string(),
        avatar_url: None,
        is_admin: false,
        membership_active: false,
        referral_code: None,
    }
}

pub fn seed_profile_for(owner: &Member) -> MatrimonyProfile {
    MatrimonyProfile {
        id: Uuid::parse_str("00000000-0000-0000-0000-0000000000a0").unwrap(),
        member_id: owner.id,
        name: owner.name.clone(),
        age: Some(27),
        gotra: Some("Punia".to_string()),
        village: Some("Kharia".to_string()),
        district: Some("Jhunjhunu".to_string()),
        state: Some("Rajasthan".to_string()),
        education: Some("M.Sc.".to_string()),
        occupation: Some("Teacher".to_string()),
        photos: vec![],
        phone: Some(owner.phone.clone()),
    }
}

pub fn seed_interest(from: &Member, to: &Member, status: InterestStatus) -> Interest {
    Interest {
        id: Uuid::parse_str("00000000-0000-0000-0000-0000000000b0").unwrap(),
        from_member: from.id,
        to_member: to.id,
        status,
        profile_id: Some(Uuid::parse_str("00000000-0000-0000-0000-0000000000a0").unwrap()),
        from_name: Some(from.name.clone()),
        to_name: Some(to.name.clone()),
    }
}
