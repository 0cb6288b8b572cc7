use uuid::Uuid;

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::models::{Interest, InterestStatus, MatrimonyProfile};

/// Per-member record of matrimony profiles already contacted.
///
/// Gates the send action so a second attempt for the same pair is a
/// no-op from this client's perspective. A failed send is rolled back
/// with `forget`, leaving the pair at `none` and the action enabled.
pub struct InterestLedger {
    sent: Mutex<HashMap<Uuid, HashSet<Uuid>>>,
}

impl InterestLedger {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(HashMap::new()),
        }
    }

    pub fn already_sent(&self, member: Uuid, profile: Uuid) -> bool {
        let sent = self
            .sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        sent.get(&member).is_some_and(|set| set.contains(&profile))
    }

    /// Record a send. Returns `false` when the pair was already
    /// recorded, in which case the caller must not issue the call again.
    pub fn record(&self, member: Uuid, profile: Uuid) -> bool {
        let mut sent = self
            .sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        sent.entry(member).or_default().insert(profile)
    }

    /// Roll back a failed send so the action re-enables.
    pub fn forget(&self, member: Uuid, profile: Uuid) {
        let mut sent = self
            .sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(set) = sent.get_mut(&member) {
            set.remove(&profile);
        }
    }

    /// Seed the ledger from the member's interest list, so the dedupe
    /// set reflects interests sent before this process started.
    pub fn seed(&self, member: Uuid, interests: &[Interest]) {
        let mut sent = self
            .sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let set = sent.entry(member).or_default();
        for interest in interests {
            if interest.from_member == member {
                if let Some(profile) = interest.profile_id {
                    set.insert(profile);
                }
            }
        }
    }
}

impl Default for InterestLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Combined status of the (a, b) pairing across both directions.
/// `Accepted` wins over `Pending`; `None` means no interest exists yet.
pub fn pair_status(interests: &[Interest], a: Uuid, b: Uuid) -> Option<InterestStatus> {
    let mut status = None;
    for interest in interests {
        let matches_pair = (interest.from_member == a && interest.to_member == b)
            || (interest.from_member == b && interest.to_member == a);
        if !matches_pair {
            continue;
        }
        if interest.status == InterestStatus::Accepted {
            return Some(InterestStatus::Accepted);
        }
        status = Some(InterestStatus::Pending);
    }
    status
}

/// Whether `actor` may accept this interest: only the recipient of a
/// still-pending interest can, and the transition is irreversible.
pub fn can_accept(interest: &Interest, actor: Uuid) -> bool {
    interest.status == InterestStatus::Pending && interest.to_member == actor
}

/// Least-disclosure gate for contact details: the phone number renders
/// only once the pairing reached `Accepted`, regardless of what the
/// payload carried.
pub fn visible_phone(profile: &MatrimonyProfile, status: Option<InterestStatus>) -> Option<&str> {
    match status {
        Some(InterestStatus::Accepted) => profile.phone.as_deref(),
        _ => None,
    }
}
