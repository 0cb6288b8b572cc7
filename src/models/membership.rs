use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Bilingual, RegistrationDraft};

/// A membership plan offered on the payment page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipPlan {
    pub id: Uuid,
    #[serde(default)]
    pub name: Bilingual,
    /// Amount in whole rupees.
    pub amount_inr: u32,
    #[serde(default = "default_period_months")]
    pub period_months: u32,
}

fn default_period_months() -> u32 {
    12
}

/// Payload for `/payments/initiate`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequest<'a> {
    pub plan_id: Uuid,
    pub draft: &'a RegistrationDraft,
}

/// Gateway hand-off returned by a successful payment initiation. The
/// browser is sent to `checkout_url` with a full-page redirect.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentInit {
    pub checkout_url: String,
}
