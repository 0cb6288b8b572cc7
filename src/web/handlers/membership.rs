use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

use parivar::common::ApiError;
use parivar::i18n::{ui, Lang};

use crate::web::forms::CheckoutForm;
use crate::web::helpers::{cached_member, draft_from_req, parse_lang, render};
use crate::web::state::AppState;
use crate::web::templates::{MembershipTemplate, PageCtx, PlanView};

async fn plan_views(
    state: &web::Data<AppState>,
    lang: Lang,
) -> Result<Vec<PlanView>, ApiError> {
    let api = state.api.clone();
    let plans = state
        .views
        .get_or_fetch("plans", move || async move { api.plans().await })
        .await?;
    Ok(plans
        .iter()
        .map(|plan| PlanView {
            id: plan.id,
            name: plan.name.get(lang).to_string(),
            amount_inr: plan.amount_inr,
        })
        .collect())
}

#[get("/{lang}/membership")]
pub async fn plans_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);
    let ctx = PageCtx::new(lang, req.path(), cached_member(&state, &req).as_ref());

    let plans = plan_views(&state, lang).await.unwrap_or_default();
    render(MembershipTemplate {
        draft_ready: draft_from_req(&req).is_complete(),
        plans,
        error: None,
        ctx,
    })
}

/// Start a gateway checkout: the plan selection plus the stored
/// registration draft go to the payment-initiation endpoint and the
/// browser is handed off to the gateway URL. A failure stays on the
/// page as an inline bilingual alert.
#[post("/{lang}/membership/checkout")]
pub async fn checkout(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<CheckoutForm>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);
    let ctx = PageCtx::new(lang, req.path(), cached_member(&state, &req).as_ref());

    let draft = draft_from_req(&req);
    if !draft.is_complete() {
        let plans = plan_views(&state, lang).await.unwrap_or_default();
        return render(MembershipTemplate {
            plans,
            error: Some(ui(lang).complete_registration_first.to_string()),
            draft_ready: false,
            ctx,
        });
    }

    match state.api.initiate_payment(form.plan_id, &draft).await {
        Ok(init) => HttpResponse::SeeOther()
            .insert_header(("Location", init.checkout_url))
            .finish(),
        Err(err) => {
            tracing::warn!("payment initiation failed: {err}");
            let plans = plan_views(&state, lang).await.unwrap_or_default();
            render(MembershipTemplate {
                plans,
                error: Some(ui(lang).payment_failed.to_string()),
                draft_ready: true,
                ctx,
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(plans_page).service(checkout);
}
