use actix_web::{get, web, HttpRequest, Responder};

use parivar::models::InterestStatus;

use crate::web::helpers::{member_interests, parse_lang, render, require_member};
use crate::web::state::AppState;
use crate::web::templates::{DashboardTemplate, PageCtx};

#[get("/{lang}/dashboard")]
pub async fn dashboard(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);

    let session = match require_member(&state, &req, lang).await {
        Ok(session) => session,
        Err(redirect) => return redirect,
    };
    let ctx = PageCtx::new(lang, req.path(), Some(&session.member));
    let me = session.member.id;

    let interests = member_interests(&state, &session).await.unwrap_or_default();
    let pending_received = interests
        .iter()
        .filter(|i| i.to_member == me && i.status == InterestStatus::Pending)
        .count();
    let accepted_count = interests
        .iter()
        .filter(|i| i.status == InterestStatus::Accepted)
        .count();

    render(DashboardTemplate {
        member: session.member,
        pending_received,
        accepted_count,
        ctx,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard);
}
