use actix_web::{get, post, web, HttpRequest, Responder};
use uuid::Uuid;

use parivar::i18n::{localized, ui};
use parivar::models::InterestStatus;
use parivar::services::{can_accept, pair_status, visible_phone};

use crate::web::forms::ErrorQuery;
use crate::web::helpers::{
    cached_member, interests_key, member_interests, parse_lang, render, require_member, see_other,
};
use crate::web::state::AppState;
use crate::web::templates::{
    ErrorTemplate, InterestRow, InterestsTemplate, MatrimonyProfileTemplate, MatrimonyTemplate,
    NotFoundTemplate, PageCtx, ProfileView,
};

#[get("/{lang}/matrimony")]
pub async fn browse(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);
    let ctx = PageCtx::new(lang, req.path(), cached_member(&state, &req).as_ref());

    let api = state.api.clone();
    match state
        .views
        .get_or_fetch("matrimony", move || async move {
            api.matrimony_profiles().await
        })
        .await
    {
        // Cards never carry contact details; those are gated on the
        // detail page by interest status.
        Ok(profiles) => render(MatrimonyTemplate {
            profiles: profiles.iter().map(ProfileView::from_profile).collect(),
            ctx,
        }),
        Err(err) => {
            tracing::warn!("matrimony fetch failed: {err}");
            render(ErrorTemplate { ctx })
        }
    }
}

#[get("/{lang}/matrimony/{id}")]
pub async fn profile_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, Uuid)>,
    query: web::Query<ErrorQuery>,
) -> impl Responder {
    let (lang_raw, id) = path.into_inner();
    let lang = parse_lang(&lang_raw, state.cfg.default_lang);

    let session = match require_member(&state, &req, lang).await {
        Ok(session) => session,
        Err(redirect) => return redirect,
    };
    let ctx = PageCtx::new(lang, req.path(), Some(&session.member));

    let profile = match state.api.matrimony_profile(id).await {
        Ok(profile) => profile,
        Err(err) if err.is_not_found() => {
            return render(NotFoundTemplate {
                heading: ui(lang).profile_not_found,
                ctx,
            })
        }
        Err(err) => {
            tracing::warn!("profile fetch for {id} failed: {err}");
            return render(ErrorTemplate { ctx });
        }
    };

    let me = session.member.id;
    let interests = member_interests(&state, &session).await.unwrap_or_default();
    let status = pair_status(&interests, me, profile.member_id);

    // Least disclosure: the phone renders only for an accepted pairing,
    // even when the payload carried it.
    let phone = visible_phone(&profile, status).map(str::to_string);
    let already_sent = status.is_some() || state.interests.already_sent(me, profile.id);

    render(MatrimonyProfileTemplate {
        profile: ProfileView::from_profile(&profile),
        phone,
        already_sent,
        accepted: matches!(status, Some(InterestStatus::Accepted)),
        error: query
            .error
            .as_deref()
            .map(|_| ui(lang).interest_failed.to_string()),
        ctx,
    })
}

#[post("/{lang}/matrimony/{id}/interest")]
pub async fn send_interest(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, Uuid)>,
) -> impl Responder {
    let (lang_raw, id) = path.into_inner();
    let lang = parse_lang(&lang_raw, state.cfg.default_lang);

    let session = match require_member(&state, &req, lang).await {
        Ok(session) => session,
        Err(redirect) => return redirect,
    };
    let me = session.member.id;
    let back = localized(lang, &format!("matrimony/{id}"));

    // Refresh the dedupe set from the server's view before the guard.
    let _ = member_interests(&state, &session).await;

    // Second attempt for the same pair is a no-op.
    if !state.interests.record(me, id) {
        return see_other(&back);
    }

    match state.api.send_interest(&session.token, id).await {
        Ok(_) => {
            state.views.invalidate(&interests_key(me));
            see_other(&back)
        }
        Err(err) => {
            // No optimistic transition survives a failed send; the
            // action re-enables.
            state.interests.forget(me, id);
            tracing::warn!("send interest failed: {err}");
            see_other(&format!("{back}?error=interest"))
        }
    }
}

#[get("/{lang}/interests")]
pub async fn inbox(
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

    match member_interests(&state, &session).await {
        Ok(interests) => {
            let received = interests
                .iter()
                .filter(|i| i.to_member == me)
                .map(|i| InterestRow::received(i, me))
                .collect();
            let sent = interests
                .iter()
                .filter(|i| i.from_member == me)
                .map(InterestRow::sent)
                .collect();
            render(InterestsTemplate { received, sent, ctx })
        }
        Err(err) => {
            tracing::warn!("interests fetch failed: {err}");
            render(ErrorTemplate { ctx })
        }
    }
}

#[post("/{lang}/interests/{id}/accept")]
pub async fn accept(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, Uuid)>,
) -> impl Responder {
    let (lang_raw, id) = path.into_inner();
    let lang = parse_lang(&lang_raw, state.cfg.default_lang);

    let session = match require_member(&state, &req, lang).await {
        Ok(session) => session,
        Err(redirect) => return redirect,
    };
    let me = session.member.id;
    let back = localized(lang, "interests");

    // Only the recipient of a pending interest may accept it.
    let interests = member_interests(&state, &session).await.unwrap_or_default();
    let Some(interest) = interests.iter().find(|i| i.id == id) else {
        return see_other(&back);
    };
    if !can_accept(interest, me) {
        return see_other(&back);
    }

    match state.api.accept_interest(&session.token, id).await {
        Ok(_) => {
            state.views.invalidate(&interests_key(me));
            see_other(&back)
        }
        Err(err) => {
            tracing::warn!("accept interest failed: {err}");
            see_other(&format!("{back}?error=accept"))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(browse)
        .service(profile_detail)
        .service(send_interest)
        .service(inbox)
        .service(accept);
}
