use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

use parivar::i18n::{localized, ui};
use parivar::models::RegistrationDraft;

use crate::web::forms::{LoginForm, LoginQuery, RegisterForm};
use crate::web::helpers::{
    cached_member, draft_cookie, draft_from_req, interests_key, parse_lang, removal_cookie, render,
    safe_next, session_cookie, session_token, DRAFT_COOKIE, SESSION_COOKIE,
};
use crate::web::state::AppState;
use crate::web::templates::{DraftView, LoginTemplate, PageCtx, RegisterTemplate};

#[get("/{lang}/login")]
pub async fn login_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<LoginQuery>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);

    render(LoginTemplate {
        ctx: PageCtx::new(lang, req.path(), None),
        error: query.error.as_deref().map(|code| match code {
            "credentials" => ui(lang).invalid_credentials.to_string(),
            _ => ui(lang).error_retry.to_string(),
        }),
        next: query.next.clone().unwrap_or_default(),
    })
}

#[post("/{lang}/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<LoginQuery>,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);
    let next = query.next.clone().unwrap_or_default();

    let phone = form.phone.trim();
    if phone.is_empty() || form.password.is_empty() {
        return render(LoginTemplate {
            ctx: PageCtx::new(lang, req.path(), None),
            error: Some(ui(lang).invalid_credentials.to_string()),
            next,
        });
    }

    // Admin-then-member fallback chain lives in the client layer; by
    // the time we are here the failure kind is already classified.
    match state.api.login(phone, &form.password).await {
        Ok(auth) => {
            state.sessions.invalidate(&auth.token);
            state.sessions.store(&auth.token, auth.member.clone());
            HttpResponse::SeeOther()
                .cookie(session_cookie(&auth.token))
                .cookie(removal_cookie(DRAFT_COOKIE))
                .insert_header(("Location", safe_next(query.next.as_deref(), lang)))
                .finish()
        }
        Err(err) if err.is_invalid_credentials() => render(LoginTemplate {
            ctx: PageCtx::new(lang, req.path(), None),
            error: Some(ui(lang).invalid_credentials.to_string()),
            next,
        }),
        Err(err) => {
            tracing::warn!("login failed: {err}");
            render(LoginTemplate {
                ctx: PageCtx::new(lang, req.path(), None),
                error: Some(ui(lang).error_retry.to_string()),
                next,
            })
        }
    }
}

#[post("/{lang}/logout")]
pub async fn logout(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);

    if let Some(token) = session_token(&req) {
        if let Some(member) = state.sessions.get(&token) {
            state.views.invalidate(&interests_key(member.id));
        }
        state.sessions.invalidate(&token);
    }

    HttpResponse::SeeOther()
        .cookie(removal_cookie(SESSION_COOKIE))
        .cookie(removal_cookie(DRAFT_COOKIE))
        .insert_header(("Location", localized(lang, "")))
        .finish()
}

#[get("/{lang}/register")]
pub async fn register_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);

    render(RegisterTemplate {
        ctx: PageCtx::new(lang, req.path(), cached_member(&state, &req).as_ref()),
        error: None,
        draft: DraftView::from_draft(&draft_from_req(&req)),
    })
}

#[post("/{lang}/register")]
pub async fn register_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<RegisterForm>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);

    let draft = RegistrationDraft {
        name: form.name.trim().to_string(),
        phone: form.phone.trim().to_string(),
        father_name: clean(&form.father_name),
        village: clean(&form.village),
        district: clean(&form.district),
    };

    if !draft.is_complete() {
        return render(RegisterTemplate {
            ctx: PageCtx::new(lang, req.path(), None),
            error: Some(ui(lang).name_and_phone_required.to_string()),
            draft: DraftView::from_draft(&draft),
        });
    }

    HttpResponse::SeeOther()
        .cookie(draft_cookie(&draft))
        .insert_header(("Location", localized(lang, "membership")))
        .finish()
}

fn clean(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(logout)
        .service(register_form)
        .service(register_submit);
}
