use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;
use base64::{engine::general_purpose, Engine as _};
use uuid::Uuid;

use parivar::common::ApiError;
use parivar::i18n::{localized, Lang};
use parivar::models::{Interest, Member, RegistrationDraft};

use crate::web::state::AppState;

/// Fixed storage keys, cleared on successful login/logout.
pub const SESSION_COOKIE: &str = "jp_session";
pub const DRAFT_COOKIE: &str = "jp_draft";

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

/// Locale from the path segment the route matched. The middleware has
/// already redirected anything unsupported, so the default is only a
/// safety net.
pub fn parse_lang(code: &str, default: Lang) -> Lang {
    Lang::from_code(code).unwrap_or(default)
}

pub fn session_token(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// A resolved, signed-in session.
pub struct Session {
    pub member: Member,
    pub token: String,
}

/// Route guard for the protected subtree.
///
/// Resolves the session cookie through the cached, non-retrying
/// identity check. On absence or failure the caller gets a redirect to
/// the login page carrying the originally requested path, so the user
/// lands back where they started after signing in.
pub async fn require_member(
    state: &AppState,
    req: &HttpRequest,
    lang: Lang,
) -> Result<Session, HttpResponse> {
    let Some(token) = session_token(req) else {
        return Err(login_redirect(req, lang));
    };

    match state.sessions.resolve(&state.api, &token).await {
        Ok(member) => Ok(Session { member, token }),
        Err(err) => {
            tracing::warn!("session check failed: {err}");
            Err(login_redirect(req, lang))
        }
    }
}

/// Member identity for optional display on public pages: answered from
/// the session cache only, so public pages never trigger a network call.
pub fn cached_member(state: &AppState, req: &HttpRequest) -> Option<Member> {
    session_token(req).and_then(|token| state.sessions.get(&token))
}

/// The signed-in member's interests, cached per member and seeded into
/// the dedupe ledger. Mutations invalidate this key explicitly.
pub async fn member_interests(
    state: &AppState,
    session: &Session,
) -> Result<Vec<Interest>, ApiError> {
    let api = state.api.clone();
    let token = session.token.clone();
    let key = interests_key(session.member.id);
    let interests: Vec<Interest> = state
        .views
        .get_or_fetch(&key, move || async move { api.interests(&token).await })
        .await?;
    state.interests.seed(session.member.id, &interests);
    Ok(interests)
}

pub fn interests_key(member: Uuid) -> String {
    format!("interests:{member}")
}

fn login_redirect(req: &HttpRequest, lang: Lang) -> HttpResponse {
    see_other(&format!(
        "{}?next={}",
        localized(lang, "login"),
        req.path()
    ))
}

pub fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn draft_cookie(draft: &RegistrationDraft) -> Cookie<'static> {
    // JSON is not cookie-safe; the draft travels base64-encoded.
    let json = serde_json::to_string(draft).unwrap_or_default();
    let value = general_purpose::URL_SAFE_NO_PAD.encode(json);
    Cookie::build(DRAFT_COOKIE, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}

/// Registration draft from its cookie; a missing or garbled cookie is
/// an empty draft.
pub fn draft_from_req(req: &HttpRequest) -> RegistrationDraft {
    req.cookie(DRAFT_COOKIE)
        .and_then(|c| general_purpose::URL_SAFE_NO_PAD.decode(c.value()).ok())
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

/// A `next` target is honored only when it is a local path.
pub fn safe_next(next: Option<&str>, lang: Lang) -> String {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => localized(lang, "dashboard"),
    }
}
