use actix_web::{get, web, HttpRequest, HttpResponse, Responder};

use parivar::i18n::{fallback, localized, ui, Lang};
use parivar::models::ContentPage;

use crate::web::helpers::{cached_member, parse_lang, render, see_other};
use crate::web::state::AppState;
use crate::web::templates::{
    ContentTemplate, ErrorTemplate, HomeTemplate, InstitutionView, InstitutionsTemplate, JobView,
    JobsTemplate, NewsView, NotFoundTemplate, PageCtx,
};

fn ctx_for(state: &AppState, req: &HttpRequest, lang: Lang) -> PageCtx {
    PageCtx::new(lang, req.path(), cached_member(state, req).as_ref())
}

#[get("/{lang}")]
pub async fn home(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);

    // The home page degrades to its marketing sections when the news
    // feed is unavailable; it never turns into an error page.
    let api = state.api.clone();
    let news = state
        .views
        .get_or_fetch("news", move || async move { api.news().await })
        .await
        .unwrap_or_default();

    let news = news
        .iter()
        .take(3)
        .map(|item| NewsView::from_item(item, lang))
        .collect();

    render(HomeTemplate {
        ctx: ctx_for(&state, &req, lang),
        news,
    })
}

#[get("/{lang}/about")]
pub async fn about(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);
    content_page(&state, &req, lang, "about").await
}

#[get("/{lang}/history")]
pub async fn history(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);
    content_page(&state, &req, lang, "history").await
}

/// Server-owned content block with the hardcoded bilingual fallback:
/// a slug the backend has not populated yet still renders real copy.
async fn content_page(
    state: &web::Data<AppState>,
    req: &HttpRequest,
    lang: Lang,
    slug: &'static str,
) -> HttpResponse {
    let api = state.api.clone();
    let fetched: Result<ContentPage, _> = state
        .views
        .get_or_fetch(&format!("page:{slug}"), move || async move {
            api.page(slug).await
        })
        .await;

    let page = match fetched {
        Ok(page) if !page.body.is_empty() => Some(page),
        Ok(_) => fallback::page(slug),
        Err(err) if err.is_not_found() => fallback::page(slug),
        Err(err) => {
            tracing::warn!("content fetch for '{slug}' failed: {err}");
            fallback::page(slug)
        }
    };

    let ctx = ctx_for(state, req, lang);
    match page {
        Some(page) => render(ContentTemplate {
            title: page.title.get(lang).to_string(),
            body: page.body.get(lang).to_string(),
            ctx,
        }),
        None => render(NotFoundTemplate {
            heading: ui(lang).page_not_found,
            ctx,
        }),
    }
}

#[get("/{lang}/jobs")]
pub async fn jobs(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);
    let ctx = ctx_for(&state, &req, lang);

    let api = state.api.clone();
    match state
        .views
        .get_or_fetch("jobs", move || async move { api.jobs().await })
        .await
    {
        Ok(jobs) => render(JobsTemplate {
            ctx,
            jobs: jobs.iter().map(JobView::from_job).collect(),
        }),
        Err(err) => {
            tracing::warn!("jobs fetch failed: {err}");
            render(ErrorTemplate { ctx })
        }
    }
}

#[get("/{lang}/institutions")]
pub async fn institutions(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);
    let ctx = ctx_for(&state, &req, lang);

    let api = state.api.clone();
    match state
        .views
        .get_or_fetch("institutions", move || async move {
            api.institutions().await
        })
        .await
    {
        Ok(institutions) => render(InstitutionsTemplate {
            institutions: institutions
                .iter()
                .map(|inst| InstitutionView::from_institution(inst, lang))
                .collect(),
            ctx,
        }),
        Err(err) => {
            tracing::warn!("institutions fetch failed: {err}");
            render(ErrorTemplate { ctx })
        }
    }
}

/// Unknown route under a valid locale: back to that locale's home.
#[get("/{lang}/{tail:.*}")]
pub async fn unmatched(state: web::Data<AppState>, path: web::Path<(String, String)>) -> impl Responder {
    let (lang_raw, _tail) = path.into_inner();
    let lang = parse_lang(&lang_raw, state.cfg.default_lang);
    see_other(&localized(lang, ""))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(about)
        .service(history)
        .service(jobs)
        .service(institutions);
}
