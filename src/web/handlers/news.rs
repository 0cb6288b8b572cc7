use actix_web::{get, web, HttpRequest, Responder};

use crate::web::helpers::{cached_member, parse_lang, render};
use crate::web::state::AppState;
use crate::web::templates::{
    ArticleTemplate, ErrorTemplate, NewsIndexTemplate, NewsView, PageCtx, StoryNotFoundTemplate,
};

#[get("/{lang}/news")]
pub async fn news_index(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);
    let ctx = PageCtx::new(lang, req.path(), cached_member(&state, &req).as_ref());

    let api = state.api.clone();
    match state
        .views
        .get_or_fetch("news", move || async move { api.news().await })
        .await
    {
        Ok(items) => render(NewsIndexTemplate {
            items: items
                .iter()
                .map(|item| NewsView::from_item(item, lang))
                .collect(),
            ctx,
        }),
        Err(err) => {
            tracing::warn!("news fetch failed: {err}");
            render(ErrorTemplate { ctx })
        }
    }
}

#[get("/{lang}/news/{slug}")]
pub async fn article(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (lang_raw, slug) = path.into_inner();
    let lang = parse_lang(&lang_raw, state.cfg.default_lang);
    let ctx = PageCtx::new(lang, req.path(), cached_member(&state, &req).as_ref());

    match state.api.news_item(&slug).await {
        Ok(item) => render(ArticleTemplate {
            item: NewsView::from_item(&item, lang),
            ctx,
        }),
        // A nonexistent slug is a story-not-found page with a way back,
        // not a crash and not a bare 404.
        Err(err) if err.is_not_found() => render(StoryNotFoundTemplate { ctx }),
        Err(err) => {
            tracing::warn!("article fetch for '{slug}' failed: {err}");
            render(ErrorTemplate { ctx })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(news_index).service(article);
}
