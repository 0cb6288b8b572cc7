use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use parivar::i18n::{ui, Lang};
use parivar::models::PersonRole;

use crate::web::helpers::{cached_member, parse_lang, render};
use crate::web::state::AppState;
use crate::web::templates::{
    ErrorTemplate, NotFoundTemplate, PageCtx, PeopleTemplate, PersonTemplate, PersonView,
};

#[get("/{lang}/founders")]
pub async fn founders(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);
    people_list(&state, &req, lang, PersonRole::Founder).await
}

#[get("/{lang}/management")]
pub async fn management(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let lang = parse_lang(&path.into_inner(), state.cfg.default_lang);
    people_list(&state, &req, lang, PersonRole::Management).await
}

async fn people_list(
    state: &web::Data<AppState>,
    req: &HttpRequest,
    lang: Lang,
    role: PersonRole,
) -> HttpResponse {
    let ctx = PageCtx::new(lang, req.path(), cached_member(state, req).as_ref());

    let api = state.api.clone();
    match state
        .views
        .get_or_fetch("people", move || async move { api.people().await })
        .await
    {
        Ok(people) => {
            let (heading, base_segment) = match role {
                PersonRole::Founder => (ui(lang).nav_founders, "founders"),
                PersonRole::Management => (ui(lang).nav_management, "management"),
            };
            render(PeopleTemplate {
                people: people
                    .iter()
                    .filter(|p| p.role == role)
                    .map(|p| PersonView::from_person(p, lang))
                    .collect(),
                heading,
                base_segment,
                ctx,
            })
        }
        Err(err) => {
            tracing::warn!("people fetch failed: {err}");
            render(ErrorTemplate { ctx })
        }
    }
}

#[get("/{lang}/founders/{id}")]
pub async fn founder_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, Uuid)>,
) -> impl Responder {
    let (lang_raw, id) = path.into_inner();
    let lang = parse_lang(&lang_raw, state.cfg.default_lang);
    person_detail(&state, &req, lang, id).await
}

#[get("/{lang}/management/{id}")]
pub async fn management_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, Uuid)>,
) -> impl Responder {
    let (lang_raw, id) = path.into_inner();
    let lang = parse_lang(&lang_raw, state.cfg.default_lang);
    person_detail(&state, &req, lang, id).await
}

async fn person_detail(
    state: &web::Data<AppState>,
    req: &HttpRequest,
    lang: Lang,
    id: Uuid,
) -> HttpResponse {
    let ctx = PageCtx::new(lang, req.path(), cached_member(state, req).as_ref());

    match state.api.person(id).await {
        Ok(person) => render(PersonTemplate {
            person: PersonView::from_person(&person, lang),
            ctx,
        }),
        Err(err) if err.is_not_found() => render(NotFoundTemplate {
            heading: ui(lang).profile_not_found,
            ctx,
        }),
        Err(err) => {
            tracing::warn!("person fetch for {id} failed: {err}");
            render(ErrorTemplate { ctx })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(founders)
        .service(management)
        .service(founder_detail)
        .service(management_detail);
}
