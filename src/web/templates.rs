use askama::Template;
use uuid::Uuid;

use parivar::i18n::{localized, switch_lang, ui, Lang, UiStrings};
use parivar::models::{
    Institution, Interest, InterestStatus, Job, MatrimonyProfile, Member, NewsItem, Person,
    RegistrationDraft,
};

/// Shared context for every page: locale, UI strings, and the
/// language-switcher target for the current path.
pub struct PageCtx {
    pub lang: Lang,
    pub ui: &'static UiStrings,
    pub path: String,
    pub alt_path: String,
    pub member_name: Option<String>,
}

impl PageCtx {
    pub fn new(lang: Lang, path: &str, member: Option<&Member>) -> Self {
        Self {
            lang,
            ui: ui(lang),
            path: path.to_string(),
            alt_path: switch_lang(path, lang.other()),
            member_name: member.map(|m| m.name.clone()),
        }
    }

    /// Locale-prefixed href for a route segment.
    pub fn href(&self, target: &str) -> String {
        localized(self.lang, target)
    }
}

// ----------------------------------------------------------------------
// View models: bilingual and optional fields resolved to plain strings
// once, so templates stay declarative. Empty string means "not shown".
// ----------------------------------------------------------------------

pub struct NewsView {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub cover_url: String,
    pub published: String,
}

impl NewsView {
    pub fn from_item(item: &NewsItem, lang: Lang) -> Self {
        Self {
            slug: item.slug.clone(),
            title: item.title.get(lang).to_string(),
            summary: item.summary.get(lang).to_string(),
            body: item.body.get(lang).to_string(),
            cover_url: item.cover_url.clone().unwrap_or_default(),
            published: item.published_label(),
        }
    }
}

pub struct PersonView {
    pub id: Uuid,
    pub name: String,
    pub designation: String,
    pub bio: String,
    pub photo_url: String,
    pub place: String,
}

impl PersonView {
    pub fn from_person(person: &Person, lang: Lang) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
            designation: person.designation.clone().unwrap_or_default(),
            bio: person.bio.get(lang).to_string(),
            photo_url: person.photo_url.clone().unwrap_or_default(),
            place: join_place(&[person.village.as_deref(), person.district.as_deref()]),
        }
    }
}

pub struct JobView {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub contact_phone: String,
}

impl JobView {
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone().unwrap_or_default(),
            location: job.location.clone().unwrap_or_default(),
            description: job.description.clone(),
            contact_phone: job.contact_phone.clone().unwrap_or_default(),
        }
    }
}

pub struct InstitutionView {
    pub name: String,
    pub category: String,
    pub city: String,
    pub description: String,
}

impl InstitutionView {
    pub fn from_institution(inst: &Institution, lang: Lang) -> Self {
        Self {
            name: inst.name.clone(),
            category: inst.category.clone().unwrap_or_default(),
            city: inst.city.clone().unwrap_or_default(),
            description: inst.description.get(lang).to_string(),
        }
    }
}

pub struct ProfileView {
    pub id: Uuid,
    pub name: String,
    pub age: String,
    pub gotra: String,
    pub place: String,
    pub education: String,
    pub occupation: String,
    pub photos: Vec<String>,
}

impl ProfileView {
    pub fn from_profile(profile: &MatrimonyProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name.clone(),
            age: profile.age.map(|a| a.to_string()).unwrap_or_default(),
            gotra: profile.gotra.clone().unwrap_or_default(),
            place: join_place(&[
                profile.village.as_deref(),
                profile.district.as_deref(),
                profile.state.as_deref(),
            ]),
            education: profile.education.clone().unwrap_or_default(),
            occupation: profile.occupation.clone().unwrap_or_default(),
            photos: profile.photos.clone(),
        }
    }
}

pub struct InterestRow {
    pub id: Uuid,
    pub name: String,
    pub accepted: bool,
    pub can_accept: bool,
}

impl InterestRow {
    pub fn received(interest: &Interest, me: Uuid) -> Self {
        Self {
            id: interest.id,
            name: interest.from_name.clone().unwrap_or_default(),
            accepted: interest.status == InterestStatus::Accepted,
            can_accept: parivar::services::can_accept(interest, me),
        }
    }

    pub fn sent(interest: &Interest) -> Self {
        Self {
            id: interest.id,
            name: interest.to_name.clone().unwrap_or_default(),
            accepted: interest.status == InterestStatus::Accepted,
            can_accept: false,
        }
    }
}

pub struct PlanView {
    pub id: Uuid,
    pub name: String,
    pub amount_inr: u32,
}

fn join_place(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .filter_map(|p| *p)
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

// ----------------------------------------------------------------------
// Page templates
// ----------------------------------------------------------------------

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageCtx,
    pub news: Vec<NewsView>,
}

#[derive(Template)]
#[template(path = "content.html")]
pub struct ContentTemplate {
    pub ctx: PageCtx,
    pub title: String,
    pub body: String,
}

#[derive(Template)]
#[template(path = "people.html")]
pub struct PeopleTemplate {
    pub ctx: PageCtx,
    pub heading: &'static str,
    pub base_segment: &'static str,
    pub people: Vec<PersonView>,
}

#[derive(Template)]
#[template(path = "person.html")]
pub struct PersonTemplate {
    pub ctx: PageCtx,
    pub person: PersonView,
}

#[derive(Template)]
#[template(path = "news.html")]
pub struct NewsIndexTemplate {
    pub ctx: PageCtx,
    pub items: Vec<NewsView>,
}

#[derive(Template)]
#[template(path = "article.html")]
pub struct ArticleTemplate {
    pub ctx: PageCtx,
    pub item: NewsView,
}

#[derive(Template)]
#[template(path = "story_not_found.html")]
pub struct StoryNotFoundTemplate {
    pub ctx: PageCtx,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub ctx: PageCtx,
    pub heading: &'static str,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub ctx: PageCtx,
}

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct JobsTemplate {
    pub ctx: PageCtx,
    pub jobs: Vec<JobView>,
}

#[derive(Template)]
#[template(path = "institutions.html")]
pub struct InstitutionsTemplate {
    pub ctx: PageCtx,
    pub institutions: Vec<InstitutionView>,
}

#[derive(Template)]
#[template(path = "matrimony.html")]
pub struct MatrimonyTemplate {
    pub ctx: PageCtx,
    pub profiles: Vec<ProfileView>,
}

#[derive(Template)]
#[template(path = "matrimony_profile.html")]
pub struct MatrimonyProfileTemplate {
    pub ctx: PageCtx,
    pub profile: ProfileView,
    /// Present only for an accepted pairing; `None` hides the field.
    pub phone: Option<String>,
    pub already_sent: bool,
    pub accepted: bool,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "interests.html")]
pub struct InterestsTemplate {
    pub ctx: PageCtx,
    pub received: Vec<InterestRow>,
    pub sent: Vec<InterestRow>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub ctx: PageCtx,
    pub error: Option<String>,
    pub next: String,
}

pub struct DraftView {
    pub name: String,
    pub phone: String,
    pub father_name: String,
    pub village: String,
    pub district: String,
}

impl DraftView {
    pub fn from_draft(draft: &RegistrationDraft) -> Self {
        Self {
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            father_name: draft.father_name.clone().unwrap_or_default(),
            village: draft.village.clone().unwrap_or_default(),
            district: draft.district.clone().unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub ctx: PageCtx,
    pub error: Option<String>,
    pub draft: DraftView,
}

#[derive(Template)]
#[template(path = "membership.html")]
pub struct MembershipTemplate {
    pub ctx: PageCtx,
    pub plans: Vec<PlanView>,
    pub error: Option<String>,
    pub draft_ready: bool,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageCtx,
    pub member: Member,
    pub pending_received: usize,
    pub accepted_count: usize,
}
