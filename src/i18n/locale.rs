use serde::{Deserialize, Serialize};

use std::fmt;

/// Supported portal locales. The whole routing surface is duplicated
/// under `/en` and `/hi`; everything else redirects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Hi,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Hi];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
        }
    }

    /// Parse a locale code, accepting regional tags like `en-IN`.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        match code.split(['-', '_']).next().unwrap_or(&code) {
            "en" => Some(Lang::En),
            "hi" => Some(Lang::Hi),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Lang::En => Lang::Hi,
            Lang::Hi => Lang::En,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Locale encoded in a path's first segment, if any.
pub fn lang_from_path(path: &str) -> Option<Lang> {
    first_segment(path).and_then(Lang::from_code)
}

fn first_segment(path: &str) -> Option<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let end = trimmed.find(['/', '?']).unwrap_or(trimmed.len());
    let segment = &trimmed[..end];
    (!segment.is_empty()).then_some(segment)
}

/// Path builder: prefix a route segment with the locale. Absolute URLs
/// pass through unchanged so external links survive the helper.
pub fn localized(lang: Lang, target: &str) -> String {
    if target.starts_with("http://") || target.starts_with("https://") || target.starts_with("//")
    {
        return target.to_string();
    }
    let rest = target.strip_prefix('/').unwrap_or(target);
    if rest.is_empty() {
        format!("/{}", lang.code())
    } else {
        format!("/{}/{}", lang.code(), rest)
    }
}

/// Rewrite only the first path segment to the target locale, keeping
/// the remainder of the path and any query string intact. A path with
/// no recognized locale segment gets the target locale prefixed.
pub fn switch_lang(path: &str, lang: Lang) -> String {
    let (path_part, query) = match path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path, None),
    };

    let rest = path_part.strip_prefix('/').unwrap_or(path_part);
    let remainder = match rest.split_once('/') {
        Some((head, tail)) if Lang::from_code(head).is_some() => tail,
        _ if Lang::from_code(rest).is_some() => "",
        _ => rest,
    };

    let mut out = localized(lang, remainder);
    if let Some(q) = query {
        out.push('?');
        out.push_str(q);
    }
    out
}

/// Redirect decision for an incoming request path (with query string
/// already appended): `Some(target)` when the path carries no supported
/// locale segment and must be answered with a redirect instead of a
/// render, `None` when it can be served as-is.
///
/// An unsupported locale tag (`/fr/...`) is substituted with the
/// default; a plain content path (`/founders/42`) gets it prefixed.
pub fn ensure_locale(path_and_query: &str, default: Lang) -> Option<String> {
    if lang_from_path(path_and_query).is_some() {
        return None;
    }

    let (path_part, query) = match path_and_query.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path_and_query, None),
    };

    let rest = path_part.strip_prefix('/').unwrap_or(path_part);
    let (head, tail) = match rest.split_once('/') {
        Some((h, t)) => (h, t),
        None => (rest, ""),
    };

    let remainder = if looks_like_locale_tag(head) { tail } else { rest };
    let mut out = localized(default, remainder);
    if let Some(q) = query {
        out.push('?');
        out.push_str(q);
    }
    Some(out)
}

fn looks_like_locale_tag(segment: &str) -> bool {
    let primary = segment.split(['-', '_']).next().unwrap_or("");
    (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic())
}
