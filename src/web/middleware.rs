use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpResponse,
};
use futures_util::future::{ok, Ready};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use parivar::i18n::{ensure_locale, Lang};

/// Prefixes that are never locale-prefixed: the reserved admin
/// sub-application, static assets, and payment-gateway callbacks.
const EXEMPT_PREFIXES: &[&str] = &["/admin", "/static", "/payments", "/favicon.ico"];

fn is_exempt(path: &str) -> bool {
    EXEMPT_PREFIXES.iter().any(|prefix| {
        path == *prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Locale-enforcing middleware.
///
/// Requests whose first path segment is not a supported locale code are
/// answered with a redirect to the same path under the default locale,
/// query string preserved. A 307 keeps the method intact for form posts.
pub struct LocaleRedirect {
    default: Lang,
}

impl LocaleRedirect {
    pub fn new(default: Lang) -> Self {
        Self { default }
    }
}

impl<S, B> Transform<S, ServiceRequest> for LocaleRedirect
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = LocaleRedirectMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(LocaleRedirectMiddleware {
            service,
            default: self.default,
        })
    }
}

pub struct LocaleRedirectMiddleware<S> {
    service: S,
    default: Lang,
}

impl<S, B> Service<ServiceRequest> for LocaleRedirectMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let path = req.path();
        let target = if is_exempt(path) {
            None
        } else {
            let full = if req.query_string().is_empty() {
                path.to_string()
            } else {
                format!("{}?{}", path, req.query_string())
            };
            ensure_locale(&full, self.default)
        };

        match target {
            None => {
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Some(location) => Box::pin(async move {
                Ok(req.into_response(
                    HttpResponse::TemporaryRedirect()
                        .insert_header((header::LOCATION, location))
                        .finish()
                        .map_into_right_body(),
                ))
            }),
        }
    }
}
