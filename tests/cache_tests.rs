mod common;

#[cfg(test)]
pub mod cache_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use super::common::*;

    use parivar::common::ApiError;
    use parivar::services::{SessionCache, ViewCache};

    #[test]
    fn test_session_cache_answers_within_freshness_window() {
        let cache = SessionCache::new();
        cache.store("token-a", seed_member_0());

        let member = cache.get("token-a").expect("entry should be fresh");
        assert_eq!(member.id, seed_member_0().id);
        assert_eq!(cache.get("token-b"), None);
    }

    #[test]
    fn test_session_cache_expires_after_window() {
        let cache = SessionCache::with_ttl(Duration::ZERO);
        cache.store("token-a", seed_member_0());

        assert_eq!(cache.get("token-a"), None);
    }

    #[test]
    fn test_session_cache_invalidation_forces_refetch() {
        let cache = SessionCache::new();
        cache.store("token-a", seed_member_0());
        cache.invalidate("token-a");

        assert_eq!(cache.get("token-a"), None);
    }

    #[actix_web::test]
    async fn test_view_cache_deduplicates_concurrent_fetches() {
        let cache = ViewCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let fetch = |calls: Arc<AtomicUsize>| {
            move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                Ok::<_, ApiError>(vec!["kharia".to_string()])
            }
        };

        let (a, b) = futures_util::join!(
            cache.get_or_fetch("villages", fetch(calls.clone())),
            cache.get_or_fetch("villages", fetch(calls.clone())),
        );

        assert_eq!(a.unwrap(), vec!["kharia".to_string()]);
        assert_eq!(b.unwrap(), vec!["kharia".to_string()]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_view_cache_serves_fresh_entries_without_fetching() {
        let cache = ViewCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let calls = calls.clone();
            let got: Vec<String> = cache
                .get_or_fetch("people", move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vec!["ramesh".to_string()])
                })
                .await
                .unwrap();
            assert_eq!(got, vec!["ramesh".to_string()]);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_view_cache_invalidation_forces_refetch() {
        let cache = ViewCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let fetch = |calls: Arc<AtomicUsize>| {
            move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, ApiError>(1_u32)
            }
        };

        let _ = cache.get_or_fetch("interests:x", fetch(calls.clone())).await;
        cache.invalidate("interests:x");
        let _: Result<u32, _> = cache.get_or_fetch("interests:x", fetch(calls.clone())).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[actix_web::test]
    async fn test_view_cache_does_not_cache_failures() {
        let cache = ViewCache::new();

        let failed: Result<u32, _> = cache
            .get_or_fetch("plans", || async { Err(ApiError::NotFound) })
            .await;
        assert!(failed.is_err());

        let recovered: u32 = cache
            .get_or_fetch("plans", || async { Ok(7) })
            .await
            .unwrap();
        assert_eq!(recovered, 7);
    }
}
