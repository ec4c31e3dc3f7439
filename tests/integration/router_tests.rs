//! Router integration tests
//!
//! Selection, failover, caching and deduplication through the public `Router`.

#[cfg(test)]
mod tests {
    use crate::common::providers::MockGateway;
    use crate::common::{router_with, router_with_config};
    use crate::{assert_err, assert_ok};
    use model_router::{Complexity, ProviderError, RouteContext, RouterConfig, RouterError};
    use std::sync::Arc;
    use std::time::Duration;

    /// Complex request: the high-capability model fails, failover lands on claude
    #[tokio::test]
    async fn test_complex_request_failover() {
        let gateway = MockGateway::new()
            .fail("gpt-4", ProviderError::api_error("openai", 500, "boom"))
            .fail("gpt-4o", ProviderError::rate_limit("openai", Some(30)))
            .reply("claude", "OK")
            .build();
        let router = router_with(gateway.clone());

        let context = RouteContext::new().with_complexity(Complexity::Complex);
        let response = assert_ok!(router.route("Build a todo app", &context).await);

        assert_eq!(response.content, "OK");
        assert_eq!(response.model, "claude");
        assert!(!response.cached);
        assert!((0.0..=1.0).contains(&response.confidence));
        assert_eq!(gateway.calls(), vec!["gpt-4", "gpt-4o", "claude"]);
    }

    /// Language defaults come from the file extension
    #[tokio::test]
    async fn test_language_routing() {
        let gateway = MockGateway::new()
            .reply("mistral", "SELECT 1")
            .reply("claude", "echo hi")
            .reply("gemini-vision", "<p/>")
            .build();
        let router = router_with(gateway.clone());

        let sql = assert_ok!(router.route("Query", &RouteContext::new().with_filename("q.sql")).await);
        let sh = assert_ok!(router.route("Script", &RouteContext::new().with_filename("run.sh")).await);
        let html = assert_ok!(router.route("Page", &RouteContext::new().with_filename("index.html")).await);

        assert_eq!(sql.model, "mistral");
        assert_eq!(sh.model, "claude");
        assert_eq!(html.model, "gemini-vision");
    }

    /// Long content goes to the long-context model
    #[tokio::test]
    async fn test_long_content_routing() {
        let gateway = MockGateway::new().reply("claude", "summary").build();
        let router = router_with_config(
            gateway.clone(),
            RouterConfig::default().with_enhance_prompts(false),
        );

        let context = RouteContext::new().with_content("x".repeat(10_001));
        let response = assert_ok!(router.route("Summarize", &context).await);

        assert_eq!(response.model, "claude");
        assert_eq!(gateway.prompts(), vec!["Summarize"]);
    }

    /// A second identical request is served from cache
    #[tokio::test]
    async fn test_cached_response() {
        let gateway = MockGateway::new().reply("gpt-4", "tests").build();
        let router = router_with(gateway.clone());
        let context = RouteContext::new()
            .with_filename("main.py")
            .with_action("generate_tests");

        let first = assert_ok!(router.route("Hello", &context).await);
        let second = assert_ok!(router.route("Hello", &context).await);

        assert_eq!(first.model, "gpt-4");
        assert!(!first.cached);
        assert!(second.cached);
        assert_eq!(second.content, "tests");
        assert_eq!(gateway.call_count(), 1);

        let stats = router.cache_stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.in_flight, 0);
    }

    /// Many concurrent identical requests cause one upstream call
    #[tokio::test(start_paused = true)]
    async fn test_concurrent_dedup() {
        let gateway = MockGateway::new()
            .slow("gpt-4o", Duration::from_millis(250), "shared")
            .build();
        let router = Arc::new(router_with(gateway.clone()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let router = Arc::clone(&router);
                tokio::spawn(async move { router.route("Same", &RouteContext::default()).await })
            })
            .collect();

        for handle in handles {
            let response = assert_ok!(handle.await.unwrap());
            assert_eq!(response.content, "shared");
        }

        assert_eq!(gateway.call_count(), 1);
        assert_eq!(router.cache_stats().in_flight, 0);
        assert_eq!(router.cache_stats().entries, 1);
    }

    /// Every model fails: the error lists each model once
    #[tokio::test]
    async fn test_exhaustion() {
        let gateway = MockGateway::new().build();
        let router = router_with(gateway.clone());

        let context = RouteContext::new().with_user_preference("gemini-vision");
        let err = assert_err!(router.route("Describe", &context).await);

        match &err {
            RouterError::Exhausted { attempted, last_error } => {
                assert_eq!(
                    attempted,
                    &["gemini-vision", "gpt-4o", "gpt-4", "claude", "mistral"]
                );
                assert_eq!(last_error.provider(), "mock");
            }
            other => panic!("expected Exhausted, got {:?}", other),
        }
        assert_eq!(gateway.call_count(), 5);
        assert_eq!(router.cache_stats().entries, 0);
    }

    /// Clearing the cache forces a fresh upstream call
    #[tokio::test]
    async fn test_clear_cache() {
        let gateway = MockGateway::new().reply("gpt-4o", "hi").build();
        let router = router_with(gateway.clone());

        assert_ok!(router.route("Hi", &RouteContext::default()).await);
        router.clear_cache();
        let response = assert_ok!(router.route("Hi", &RouteContext::default()).await);

        assert!(!response.cached);
        assert_eq!(gateway.call_count(), 2);
    }
}
