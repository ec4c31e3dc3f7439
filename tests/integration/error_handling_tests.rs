//! Error handling integration tests
//!
//! Checks how provider, routing and configuration errors surface to callers.

#[cfg(test)]
mod tests {
    use crate::assert_err;
    use crate::common::providers::MockGateway;
    use crate::common::router_with;
    use model_router::{GatewayError, ProviderError, RouteContext, RouterError};
    use tokio_util::sync::CancellationToken;

    #[test]
    fn test_provider_error_status_mapping() {
        assert!(matches!(
            ProviderError::from_status("edge", 401, "nope"),
            ProviderError::Authentication { .. }
        ));
        assert!(matches!(
            ProviderError::from_status("edge", 429, "slow down"),
            ProviderError::RateLimit { .. }
        ));
        assert!(matches!(
            ProviderError::from_status("edge", 503, "down"),
            ProviderError::ProviderUnavailable { .. }
        ));
        assert!(matches!(
            ProviderError::from_status("edge", 500, "oops"),
            ProviderError::ApiError { status: 500, .. }
        ));
    }

    #[tokio::test]
    async fn test_exhausted_error_message() {
        let gateway = MockGateway::new()
            .fail("mistral", ProviderError::timeout("mistral", "too slow"))
            .build();
        let router = router_with(gateway);

        let context = RouteContext::new().with_user_preference("mistral");
        let err = assert_err!(router.route("Hi", &context).await);

        let message = err.to_string();
        assert!(message.starts_with("All models failed"));
        assert!(message.contains("mistral"));
    }

    #[tokio::test]
    async fn test_last_error_is_from_final_attempt() {
        let gateway = MockGateway::new()
            .fail("mistral", ProviderError::authentication("mistral", "bad key"))
            .fail("gpt-4o", ProviderError::network("openai", "reset"))
            .fail("gpt-4", ProviderError::network("openai", "reset"))
            .fail("claude", ProviderError::api_error("anthropic", 529, "overloaded"))
            .build();
        let router = router_with(gateway);

        let context = RouteContext::new().with_user_preference("mistral");
        match assert_err!(router.route("Hi", &context).await) {
            RouterError::Exhausted { attempted, last_error } => {
                assert_eq!(attempted, ["mistral", "gpt-4o", "gpt-4", "claude"]);
                assert_eq!(last_error.provider(), "anthropic");
            }
            other => panic!("expected Exhausted, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_validation_error() {
        let router = router_with(MockGateway::new().build());
        let err = assert_err!(router.route("  ", &RouteContext::default()).await);
        assert!(matches!(err, RouterError::Validation(_)));
    }

    #[tokio::test]
    async fn test_cancelled_error() {
        let router = router_with(MockGateway::new().reply("gpt-4o", "unused").build());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = assert_err!(
            router
                .route_with_cancel("Hi", &RouteContext::default(), &cancel)
                .await
        );
        assert_eq!(err, RouterError::Cancelled);
    }

    #[test]
    fn test_router_error_converts_to_gateway_error() {
        let err: GatewayError = RouterError::validation("empty prompt").into();
        assert!(matches!(err, GatewayError::Router(RouterError::Validation(_))));
        assert!(err.to_string().contains("empty prompt"));
    }
}
