//! Configuration validation integration tests
//!
//! Loads YAML through the public `Config` API and builds a working router from it.

#[cfg(test)]
mod tests {
    use crate::common::providers::MockGateway;
    use crate::{assert_err, assert_ok};
    use model_router::{Config, GatewaySet, RouteContext, Router};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CUSTOM: &str = r#"
router:
  enhance_prompts: false

models:
  - id: fast
    provider: openai
  - id: careful
    provider: anthropic
    max_tokens: 2048

failover:
  fast: [careful]

selection:
  default_model: fast
  high_capability_model: careful
  long_context_model: careful
  languages:
    - id: rust
      extensions: [rs]
      model: careful
"#;

    #[tokio::test]
    async fn test_router_from_custom_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CUSTOM.as_bytes()).unwrap();

        let config = assert_ok!(Config::from_file(file.path()).await);
        let gateway = MockGateway::new().reply("careful", "checked").build();
        let router = assert_ok!(Router::from_config(&config, GatewaySet::uniform(gateway.clone())));

        assert_eq!(router.available_models().len(), 2);
        assert_eq!(router.model_config("careful").unwrap().max_tokens, 2048);

        // `fast` has no script, so the chain moves on to `careful`
        let response = assert_ok!(router.route("Hi", &RouteContext::default()).await);
        assert_eq!(response.model, "careful");
        assert_eq!(gateway.calls(), vec!["fast", "careful"]);
        assert_eq!(gateway.prompts(), vec!["Hi", "Hi"]);

        let rust = assert_ok!(
            router
                .route("Borrow check", &RouteContext::new().with_filename("lib.rs"))
                .await
        );
        assert_eq!(rust.model, "careful");
    }

    #[test]
    fn test_defaults_build_router() {
        let config = Config::default();
        let router = assert_ok!(Router::from_config(
            &config,
            GatewaySet::uniform(MockGateway::new().build())
        ));

        let ids: Vec<_> = router.available_models().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["gpt-4", "gpt-4o", "claude", "gemini-vision", "mistral"]);
    }

    #[test]
    fn test_duplicate_model_ids_rejected() {
        let err = assert_err!(Config::from_yaml_str(
            "models:\n  - id: a\n    provider: openai\n  - id: a\n    provider: mistral\n"
        ));
        assert!(err.to_string().contains("Duplicate model id: a"));
    }

    #[test]
    fn test_self_referencing_chain_rejected() {
        let err = assert_err!(Config::from_yaml_str("failover:\n  gpt-4: [gpt-4o, gpt-4]\n"));
        assert!(err.to_string().contains("contains itself"));
    }

    #[test]
    fn test_unknown_chain_targets_are_tolerated() {
        let config = assert_ok!(Config::from_yaml_str("failover:\n  gpt-4: [gpt-5, claude]\n"));
        assert_eq!(config.failover_graph().unwrap().chain("gpt-4"), ["gpt-5", "claude"]);
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let err = assert_err!(Config::from_yaml_str(
            "models:\n  - id: a\n    provider: cohere\n"
        ));
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = assert_err!(Config::from_yaml_str("router:\n  attempt_timeout_ms: 0\n"));
        assert!(err.to_string().contains("timeout"));
    }
}
