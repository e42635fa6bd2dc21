//! Tests for the run module.

use super::*;

mod run_error {
    use super::*;

    #[test]
    fn missing_api_displays_message() {
        let error = RunError::MissingApi;
        assert_eq!(error.to_string(), "API settings are not configured");
    }

    #[test]
    fn bind_displays_address() {
        let error = RunError::Bind {
            addr: "127.0.0.1:8080".parse().unwrap(),
            source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        };
        assert!(error.to_string().contains("127.0.0.1:8080"));
    }

    #[test]
    fn api_error_converts() {
        let error: RunError = budins::api::Error::InvalidUsage("no route".to_string()).into();
        assert!(matches!(error, RunError::Api(_)));
        assert!(error.to_string().contains("API request failed"));
    }
}

mod client_settings {
    use super::*;
    use budins::config::Cli;

    fn config(args: &[&str], toml: &str) -> ValidatedConfig {
        let mut full_args = vec!["budins"];
        full_args.extend(args);
        let cli = Cli::try_parse_from_iter(full_args).unwrap();
        let toml = budins::config::TomlConfig::parse(toml).unwrap();
        ValidatedConfig::from_raw(&cli, Some(&toml), |_| None).unwrap()
    }

    #[test]
    fn builds_base_url_from_domain_and_host() {
        let config = config(
            &["me", "--token", "t"],
            r#"
                [api]
                client_id = "cid"
                api_key = "key"
                api_secret = "secret"
                domain = "acme"
                host = "biapi-sandbox.pro"
            "#,
        );

        let client = api_client(config.api.as_ref()).unwrap();

        assert_eq!(client.base_url(), "https://acme.biapi-sandbox.pro/2.0");
        assert_eq!(client.credentials().client_id(), "cid");
    }

    #[test]
    fn missing_settings_is_an_error() {
        let config = config(&["serve"], "");

        assert!(matches!(
            api_client(config.api.as_ref()),
            Err(RunError::MissingApi)
        ));
    }
}

mod logging {
    use super::*;
    use budins::webhook::{Dispatch, WebhookEvent};

    #[test]
    fn every_event_is_delivered() {
        let dispatcher = WebhookDispatcher::new(logging_listeners());

        for event in WebhookEvent::ALL {
            let body = format!(r#"{{"event":"{}","data":{{"id":1}}}}"#, event.name());
            let dispatch = dispatcher
                .handle_json(body.as_bytes(), Some("customer=42"))
                .unwrap();

            assert_eq!(dispatch, Dispatch::Delivered(event));
        }
    }
}
