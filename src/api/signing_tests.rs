//! Tests for request signing.

use super::test_support::{NOW, credentials};
use super::{Error, RequestDescriptor, RequestSigner, SignedRequest, header};
use crate::models::UpdateAccount;

const BASE: &str = "https://demo.biapi.pro/2.0";

fn sign<B: serde::Serialize + ?Sized>(
    request: RequestDescriptor<'_, B>,
) -> Result<SignedRequest, Error> {
    SignedRequest::build(
        request,
        BASE,
        &credentials(),
        &RequestSigner::new("api-secret"),
        NOW,
    )
}

mod signer {
    use super::*;

    #[test]
    fn signature_matches_golden_value_without_body() {
        let signer = RequestSigner::new("api-secret");

        let sig = signer
            .sign(NOW, "https://demo.biapi.pro/2.0/users/me", b"")
            .unwrap();

        assert_eq!(
            sig,
            "a9fd356241204d4c4d81169f652f28e4ea107c29a443345079177488d7a82341"
        );
    }

    #[test]
    fn signature_matches_golden_value_with_body() {
        let signer = RequestSigner::new("api-secret");

        let sig = signer
            .sign(
                NOW,
                "https://demo.biapi.pro/2.0/users/me/accounts/17",
                br#"{"display":true,"disabled":false}"#,
            )
            .unwrap();

        assert_eq!(
            sig,
            "c06a2d9f4c33556bb1df872275d5d6938433ab26d49f2898df387b576b808340"
        );
    }

    #[test]
    fn signature_is_deterministic() {
        let signer = RequestSigner::new("s");

        assert_eq!(
            signer.sign(1, "https://x/2.0/a", b"{}").unwrap(),
            signer.sign(1, "https://x/2.0/a", b"{}").unwrap()
        );
    }

    #[test]
    fn any_input_change_changes_signature() {
        let signer = RequestSigner::new("s");
        let base = signer.sign(1, "https://x/2.0/a", b"{}").unwrap();

        assert_ne!(base, signer.sign(2, "https://x/2.0/a", b"{}").unwrap());
        assert_ne!(base, signer.sign(1, "https://x/2.0/b", b"{}").unwrap());
        assert_ne!(base, signer.sign(1, "https://x/2.0/a", b"[]").unwrap());
        assert_ne!(
            base,
            RequestSigner::new("t")
                .sign(1, "https://x/2.0/a", b"{}")
                .unwrap()
        );
    }

    #[test]
    fn debug_hides_secret() {
        let debug = format!("{:?}", RequestSigner::new("top-secret"));

        assert!(!debug.contains("top-secret"));
    }
}

mod signed_request {
    use super::*;

    #[test]
    fn get_without_body_signs_empty_body() {
        let signed = sign(RequestDescriptor::get("/users/me")).unwrap();

        assert!(signed.body().is_none());
        assert_eq!(signed.url().as_str(), "https://demo.biapi.pro/2.0/users/me");
        assert_eq!(
            signed.signature(),
            "a9fd356241204d4c4d81169f652f28e4ea107c29a443345079177488d7a82341"
        );
    }

    #[test]
    fn signature_covers_transmitted_body_bytes() {
        let update = UpdateAccount {
            display: true,
            disabled: false,
        };

        let signed =
            sign(RequestDescriptor::put("/users/me/accounts/17").with_body(&update)).unwrap();

        assert_eq!(
            signed.body(),
            Some(br#"{"display":true,"disabled":false}"#.as_slice())
        );
        assert_eq!(
            signed.signature(),
            "c06a2d9f4c33556bb1df872275d5d6938433ab26d49f2898df387b576b808340"
        );

        let request = signed.into_http_request();
        assert_eq!(
            request.body.as_deref(),
            Some(br#"{"display":true,"disabled":false}"#.as_slice())
        );
    }

    #[test]
    fn headers_carry_key_signature_and_timestamp() {
        let signed = sign(RequestDescriptor::get("/users/me")).unwrap();
        let request = signed.clone().into_http_request();

        assert_eq!(request.header_str("content-type"), Some("application/json"));
        assert_eq!(request.header_str(header::API_KEY), Some("api-key"));
        assert_eq!(request.header_str(header::SIGNATURE), Some(signed.signature()));
        assert_eq!(request.header_str(header::TIMESTAMP), Some("1620000000"));
        assert!(request.header_str("authorization").is_none());
    }

    #[test]
    fn token_becomes_bearer_header() {
        let request = sign(RequestDescriptor::get("/users/me").with_token("tok"))
            .unwrap()
            .into_http_request();

        assert_eq!(request.header_str("authorization"), Some("Bearer tok"));
    }

    #[test]
    fn query_is_appended_after_signing() {
        let signed = sign(
            RequestDescriptor::get("/users/me")
                .with_query("limit", 10)
                .with_query("expand", "accounts"),
        )
        .unwrap();

        assert_eq!(
            signed.url().as_str(),
            "https://demo.biapi.pro/2.0/users/me?limit=10&expand=accounts"
        );
        assert_eq!(
            signed.signature(),
            "a9fd356241204d4c4d81169f652f28e4ea107c29a443345079177488d7a82341"
        );
    }

    #[test]
    fn body_on_get_is_invalid_usage() {
        let result = sign(RequestDescriptor::get("/users/me").with_body(&serde_json::json!({})));

        assert!(matches!(result, Err(Error::InvalidUsage(_))));
    }

    #[test]
    fn body_on_delete_is_invalid_usage() {
        let result = sign(
            RequestDescriptor::delete("/users/me/connections/3").with_body(&UpdateAccount::default()),
        );

        assert!(matches!(result, Err(Error::InvalidUsage(msg)) if msg.contains("DELETE")));
    }

    #[test]
    fn body_on_patch_is_allowed() {
        let result = sign(
            RequestDescriptor::new(http::Method::PATCH, "/users/me")
                .with_body(&serde_json::json!({"platform": "ios"})),
        );

        assert!(result.is_ok());
    }

    #[test]
    fn unserializable_body_is_encode_error() {
        let mut map = std::collections::HashMap::new();
        map.insert((1, 2), "tuple keys cannot be JSON object keys");

        let result = sign(RequestDescriptor::post("/users").with_body(&map));

        assert!(matches!(
            result,
            Err(Error::Encode {
                what: "request body",
                ..
            })
        ));
    }

    #[test]
    fn route_without_leading_slash_is_invalid_usage() {
        let result = sign(RequestDescriptor::get("users/me"));

        assert!(matches!(result, Err(Error::InvalidUsage(_))));
    }

    #[test]
    fn api_key_with_newline_is_invalid_usage() {
        let result = SignedRequest::build(
            RequestDescriptor::get("/users/me"),
            BASE,
            &crate::api::Credentials::new("cid", "bad\nkey", "secret"),
            &RequestSigner::new("secret"),
            NOW,
        );

        assert!(matches!(result, Err(Error::InvalidUsage(_))));
    }
}
