//! Sealing properties and the secrets client over a recording transport.

use std::cell::RefCell;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use crypto_box::aead::OsRng;
use crypto_box::SecretKey;
use proptest::prelude::*;

use cihelper::core::config::{FileConfig, Overrides, Settings};
use cihelper::core::context::RequestContext;
use cihelper::core::exit::Exit;
use cihelper::core::github::Client;
use cihelper::core::seal::seal_secret;
use cihelper::core::transport::{ApiRequest, ApiResponse, Method, Transport};
use cihelper::error::{Error, RemoteError, Result, SealError};

/// Answers from a fixed list and keeps every request.
struct Recorder {
    responses: RefCell<Vec<ApiResponse>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl Recorder {
    fn new(mut responses: Vec<ApiResponse>) -> Self {
        responses.reverse();
        Self {
            responses: RefCell::new(responses),
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for Recorder {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.sent.borrow_mut().push(request.clone());
        Ok(self
            .responses
            .borrow_mut()
            .pop()
            .expect("unexpected request"))
    }
}

fn client(responses: Vec<ApiResponse>) -> Client<Recorder> {
    let settings = Settings::resolve(
        Overrides {
            owner: Some("acme".to_string()),
            repo: Some("widgets".to_string()),
            token: Some("ghp_test".to_string()),
            ..Default::default()
        },
        FileConfig::default(),
    );
    Client::new(RequestContext::new(settings).unwrap(), Recorder::new(responses))
}

fn keypair() -> (String, SecretKey) {
    let secret = SecretKey::generate(&mut OsRng);
    (BASE64.encode(secret.public_key().as_bytes()), secret)
}

#[test]
fn test_set_secret_issues_one_put() {
    let (public, secret) = keypair();
    let key_payload = format!(r#"{{"key":"{}","key_id":"abc"}}"#, public);
    let client = client(vec![
        ApiResponse::new(200, key_payload),
        ApiResponse::new(201, ""),
    ]);

    let key = client.fetch_public_key().unwrap();
    client.set_secret(&key, "MY_SECRET", b"hello").unwrap();

    let sent = client.transport().sent.borrow();
    let puts: Vec<_> = sent.iter().filter(|r| r.method == Method::Put).collect();
    assert_eq!(puts.len(), 1);

    let body = puts[0].body.as_ref().unwrap();
    assert_eq!(body["key_id"], "abc");
    let sealed = BASE64
        .decode(body["encrypted_value"].as_str().unwrap())
        .unwrap();
    assert_eq!(secret.unseal(&sealed).unwrap(), b"hello");
}

#[test]
fn test_delete_not_found_exits_non_zero() {
    let client = client(vec![ApiResponse::new(404, r#"{"message":"Not Found"}"#)]);

    let err = client.delete_secret("MISSING").unwrap_err();
    match &err {
        Error::Remote(RemoteError::Status { status, body, .. }) => {
            assert_eq!(*status, 404);
            assert!(body.contains("Not Found"));
        }
        other => panic!("expected remote error, got {:?}", other),
    }
    assert_ne!(Exit::from(&err).code(), 0);
}

#[test]
fn test_malformed_keys_rejected() {
    for key in ["", "%%%", "AAAA", "bm90LWEta2V5"] {
        assert!(
            matches!(seal_secret(b"x", key), Err(SealError::InvalidKey(_))),
            "accepted {:?}",
            key
        );
    }
}

proptest! {
    #[test]
    fn prop_seal_is_randomized_and_opens(plaintext in proptest::collection::vec(any::<u8>(), 0..512)) {
        let (public, secret) = keypair();

        let first = seal_secret(&plaintext, &public).unwrap();
        let second = seal_secret(&plaintext, &public).unwrap();
        prop_assert_ne!(&first, &second);

        for sealed in [first, second] {
            let opened = secret.unseal(&BASE64.decode(sealed).unwrap()).unwrap();
            prop_assert_eq!(&opened, &plaintext);
        }
    }
}
