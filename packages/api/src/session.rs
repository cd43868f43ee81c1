//! # Session Store
//!
//! [`SessionStore`] owns the [`Session`]: the bearer and refresh tokens plus
//! the signed-in [`User`]. Nothing else mutates it. Every change is a
//! whole-object replacement that writes durable storage and memory together
//! and then notifies subscribers, so `is_authenticated()` never disagrees
//! with what is in storage once an operation returns.
//!
//! The store is a cheap `Rc` handle meant for a single-threaded UI: clone it
//! into event handlers, subscribe a reactive signal to it, and await its
//! operations from spawned tasks.
//!
//! | Operation | Network | Toast | On failure |
//! |-----------|---------|-------|-----------|
//! | [`register`](SessionStore::register) | `POST /api/auth/signup` | yes | `Err`, session unchanged |
//! | [`login`](SessionStore::login) | `POST /api/auth/login` | yes | `Err`, session unchanged |
//! | [`logout`](SessionStore::logout) | none | yes | cannot fail |
//! | [`get_profile`](SessionStore::get_profile) | `GET /api/auth/profile` | no | 401 clears the session |

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use store::{KeyValueStore, StoredTokens, TokenStore};

use crate::client::{AuthedClient, HttpClient};
use crate::error::ApiError;
use crate::models::{AuthEnvelope, Authenticated, Credentials, RegisterInput, User};
use crate::validation::{validate_credentials, validate_registration};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Sink for user-facing notifications raised by the store.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message);
    }

    fn info(&self, message: &str) {
        self.notify(ToastKind::Info, message);
    }
}

/// Authentication state of the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub current_user: Option<User>,
    /// A login or registration request is in flight.
    pub is_loading: bool,
}

impl Session {
    fn from_tokens(tokens: StoredTokens) -> Self {
        Self {
            access_token: tokens.access,
            refresh_token: tokens.refresh,
            current_user: None,
            is_loading: false,
        }
    }

    fn from_authenticated(auth: Authenticated) -> Self {
        Self {
            access_token: Some(auth.token),
            refresh_token: auth.refresh_token,
            current_user: Some(auth.user),
            is_loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    fn tokens(&self) -> StoredTokens {
        StoredTokens {
            access: self.access_token.clone(),
            refresh: self.refresh_token.clone(),
        }
    }
}

const LOGIN_SUCCESS: &str = "Login successful!";
const LOGIN_FAILED: &str = "Login failed";
const REGISTER_SUCCESS: &str = "Registration successful!";
const REGISTER_FAILED: &str = "Registration failed";
const LOGOUT_MESSAGE: &str = "Logged out successfully";

type Listener = Rc<dyn Fn(&Session)>;

struct Inner<S> {
    client: HttpClient,
    tokens: TokenStore<S>,
    state: RefCell<Session>,
    notifier: Rc<dyn Notifier>,
    listeners: RefCell<Vec<Listener>>,
}

/// Cloneable handle to the one session of the application.
pub struct SessionStore<S> {
    inner: Rc<Inner<S>>,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S> PartialEq for SessionStore<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create the store, restoring any tokens already in `storage`.
    pub fn new(client: HttpClient, storage: S, notifier: Rc<dyn Notifier>) -> Self {
        let tokens = TokenStore::new(storage);
        let session = Session::from_tokens(tokens.load());
        if session.is_authenticated() {
            tracing::debug!("Restored session from storage");
        }
        Self {
            inner: Rc::new(Inner {
                client,
                tokens,
                state: RefCell::new(session),
                notifier,
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.inner.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.state.borrow().access_token.clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.state.borrow().current_user.clone()
    }

    pub fn client(&self) -> &HttpClient {
        &self.inner.client
    }

    /// The authenticated capability for the current token, if signed in.
    pub fn authed_client(&self) -> Option<AuthedClient> {
        let token = self.token().filter(|t| !t.is_empty())?;
        Some(self.inner.client.authenticated(token))
    }

    /// Call `listener` with the new session after every change.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn replace(&self, next: Session) {
        self.inner.tokens.save(&next.tokens());
        *self.inner.state.borrow_mut() = next.clone();
        let listeners: Vec<Listener> = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(&next);
        }
    }

    fn set_loading(&self, loading: bool) {
        let mut next = self.snapshot();
        if next.is_loading != loading {
            next.is_loading = loading;
            self.replace(next);
        }
    }

    fn reject(&self, err: ApiError) -> Result<(), ApiError> {
        self.inner.notifier.error(&err.to_string());
        Err(err)
    }

    async fn authenticate<F>(
        &self,
        request: F,
        success: &str,
        fallback: &str,
    ) -> Result<(), ApiError>
    where
        F: Future<Output = Result<AuthEnvelope, ApiError>>,
    {
        self.set_loading(true);
        match request.await.and_then(|env| env.into_authenticated(fallback)) {
            Ok(auth) => {
                tracing::info!("Signed in as {}", auth.user.email);
                self.replace(Session::from_authenticated(auth));
                self.inner.notifier.success(success);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("{}: {}", fallback, e.detail());
                self.set_loading(false);
                self.reject(e)
            }
        }
    }

    /// Validate, translate and submit a registration.
    pub async fn register(&self, input: &RegisterInput) -> Result<(), ApiError> {
        let request = match validate_registration(input) {
            Ok(request) => request,
            Err(e) => return self.reject(e),
        };
        let client = self.inner.client.clone();
        self.authenticate(
            async move { client.signup(&request).await },
            REGISTER_SUCCESS,
            REGISTER_FAILED,
        )
        .await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let credentials = match validate_credentials(credentials) {
            Ok(credentials) => credentials,
            Err(e) => return self.reject(e),
        };
        let client = self.inner.client.clone();
        self.authenticate(
            async move { client.login(&credentials).await },
            LOGIN_SUCCESS,
            LOGIN_FAILED,
        )
        .await
    }

    /// Clear tokens, user and storage. Safe to call in any state.
    pub fn logout(&self) {
        self.clear();
        self.inner.notifier.info(LOGOUT_MESSAGE);
    }

    fn clear(&self) {
        self.replace(Session::default());
        self.inner.tokens.clear();
    }

    /// Apply the session-expiry rule to an error from an authenticated call.
    ///
    /// Returns `true` when the error was a 401 and the session was cleared.
    pub fn handle_error(&self, err: &ApiError) -> bool {
        if !err.is_unauthorized() {
            return false;
        }
        if self.is_authenticated() {
            tracing::info!("Session expired, signing out");
        }
        self.clear();
        true
    }

    /// Refresh the current user from `/api/auth/profile`.
    pub async fn get_profile(&self) {
        let Some(client) = self.authed_client() else {
            return;
        };
        match client.current_user().await {
            Ok(user) => {
                // A logout or re-login may have happened while the request was out.
                if self.token().as_deref() == Some(client.token()) {
                    let mut next = self.snapshot();
                    next.current_user = Some(user);
                    self.replace(next);
                }
            }
            Err(e) => {
                if !self.handle_error(&e) {
                    tracing::warn!("Failed to refresh profile: {}", e.detail());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CONNECTIVITY_MESSAGE;
    use crate::models::Role;
    use serde_json::json;
    use std::cell::Cell;
    use store::{MemoryStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Default)]
    struct RecordingNotifier {
        toasts: RefCell<Vec<(ToastKind, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: ToastKind, message: &str) {
            self.toasts.borrow_mut().push((kind, message.to_string()));
        }
    }

    struct Fixture {
        server: MockServer,
        storage: MemoryStore,
        notifier: Rc<RecordingNotifier>,
        store: SessionStore<MemoryStore>,
    }

    impl Fixture {
        async fn new() -> Self {
            Self::with_storage(MemoryStore::new()).await
        }

        async fn with_storage(storage: MemoryStore) -> Self {
            let server = MockServer::start().await;
            let notifier = Rc::new(RecordingNotifier::default());
            let store = SessionStore::new(
                HttpClient::new(server.uri()),
                storage.clone(),
                notifier.clone(),
            );
            Self { server, storage, notifier, store }
        }

        fn toasts(&self) -> Vec<(ToastKind, String)> {
            self.notifier.toasts.borrow().clone()
        }
    }

    fn user_json(role: &str) -> serde_json::Value {
        json!({"id": "u1", "email": "a@b.com", "firstName": "Ada", "lastName": "Byron", "role": role})
    }

    fn auth_success(token: &str, refresh: &str, role: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "ok",
            "data": {"token": token, "refreshToken": refresh, "user": user_json(role)}
        }))
    }

    fn register_input(role: &str, year: &str) -> RegisterInput {
        RegisterInput {
            email: "a@b.com".into(),
            password: "secret1".into(),
            first_name: "Ada".into(),
            last_name: "Byron".into(),
            role: role.into(),
            graduation_year: year.into(),
        }
    }

    #[tokio::test]
    async fn test_login_success_stores_tokens() {
        let fx = Fixture::new().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_partial_json(json!({"email": "a@b.com", "password": "secret1"})))
            .respond_with(auth_success("t1", "r1", "student"))
            .expect(1)
            .mount(&fx.server)
            .await;

        fx.store
            .login(&Credentials::new("a@b.com", "secret1"))
            .await
            .unwrap();

        assert!(fx.store.is_authenticated());
        assert_eq!(fx.storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(fx.storage.get(REFRESH_TOKEN_KEY).as_deref(), Some("r1"));
        assert_eq!(fx.store.current_user().unwrap().role, Role::Student);
        assert!(!fx.store.snapshot().is_loading);
        assert_eq!(fx.toasts(), vec![(ToastKind::Success, LOGIN_SUCCESS.to_string())]);
    }

    #[tokio::test]
    async fn test_login_rejected_leaves_session_unchanged() {
        let fx = Fixture::new().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": false, "message": "Invalid credentials"})),
            )
            .mount(&fx.server)
            .await;

        let err = fx
            .store
            .login(&Credentials::new("a@b.com", "wrong-pass"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!fx.store.is_authenticated());
        assert!(fx.storage.is_empty());
        assert!(!fx.store.snapshot().is_loading);
        assert_eq!(fx.toasts(), vec![(ToastKind::Error, "Invalid credentials".to_string())]);
    }

    #[tokio::test]
    async fn test_login_error_status_passes_server_message() {
        let fx = Fixture::new().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"success": false, "message": "Wrong password"})),
            )
            .mount(&fx.server)
            .await;

        let err = fx
            .store
            .login(&Credentials::new("a@b.com", "nope123"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Wrong password");
        assert!(!fx.store.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_session() {
        let storage = MemoryStore::new();
        storage.set(ACCESS_TOKEN_KEY, "old");
        let fx = Fixture::with_storage(storage).await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&fx.server)
            .await;

        assert!(fx.store.login(&Credentials::new("a@b.com", "secret1")).await.is_err());
        assert!(fx.store.is_authenticated());
        assert_eq!(fx.storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("old"));
    }

    #[tokio::test]
    async fn test_login_malformed_success_is_failure() {
        let fx = Fixture::new().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&fx.server)
            .await;

        let err = fx
            .store
            .login(&Credentials::new("a@b.com", "secret1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
        assert!(!fx.store.is_authenticated());
        assert!(fx.storage.is_empty());
    }

    #[tokio::test]
    async fn test_login_network_failure() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let notifier = Rc::new(RecordingNotifier::default());
        let store = SessionStore::new(
            HttpClient::new(format!("http://{addr}")),
            MemoryStore::new(),
            notifier.clone(),
        );

        let err = store
            .login(&Credentials::new("a@b.com", "secret1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(err.to_string(), CONNECTIVITY_MESSAGE);
        assert!(!store.is_authenticated());
        assert_eq!(notifier.toasts.borrow()[0].0, ToastKind::Error);
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let fx = Fixture::new().await;
        let err = fx.store.login(&Credentials::new("a@b.com", "")).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(fx.server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_alumni_without_year_never_hits_network() {
        let fx = Fixture::new().await;

        let err = fx
            .store
            .register(&register_input("ALUMNI", ""))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Graduation year is required for alumni");
        assert!(fx.server.received_requests().await.unwrap().is_empty());
        assert!(!fx.store.is_authenticated());
        assert_eq!(
            fx.toasts(),
            vec![(ToastKind::Error, "Graduation year is required for alumni".to_string())]
        );
    }

    #[tokio::test]
    async fn test_register_sends_lowercase_role() {
        let fx = Fixture::new().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .and(body_partial_json(json!({
                "email": "a@b.com",
                "firstName": "Ada",
                "lastName": "Byron",
                "role": "alumni",
                "graduationYear": 2018
            })))
            .respond_with(auth_success("t9", "r9", "alumni"))
            .expect(1)
            .mount(&fx.server)
            .await;

        fx.store
            .register(&register_input("ALUMNI", "2018"))
            .await
            .unwrap();

        assert!(fx.store.is_authenticated());
        assert_eq!(fx.storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("t9"));
        assert_eq!(fx.toasts(), vec![(ToastKind::Success, REGISTER_SUCCESS.to_string())]);
    }

    #[tokio::test]
    async fn test_register_conflict() {
        let fx = Fixture::new().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(json!({"success": false, "message": "User already exists"})),
            )
            .mount(&fx.server)
            .await;

        let err = fx
            .store
            .register(&register_input("STUDENT", ""))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "User already exists");
        assert!(!fx.store.is_authenticated());
    }

    #[tokio::test]
    async fn test_restores_tokens_from_storage() {
        let storage = MemoryStore::new();
        storage.set(ACCESS_TOKEN_KEY, "saved");
        storage.set(REFRESH_TOKEN_KEY, "saved-r");
        let fx = Fixture::with_storage(storage).await;

        assert!(fx.store.is_authenticated());
        assert_eq!(fx.store.token().as_deref(), Some("saved"));
        assert_eq!(fx.store.snapshot().refresh_token.as_deref(), Some("saved-r"));
    }

    #[tokio::test]
    async fn test_logout_clears_everything_and_is_idempotent() {
        let storage = MemoryStore::new();
        storage.set(ACCESS_TOKEN_KEY, "t1");
        storage.set(REFRESH_TOKEN_KEY, "r1");
        let fx = Fixture::with_storage(storage).await;

        fx.store.logout();
        assert!(!fx.store.is_authenticated());
        assert!(fx.storage.is_empty());
        assert_eq!(fx.store.snapshot(), Session::default());

        fx.store.logout();
        assert!(!fx.store.is_authenticated());
        assert!(fx.storage.is_empty());
        assert_eq!(fx.toasts().len(), 2);
    }

    #[tokio::test]
    async fn test_get_profile_without_token_is_noop() {
        let fx = Fixture::new().await;
        fx.store.get_profile().await;
        assert!(fx.server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_profile_replaces_user() {
        let storage = MemoryStore::new();
        storage.set(ACCESS_TOKEN_KEY, "t1");
        let fx = Fixture::with_storage(storage).await;
        Mock::given(method("GET"))
            .and(path("/api/auth/profile"))
            .and(header("Authorization", "Bearer t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": user_json("alumni")})))
            .expect(1)
            .mount(&fx.server)
            .await;

        fx.store.get_profile().await;

        let user = fx.store.current_user().unwrap();
        assert_eq!(user.role, Role::Alumni);
        assert!(fx.store.is_authenticated());
        assert!(fx.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_get_profile_unauthorized_forces_logout() {
        let storage = MemoryStore::new();
        storage.set(ACCESS_TOKEN_KEY, "expired");
        storage.set(REFRESH_TOKEN_KEY, "r1");
        let fx = Fixture::with_storage(storage).await;
        Mock::given(method("GET"))
            .and(path("/api/auth/profile"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})))
            .mount(&fx.server)
            .await;

        fx.store.get_profile().await;

        assert!(!fx.store.is_authenticated());
        assert!(fx.storage.is_empty());
        assert!(fx.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_get_profile_other_failure_keeps_session() {
        let storage = MemoryStore::new();
        storage.set(ACCESS_TOKEN_KEY, "t1");
        let fx = Fixture::with_storage(storage).await;
        Mock::given(method("GET"))
            .and(path("/api/auth/profile"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&fx.server)
            .await;

        fx.store.get_profile().await;
        assert!(fx.store.is_authenticated());
        assert!(fx.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_subscribers_see_every_replacement() {
        let fx = Fixture::new().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(auth_success("t1", "r1", "student"))
            .mount(&fx.server)
            .await;

        let seen: Rc<RefCell<Vec<(bool, bool)>>> = Rc::default();
        let calls = Rc::new(Cell::new(0));
        {
            let seen = seen.clone();
            let calls = calls.clone();
            fx.store.subscribe(move |s| {
                calls.set(calls.get() + 1);
                seen.borrow_mut().push((s.is_loading, s.is_authenticated()));
            });
        }

        fx.store.login(&Credentials::new("a@b.com", "secret1")).await.unwrap();
        fx.store.logout();

        assert_eq!(
            *seen.borrow(),
            vec![(true, false), (false, true), (false, false)]
        );
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_handle_error_only_acts_on_unauthorized() {
        let storage = MemoryStore::new();
        storage.set(ACCESS_TOKEN_KEY, "t1");
        let fx = Fixture::with_storage(storage).await;

        assert!(!fx.store.handle_error(&ApiError::Network("down".into())));
        assert!(fx.store.is_authenticated());

        assert!(fx.store.handle_error(&ApiError::Unauthorized("expired".into())));
        assert!(!fx.store.is_authenticated());
        assert!(fx.storage.is_empty());
    }
}
