//! The client-held session and the store that mutates it.
//!
//! `Session` is the reactive state pages subscribe to. `SessionStore` wraps
//! the three side effects of signing in and out: the backend call, the
//! persisted token and the router.

use shared::models::{LoginRequest, User};
use std::rc::Rc;
use yew::functional::hook;
use yew_router::prelude::{Navigator, use_navigator};
use yewdux::prelude::use_dispatch;
use yewdux::{Dispatch, Store};

use crate::api::{ApiError, AuthApi, BoardClient};
use crate::config::FrontendConfig;
use crate::routes::BoardRoute;
use crate::storage::{LocalTokenStorage, TokenStorage};

/// Current user and token. Authenticated iff a token is held.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    restored: bool,
}

impl Session {
    /// Presence of a token, never its validity.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the persisted token has been read into this session.
    pub fn is_restored(&self) -> bool {
        self.restored
    }

    fn restore(&mut self, token: Option<String>) {
        self.token = token;
        self.restored = true;
    }

    fn establish(&mut self, user: User) {
        self.token = Some(user.token.clone());
        self.user = Some(user);
        self.restored = true;
    }

    fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }
}

/// Imperative navigation used after login and logout.
pub trait Navigate {
    fn navigate_to(&self, route: &BoardRoute);
}

impl Navigate for Navigator {
    fn navigate_to(&self, route: &BoardRoute) {
        self.push(route);
    }
}

/// Read the persisted token into the session, once per store.
///
/// Only the token is hydrated; the user snapshot is known after a login.
pub fn restore<A, S>(dispatch: &Dispatch<Session>, api: &A, storage: &S)
where
    A: AuthApi + ?Sized,
    S: TokenStorage + ?Sized,
{
    if dispatch.get().is_restored() {
        return;
    }
    let token = storage.load();
    tracing::debug!(has_token = token.is_some(), "restoring session");
    api.authorize(token.as_deref());
    dispatch.reduce_mut(|session| session.restore(token));
}

/// Login, logout and authentication checks over a shared `Session`.
#[derive(Clone)]
pub struct SessionStore<A, S, N> {
    dispatch: Dispatch<Session>,
    api: A,
    storage: S,
    navigator: N,
}

impl<A, S, N> SessionStore<A, S, N>
where
    A: AuthApi,
    S: TokenStorage,
    N: Navigate,
{
    /// Attach to the session behind `dispatch`, hydrating it on first use.
    pub fn new(dispatch: Dispatch<Session>, api: A, storage: S, navigator: N) -> Self {
        restore(&dispatch, &api, &storage);
        Self {
            dispatch,
            api,
            storage,
            navigator,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.dispatch.get().is_authenticated()
    }

    pub fn user(&self) -> Option<User> {
        self.dispatch.get().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.dispatch.get().token.clone()
    }

    /// Sign in and go to the post list.
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged. The session is untouched on
    /// failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let request = LoginRequest::new(email, password);
        let user = match self.api.login(&request).await {
            Ok(user) => user,
            Err(err) => {
                tracing::info!(email, error = %err, "login failed");
                return Err(err);
            }
        };

        self.api.authorize(Some(&user.token));
        if let Err(err) = self.storage.save(&user.token) {
            tracing::warn!(error = %err, "token not persisted; session lasts until reload");
        }
        self.dispatch.reduce_mut(|session| session.establish(user));
        tracing::info!(email, "signed in");

        self.navigator.navigate_to(&BoardRoute::PostList);
        Ok(())
    }

    /// Forget the session locally and go to the login page.
    pub fn logout(&self) {
        self.dispatch.reduce_mut(Session::clear);
        self.storage.remove();
        self.api.authorize(None);
        tracing::info!("signed out");

        self.navigator.navigate_to(&BoardRoute::Login);
    }
}

/// Store wired to the browser: shared HTTP client, `localStorage` and router.
pub type BrowserSessionStore = SessionStore<BoardClient, LocalTokenStorage, Navigator>;

/// Session store for components rendered inside the router.
#[hook]
pub fn use_session_store() -> Option<Rc<BrowserSessionStore>> {
    let dispatch = use_dispatch::<Session>();
    let navigator = use_navigator();
    navigator.map(|navigator| {
        let storage = LocalTokenStorage::from_config(&FrontendConfig::default());
        Rc::new(SessionStore::new(
            dispatch,
            BoardClient::shared(),
            storage,
            navigator,
        ))
    })
}
