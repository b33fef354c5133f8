use std::cell::Cell;

use futures::executor::block_on;

use super::*;

// =============================================================
// Helpers
// =============================================================

struct FakeBackend {
    credential: Cell<bool>,
    response: Result<User, ApiError>,
    fetches: Cell<u32>,
}

impl FakeBackend {
    fn signed_in(response: Result<User, ApiError>) -> Self {
        Self { credential: Cell::new(true), response, fetches: Cell::new(0) }
    }

    fn signed_out() -> Self {
        Self { credential: Cell::new(false), response: Ok(kari()), fetches: Cell::new(0) }
    }
}

impl SessionBackend for FakeBackend {
    fn has_credential(&self) -> bool {
        self.credential.get()
    }

    fn store_credential(&self, _tokens: &TokenPair) {
        self.credential.set(true);
    }

    fn clear_credential(&self) {
        self.credential.set(false);
    }

    fn fetch_self_user(&self) -> impl Future<Output = Result<User, ApiError>> {
        self.fetches.set(self.fetches.get() + 1);
        std::future::ready(self.response.clone())
    }
}

fn kari() -> User {
    User {
        id: Some(3),
        email: "kari@example.no".to_owned(),
        first_name: "Kari".to_owned(),
        last_name: "Nordmann".to_owned(),
        ..User::default()
    }
}

fn refresh(backend: &FakeBackend, state: &mut SessionState) -> Result<(), ApiError> {
    let outcome = block_on(resolve_self_user(backend));
    state.settle_self_user(outcome)
}

// =============================================================
// update_self_user
// =============================================================

#[test]
fn successful_fetch_caches_the_user() {
    let backend = FakeBackend::signed_in(Ok(kari()));
    let mut state = SessionState::new(backend.has_credential());

    assert!(refresh(&backend, &mut state).is_ok());
    assert_eq!(state.user, Some(kari()));
    assert!(state.authenticated);
    assert_eq!(backend.fetches.get(), 1);
}

#[test]
fn failed_fetch_clears_the_user_and_rejects() {
    let backend = FakeBackend::signed_in(Err(ApiError::Transport("offline".to_owned())));
    let mut state = SessionState { user: Some(kari()), ..SessionState::new(true) };

    let result = refresh(&backend, &mut state);
    assert_eq!(result, Err(ApiError::Transport("offline".to_owned())));
    assert!(state.user.is_none());
}

#[test]
fn transport_failure_keeps_the_stored_credential() {
    let backend = FakeBackend::signed_in(Err(ApiError::Transport("offline".to_owned())));
    let mut state = SessionState::new(true);

    let _ = refresh(&backend, &mut state);
    assert!(backend.has_credential());
    assert!(state.authenticated);
}

#[test]
fn rejected_credential_is_cleared() {
    let backend = FakeBackend::signed_in(Err(ApiError::from_status(401, r#"{"detail":"Token expired"}"#)));
    let mut state = SessionState::new(true);

    let result = refresh(&backend, &mut state);
    assert!(result.is_err());
    assert!(!backend.has_credential());
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

#[test]
fn no_credential_means_no_fetch() {
    let backend = FakeBackend::signed_out();
    let mut state = SessionState { user: Some(kari()), ..SessionState::new(false) };

    assert!(refresh(&backend, &mut state).is_ok());
    assert_eq!(backend.fetches.get(), 0);
    assert!(state.user.is_none());
    assert!(!state.authenticated);
}

// =============================================================
// Redirect path
// =============================================================

#[test]
fn auth_pages_never_become_redirect_targets() {
    let mut state = SessionState::new(false);
    state.set_redirect_path(Some("/login".to_owned()));
    assert_eq!(state.redirect_path, None);
    state.set_redirect_path(Some("/signup".to_owned()));
    assert_eq!(state.redirect_path, None);
    state.set_redirect_path(Some("/register".to_owned()));
    assert_eq!(state.redirect_path, None);
}

#[test]
fn auth_pages_do_not_overwrite_existing_target() {
    let mut state = SessionState::new(false);
    state.set_redirect_path(Some("/ad/create".to_owned()));
    state.set_redirect_path(Some("/login".to_owned()));
    assert_eq!(state.redirect_path.as_deref(), Some("/ad/create"));
}

#[test]
fn other_paths_are_stored() {
    let mut state = SessionState::new(false);
    state.set_redirect_path(Some("/profile/favorites".to_owned()));
    assert_eq!(state.redirect_path.as_deref(), Some("/profile/favorites"));
    state.set_redirect_path(None);
    assert_eq!(state.redirect_path, None);
}

#[test]
fn accepts_redirect_skips_unchanged_values() {
    let state = SessionState { redirect_path: Some("/profile".to_owned()), ..SessionState::new(false) };
    assert!(!state.accepts_redirect(Some("/profile")));
    assert!(state.accepts_redirect(Some("/ad/4/edit")));
    assert!(!state.accepts_redirect(Some("/login/")));
}

#[test]
fn take_redirect_path_defaults_to_front_page_and_clears() {
    let mut state = SessionState::new(true);
    assert_eq!(state.take_redirect_path(), "/");
    state.set_redirect_path(Some("/ad/create".to_owned()));
    assert_eq!(state.take_redirect_path(), "/ad/create");
    assert_eq!(state.redirect_path, None);
}

#[test]
fn sign_out_drops_user_and_flag() {
    let mut state = SessionState { user: Some(kari()), ..SessionState::new(true) };
    state.sign_out();
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

#[test]
fn sign_out_forgets_pending_redirect() {
    let mut state = SessionState::new(true);
    state.set_redirect_path(Some("/profile".to_owned()));
    state.sign_out();
    assert_eq!(state.redirect_path, None);
}

// =============================================================
// Reactive handle
// =============================================================

mod handle {
    use std::cell::{Cell, RefCell};
    use std::future::Future;

    use futures::executor::block_on;
    use leptos::prelude::Owner;

    use super::kari;
    use crate::net::error::ApiError;
    use crate::net::types::{TokenPair, User};
    use crate::state::session::{Session, SessionBackend};

    thread_local! {
        static CREDENTIAL: Cell<bool> = const { Cell::new(false) };
        static RESPONSE: RefCell<Result<User, ApiError>> = RefCell::new(Err(ApiError::Unavailable));
        static FETCHES: Cell<u32> = const { Cell::new(0) };
    }

    /// Copyable backend whose state lives in this test thread.
    #[derive(Clone, Copy, Debug, Default)]
    struct ThreadBackend;

    impl ThreadBackend {
        fn reset(credential: bool, response: Result<User, ApiError>) -> Self {
            CREDENTIAL.with(|c| c.set(credential));
            RESPONSE.with(|r| *r.borrow_mut() = response);
            FETCHES.with(|f| f.set(0));
            Self
        }

        fn respond_with(response: Result<User, ApiError>) {
            RESPONSE.with(|r| *r.borrow_mut() = response);
        }

        fn fetches() -> u32 {
            FETCHES.with(Cell::get)
        }
    }

    impl SessionBackend for ThreadBackend {
        fn has_credential(&self) -> bool {
            CREDENTIAL.with(Cell::get)
        }

        fn store_credential(&self, _tokens: &TokenPair) {
            CREDENTIAL.with(|c| c.set(true));
        }

        fn clear_credential(&self) {
            CREDENTIAL.with(|c| c.set(false));
        }

        fn fetch_self_user(&self) -> impl Future<Output = Result<User, ApiError>> {
            FETCHES.with(|f| f.set(f.get() + 1));
            std::future::ready(RESPONSE.with(|r| r.borrow().clone()))
        }
    }

    fn tokens() -> TokenPair {
        TokenPair { access: "access".to_owned(), refresh: "refresh".to_owned() }
    }

    #[test]
    fn refresh_success_caches_user() {
        let owner = Owner::new();
        owner.set();
        let backend = ThreadBackend::reset(true, Ok(kari()));
        let session = Session::new(backend);

        assert_eq!(block_on(session.update_self_user()), Ok(()));
        assert_eq!(session.user(), Some(kari()));
        assert!(session.is_authenticated());
        assert_eq!(ThreadBackend::fetches(), 1);
    }

    #[test]
    fn refresh_transport_error_clears_user_but_stays_authenticated() {
        let owner = Owner::new();
        owner.set();
        let backend = ThreadBackend::reset(true, Ok(kari()));
        let session = Session::new(backend);
        block_on(session.update_self_user()).unwrap();

        ThreadBackend::respond_with(Err(ApiError::Transport("offline".to_owned())));
        let result = block_on(session.update_self_user());

        assert_eq!(result, Err(ApiError::Transport("offline".to_owned())));
        assert_eq!(session.user(), None);
        assert!(session.is_authenticated());
        assert!(backend.has_credential());
    }

    #[test]
    fn refresh_unauthorized_clears_user_and_credential() {
        let owner = Owner::new();
        owner.set();
        let backend = ThreadBackend::reset(true, Err(ApiError::from_status(401, r#"{"detail":"Token expired"}"#)));
        let session = Session::new(backend);

        assert!(block_on(session.update_self_user()).is_err());
        assert_eq!(session.user(), None);
        assert!(!session.is_authenticated());
        assert!(!backend.has_credential());
    }

    #[test]
    fn sign_in_stores_credential_and_loads_user() {
        let owner = Owner::new();
        owner.set();
        let backend = ThreadBackend::reset(false, Ok(kari()));
        let session = Session::new(backend);
        assert!(!session.is_authenticated());

        assert_eq!(block_on(session.sign_in(&tokens())), Ok(()));
        assert!(backend.has_credential());
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(kari()));
    }

    #[test]
    fn logout_forgets_user_credential_and_redirect() {
        let owner = Owner::new();
        owner.set();
        let backend = ThreadBackend::reset(true, Ok(kari()));
        let session = Session::new(backend);
        block_on(session.update_self_user()).unwrap();
        session.set_redirect_path(Some("/profile".to_owned()));
        assert_eq!(session.redirect_path().as_deref(), Some("/profile"));

        session.logout();

        assert_eq!(session.redirect_path(), None);
        assert_eq!(session.user(), None);
        assert!(!session.is_authenticated());
        assert!(!backend.has_credential());
        assert_eq!(session.take_redirect_path(), "/");
    }

    #[test]
    fn redirect_setter_ignores_auth_pages_and_repeats() {
        let owner = Owner::new();
        owner.set();
        let session = Session::new(ThreadBackend::reset(false, Err(ApiError::Unavailable)));

        session.set_redirect_path(Some("/ad/create".to_owned()));
        session.set_redirect_path(Some("/ad/create".to_owned()));
        session.set_redirect_path(Some("/login".to_owned()));
        session.set_redirect_path(Some("/signup/".to_owned()));

        assert_eq!(session.redirect_path().as_deref(), Some("/ad/create"));
        assert_eq!(session.take_redirect_path(), "/ad/create");
        assert_eq!(session.redirect_path(), None);
    }

    #[test]
    fn init_without_credential_fetches_nothing() {
        let owner = Owner::new();
        owner.set();
        let session = Session::new(ThreadBackend::reset(false, Ok(User::default())));

        session.init();

        assert_eq!(ThreadBackend::fetches(), 0);
        assert!(!session.is_authenticated());
    }
}
