//! Session state management
//!
//! One process-wide session record: the signed-in user, their auth token,
//! and their interface preferences. Persisted to localStorage so a page
//! reload reconstructs it without a network call. Writes are
//! last-write-wins; there is no locking.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use shared::dto::auth::{Role, UserInfo};

use crate::utils::constants::SESSION_STORAGE_KEY;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

/// The client's record of the currently authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: UserInfo,
    pub token: String,
}

/// Resolution state of the session store.
///
/// `Loading` exists only between context creation and the synchronous
/// storage read; every consumer after app start sees one of the other two.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Loading,
    Authenticated(Session),
    Unauthenticated,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            SessionState::Authenticated(session) => Some(session.user.role),
            _ => None,
        }
    }
}

/// Access level a routed screen declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// Only for signed-out visitors (the auth screen itself).
    PublicOnly,
    Protected,
    AdminOnly,
}

/// What the guard does for a screen given the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Session not resolved yet; show the loading indicator.
    Wait,
    ToAuth,
    ToDashboard,
}

/// Guard decision table. Pure and synchronous; callers re-evaluate it on
/// every navigation, never caching a previous decision.
pub fn evaluate_access(access: RouteAccess, state: &SessionState) -> GuardDecision {
    match (access, state) {
        (RouteAccess::Public, _) => GuardDecision::Render,
        (_, SessionState::Loading) => GuardDecision::Wait,

        (RouteAccess::PublicOnly, SessionState::Authenticated(_)) => GuardDecision::ToDashboard,
        (RouteAccess::PublicOnly, SessionState::Unauthenticated) => GuardDecision::Render,

        (RouteAccess::Protected, SessionState::Authenticated(_)) => GuardDecision::Render,
        (RouteAccess::Protected, SessionState::Unauthenticated) => GuardDecision::ToAuth,

        (RouteAccess::AdminOnly, SessionState::Authenticated(session)) => {
            if session.user.role.is_admin() {
                GuardDecision::Render
            } else {
                GuardDecision::ToDashboard
            }
        }
        (RouteAccess::AdminOnly, SessionState::Unauthenticated) => GuardDecision::ToAuth,
    }
}

/// Global session context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let context = Self {
            state: RwSignal::new(SessionState::Loading),
        };
        context.restore();
        context
    }

    /// Resolve Loading from localStorage. Synchronous, no network call.
    fn restore(&self) {
        match load_from_storage::<Session>(SESSION_STORAGE_KEY) {
            Some(session) => {
                log::info!("session restored for {}", session.user.email);
                self.state.set(SessionState::Authenticated(session));
            }
            None => self.state.set(SessionState::Unauthenticated),
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.state.with(|state| match state {
            SessionState::Authenticated(session) => Some(session.clone()),
            _ => None,
        })
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.session().map(|s| s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// Persist and activate a session after login/signup.
    pub fn log_in(&self, session: Session) {
        save_to_storage(SESSION_STORAGE_KEY, &session);
        self.state.set(SessionState::Authenticated(session));
    }

    /// Clear storage and drop to Unauthenticated. The caller navigates to
    /// the public landing screen.
    pub fn log_out(&self) {
        remove_from_storage(SESSION_STORAGE_KEY);
        self.state.set(SessionState::Unauthenticated);
    }

    /// Mutate the signed-in user record and re-persist. No-op when
    /// signed out.
    pub fn update_user(&self, f: impl FnOnce(&mut UserInfo)) {
        self.state.update(|state| {
            if let SessionState::Authenticated(session) = state {
                f(&mut session.user);
                save_to_storage(SESSION_STORAGE_KEY, session);
            }
        });
    }

    pub fn language(&self) -> String {
        self.user()
            .map(|u| u.preferred_language)
            .unwrap_or_else(|| "en".to_string())
    }

    pub fn set_language(&self, code: &str) {
        let code = code.to_string();
        self.update_user(|u| u.preferred_language = code);
    }

    pub fn theme(&self) -> String {
        self.user()
            .map(|u| u.theme)
            .unwrap_or_else(|| "light".to_string())
    }

    pub fn toggle_theme(&self) {
        self.update_user(|u| {
            u.theme = if u.theme == "light" {
                "dark".to_string()
            } else {
                "light".to_string()
            };
        });
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_role(role: Role) -> SessionState {
        SessionState::Authenticated(Session {
            user: UserInfo {
                id: "1".to_string(),
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                role,
                preferred_language: "en".to_string(),
                theme: "light".to_string(),
                location: None,
                farm_size: None,
                primary_crops: vec![],
            },
            token: "tok".to_string(),
        })
    }

    #[test]
    fn public_routes_always_render() {
        for state in [
            SessionState::Loading,
            SessionState::Unauthenticated,
            session_with_role(Role::User),
        ] {
            assert_eq!(
                evaluate_access(RouteAccess::Public, &state),
                GuardDecision::Render
            );
        }
    }

    #[test]
    fn protected_route_without_session_redirects_to_auth() {
        assert_eq!(
            evaluate_access(RouteAccess::Protected, &SessionState::Unauthenticated),
            GuardDecision::ToAuth
        );
    }

    #[test]
    fn protected_route_with_session_renders() {
        assert_eq!(
            evaluate_access(RouteAccess::Protected, &session_with_role(Role::User)),
            GuardDecision::Render
        );
    }

    #[test]
    fn admin_route_with_user_role_redirects_to_dashboard() {
        assert_eq!(
            evaluate_access(RouteAccess::AdminOnly, &session_with_role(Role::User)),
            GuardDecision::ToDashboard
        );
        assert_eq!(
            evaluate_access(RouteAccess::AdminOnly, &session_with_role(Role::Admin)),
            GuardDecision::Render
        );
    }

    #[test]
    fn admin_route_without_session_redirects_to_auth() {
        assert_eq!(
            evaluate_access(RouteAccess::AdminOnly, &SessionState::Unauthenticated),
            GuardDecision::ToAuth
        );
    }

    #[test]
    fn auth_screen_turns_away_signed_in_users() {
        assert_eq!(
            evaluate_access(RouteAccess::PublicOnly, &session_with_role(Role::Admin)),
            GuardDecision::ToDashboard
        );
        assert_eq!(
            evaluate_access(RouteAccess::PublicOnly, &SessionState::Unauthenticated),
            GuardDecision::Render
        );
    }

    #[test]
    fn unresolved_session_waits_everywhere_but_public() {
        for access in [
            RouteAccess::PublicOnly,
            RouteAccess::Protected,
            RouteAccess::AdminOnly,
        ] {
            assert_eq!(
                evaluate_access(access, &SessionState::Loading),
                GuardDecision::Wait
            );
        }
    }
}
