//! Fragment-based routing.
//!
//! The current location is a `#/...` fragment string. Changing it queues a
//! [`RouterEvent`] that the render loop picks up on its next pass, the way a
//! browser delivers `hashchange` after the handler that set it returns.

use aurora_types::UserId;
use std::collections::VecDeque;
use tracing::info;

pub const USERS_FRAGMENT: &str = "#/users";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    UsersList,
    Profile(UserId),
}

impl Route {
    /// `users` → list, `users/<id>` → profile, anything else → list.
    ///
    /// Only a literal `#/` prefix is stripped.
    pub fn parse(fragment: &str) -> Self {
        let path = fragment.strip_prefix("#/").unwrap_or(fragment);
        let mut parts = path.split('/');

        match (parts.next(), parts.next()) {
            (Some("users"), Some(id)) if !id.is_empty() => Route::Profile(id.to_string()),
            _ => Route::UsersList,
        }
    }

    pub fn fragment(&self) -> String {
        match self {
            Route::UsersList => USERS_FRAGMENT.to_string(),
            Route::Profile(id) => format!("{}/{}", USERS_FRAGMENT, id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterEvent {
    FragmentChanged(String),
}

/// What the caller has to do after [`Router::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The fragment changed; a [`RouterEvent`] is queued.
    Pending,
    /// Already there; nothing was queued, re-render now.
    Rerender,
}

#[derive(Debug, Default)]
pub struct Router {
    fragment: String,
    pending: VecDeque<RouterEvent>,
}

impl Router {
    pub fn new(initial_fragment: Option<&str>) -> Self {
        Self {
            fragment: initial_fragment.unwrap_or_default().trim().to_string(),
            pending: VecDeque::new(),
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn current(&self) -> Route {
        Route::parse(&self.fragment)
    }

    pub fn navigate(&mut self, target: &Route) -> Navigation {
        if self.set_fragment(target.fragment()) {
            Navigation::Pending
        } else {
            Navigation::Rerender
        }
    }

    /// Replace the location. Returns `false` (and queues nothing) when unchanged.
    pub fn set_fragment(&mut self, fragment: impl Into<String>) -> bool {
        let fragment = fragment.into();
        if fragment == self.fragment {
            return false;
        }

        info!(from = %self.fragment, to = %fragment, "location changed");
        self.fragment = fragment.clone();
        self.pending.push_back(RouterEvent::FragmentChanged(fragment));
        true
    }

    pub fn poll_event(&mut self) -> Option<RouterEvent> {
        self.pending.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        assert_eq!(Route::parse("#/users/u2"), Route::Profile("u2".to_string()));
        assert_eq!(
            Route::parse("#/users/u_1718000000000/extra"),
            Route::Profile("u_1718000000000".to_string())
        );
        assert_eq!(Route::parse("users/u2"), Route::Profile("u2".to_string()));
    }

    #[test]
    fn test_parse_list_and_fallbacks() {
        assert_eq!(Route::parse("#/users"), Route::UsersList);
        assert_eq!(Route::parse("#/bogus"), Route::UsersList);
        assert_eq!(Route::parse(""), Route::UsersList);
        assert_eq!(Route::parse("#/users/"), Route::UsersList);
        assert_eq!(Route::parse("#/bogus/u2"), Route::UsersList);
        assert_eq!(Route::parse("#users/u2"), Route::UsersList);
        assert_eq!(Route::parse("/users/u2"), Route::UsersList);
    }

    #[test]
    fn test_fragment_round_trip() {
        for route in [Route::UsersList, Route::Profile("u3".to_string())] {
            assert_eq!(Route::parse(&route.fragment()), route);
        }
        assert_eq!(Route::Profile("u3".to_string()).fragment(), "#/users/u3");
    }

    #[test]
    fn test_navigate_to_new_location_queues_event() {
        let mut router = Router::new(None);
        assert_eq!(router.navigate(&Route::UsersList), Navigation::Pending);
        assert_eq!(router.fragment(), "#/users");
        assert_eq!(
            router.poll_event(),
            Some(RouterEvent::FragmentChanged("#/users".to_string()))
        );
        assert_eq!(router.poll_event(), None);
    }

    #[test]
    fn test_navigate_to_same_location_requests_rerender() {
        let mut router = Router::new(Some("#/users/u1"));
        let target = Route::Profile("u1".to_string());
        assert_eq!(router.navigate(&target), Navigation::Rerender);
        assert_eq!(router.poll_event(), None);
    }

    #[test]
    fn test_initial_route_defaults_to_list() {
        assert_eq!(Router::new(None).current(), Route::UsersList);
        assert_eq!(Router::new(Some("#/nope")).current(), Route::UsersList);
        assert_eq!(
            Router::new(Some("#/users/u2")).current(),
            Route::Profile("u2".to_string())
        );
    }

    #[test]
    fn test_external_change_queues_event() {
        let mut router = Router::new(Some("#/users"));
        assert!(router.set_fragment("#/users/u3"));
        assert!(!router.set_fragment("#/users/u3"));
        assert_eq!(router.current(), Route::Profile("u3".to_string()));
        assert!(router.poll_event().is_some());
        assert!(router.poll_event().is_none());
    }
}
