//! Header behaviour and logout for the navigation shell.

use crate::observe::{ListenerId, Observable};
use crate::session::{KeyValueStore, SessionError, SessionStore};
use log::{error, info};
use std::cell::Cell;

pub const ROOT_ROUTE: &str = "/";

/// Scrolling down hides the header only once past this offset.
pub const HIDE_THRESHOLD_PX: f64 = 80.0;
/// Pointer distance from the top of the viewport that brings the header back.
pub const REVEAL_ZONE_PX: f64 = 50.0;

pub fn next_header_visibility(prev_y: f64, curr_y: f64, prev_visible: bool) -> bool {
    if curr_y > prev_y && curr_y > HIDE_THRESHOLD_PX {
        false
    } else if curr_y < prev_y {
        true
    } else {
        prev_visible
    }
}

pub fn pointer_reveals_header(client_y: f64) -> bool {
    client_y <= REVEAL_ZONE_PX
}

pub struct HeaderVisibility {
    visible: Observable<bool>,
    last_scroll_y: Cell<f64>,
}

impl Default for HeaderVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderVisibility {
    pub fn new() -> Self {
        Self {
            visible: Observable::new(true),
            last_scroll_y: Cell::new(0.0),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn on_scroll(&self, scroll_y: f64) {
        let prev = self.last_scroll_y.replace(scroll_y);
        self.visible
            .update(|v| next_header_visibility(prev, scroll_y, *v));
    }

    pub fn on_pointer_move(&self, client_y: f64) {
        if pointer_reveals_header(client_y) {
            self.visible.set(true);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&bool) + 'static) -> ListenerId {
        self.visible.subscribe(listener)
    }
}

pub trait Navigator {
    fn navigate(&self, route: &str);
}

/// Resets the stored session to logged out and sends the user to the root
/// route. Navigation happens even if the store refused the write.
pub fn logout<S: KeyValueStore>(
    sessions: &SessionStore<S>,
    navigator: &dyn Navigator,
) -> Result<(), SessionError> {
    let result = sessions.clear();
    match &result {
        Ok(()) => info!("session cleared"),
        Err(e) => error!("failed to clear session on logout: {e}"),
    }
    navigator.navigate(ROOT_ROUTE);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStore, SessionRecord, StoreError};
    use crate::testing::RecordingNavigator;
    use std::rc::Rc;

    #[test]
    fn scrolling_down_past_threshold_hides() {
        assert!(!next_header_visibility(60.0, 120.0, true));
        assert!(next_header_visibility(10.0, 40.0, true));
    }

    #[test]
    fn scrolling_up_shows() {
        assert!(next_header_visibility(300.0, 250.0, false));
    }

    #[test]
    fn no_movement_keeps_state() {
        assert!(!next_header_visibility(200.0, 200.0, false));
        assert!(next_header_visibility(200.0, 200.0, true));
    }

    #[test]
    fn pointer_near_top_reveals() {
        let header = HeaderVisibility::new();
        header.on_scroll(100.0);
        header.on_scroll(400.0);
        assert!(!header.is_visible());

        header.on_pointer_move(300.0);
        assert!(!header.is_visible());
        header.on_pointer_move(12.0);
        assert!(header.is_visible());
    }

    #[test]
    fn listeners_follow_scroll() {
        let header = HeaderVisibility::new();
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        header.subscribe(move |v| sink.borrow_mut().push(*v));

        header.on_scroll(500.0);
        header.on_scroll(600.0);
        header.on_scroll(550.0);

        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn logout_resets_session_and_goes_home() {
        let sessions = SessionStore::new(MemoryStore::default());
        sessions
            .write(&SessionRecord {
                is_logged_in: true,
                token: Some("t".into()),
                role: Some("admin".into()),
                ..SessionRecord::default()
            })
            .expect("seed");
        let nav = RecordingNavigator::default();

        logout(&sessions, &nav).expect("logout");

        assert_eq!(sessions.read().expect("read"), Some(SessionRecord::logged_out()));
        assert_eq!(nav.current().as_deref(), Some(ROOT_ROUTE));
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Rejected("quota exceeded".into()))
        }
    }

    #[test]
    fn logout_still_navigates_when_store_rejects() {
        let nav = RecordingNavigator::default();
        let err = logout(&SessionStore::new(ReadOnlyStore), &nav).expect_err("write fails");
        assert!(matches!(err, SessionError::Store(StoreError::Rejected(_))));
        assert_eq!(nav.visited(), vec![ROOT_ROUTE.to_string()]);
    }
}
