//! Mobile navigation menu.
//!
//! The open flag lives in [`PageState`]; the view mirrors it onto the toggle
//! (`aria-expanded`) and the list (`is-open`).

use crate::page::PageState;

pub const ESCAPE_KEY: &str = "Escape";

/// Interactions that can change the menu state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    ToggleClicked,
    LinkClicked,
    /// A click anywhere on the document. `inside` is true when the target is
    /// within the toggle or the list.
    DocumentClick { inside: bool },
    KeyDown(String),
}

impl NavEvent {
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self::KeyDown(key.into())
    }
}

pub trait NavView {
    /// Both the toggle and the list exist.
    fn nav_available(&self) -> bool;
    fn render_nav(&mut self, open: bool);
}

/// The menu state after `event`, starting from `open`.
#[must_use]
pub fn next_open(open: bool, event: &NavEvent) -> bool {
    match event {
        NavEvent::ToggleClicked => !open,
        NavEvent::LinkClicked => false,
        NavEvent::DocumentClick { inside } => open && *inside,
        NavEvent::KeyDown(key) => open && key != ESCAPE_KEY,
    }
}

/// Fold a sequence of events over an initial state.
#[must_use]
pub fn replay<'a>(initial: bool, events: impl IntoIterator<Item = &'a NavEvent>) -> bool {
    events
        .into_iter()
        .fold(initial, |open, event| next_open(open, event))
}

pub fn set_open(state: &mut PageState, view: &mut impl NavView, open: bool) {
    if !view.nav_available() {
        return;
    }
    if state.nav_open != open {
        log::debug!("nav: open={open}");
    }
    state.nav_open = open;
    view.render_nav(open);
}

pub fn toggle_menu(state: &mut PageState, view: &mut impl NavView) {
    let open = !state.nav_open;
    set_open(state, view, open);
}

pub fn handle_nav_event(state: &mut PageState, view: &mut impl NavView, event: &NavEvent) {
    match event {
        NavEvent::ToggleClicked => toggle_menu(state, view),
        NavEvent::LinkClicked => set_open(state, view, false),
        NavEvent::DocumentClick { inside } => {
            if state.nav_open && !inside {
                set_open(state, view, false);
            }
        }
        NavEvent::KeyDown(key) if key == ESCAPE_KEY => set_open(state, view, false),
        NavEvent::KeyDown(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryPage;

    fn outside() -> NavEvent {
        NavEvent::DocumentClick { inside: false }
    }

    fn inside() -> NavEvent {
        NavEvent::DocumentClick { inside: true }
    }

    fn alphabet() -> Vec<NavEvent> {
        vec![
            NavEvent::ToggleClicked,
            NavEvent::LinkClicked,
            outside(),
            inside(),
            NavEvent::key(ESCAPE_KEY),
            NavEvent::key("Enter"),
        ]
    }

    fn sequences(len: usize) -> Vec<Vec<NavEvent>> {
        let alphabet = alphabet();
        let mut out = vec![Vec::new()];
        for _ in 0..len {
            out = out
                .into_iter()
                .flat_map(|seq| {
                    alphabet.iter().map(move |event| {
                        let mut next = seq.clone();
                        next.push(event.clone());
                        next
                    })
                })
                .collect();
        }
        out
    }

    #[test]
    fn fold_matches_toggle_and_close_rules() {
        assert!(next_open(false, &NavEvent::ToggleClicked));
        assert!(!next_open(true, &NavEvent::ToggleClicked));
        assert!(!next_open(true, &NavEvent::LinkClicked));
        assert!(!next_open(true, &outside()));
        assert!(next_open(true, &inside()));
        assert!(!next_open(false, &inside()));
        assert!(!next_open(true, &NavEvent::key(ESCAPE_KEY)));
        assert!(next_open(true, &NavEvent::key("a")));
    }

    #[test]
    fn handlers_agree_with_fold_for_all_short_sequences() {
        for len in 0..=4 {
            for seq in sequences(len) {
                let mut page = MemoryPage::portfolio();
                let mut state = PageState::default();
                for event in &seq {
                    handle_nav_event(&mut state, &mut page, event);
                }
                let expected = replay(false, &seq);
                assert_eq!(state.nav_open, expected, "sequence {seq:?}");
                assert_eq!(page.nav_expanded, expected, "view drift for {seq:?}");
                assert_eq!(page.list_open, expected, "list drift for {seq:?}");
            }
        }
    }

    #[test]
    fn closing_twice_stays_closed() {
        let mut page = MemoryPage::portfolio();
        let mut state = PageState::default();
        toggle_menu(&mut state, &mut page);
        assert!(state.nav_open && page.nav_expanded && page.list_open);
        set_open(&mut state, &mut page, false);
        set_open(&mut state, &mut page, false);
        assert!(!state.nav_open);
        assert!(!page.nav_expanded);
        assert!(!page.list_open);
    }

    #[test]
    fn missing_elements_make_everything_a_no_op() {
        let mut page = MemoryPage::portfolio();
        page.has_nav = false;
        let mut state = PageState::default();
        handle_nav_event(&mut state, &mut page, &NavEvent::ToggleClicked);
        assert!(!state.nav_open);
        assert!(!page.nav_expanded);
    }
}
