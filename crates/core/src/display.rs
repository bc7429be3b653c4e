//! Display targets the presenter writes to.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::tier::SlotKey;

/// Host surface holding the display slots.
///
/// Every method takes the slot key and resolves it afresh, so a slot that
/// disappears between calls is simply not found. Writes to a missing slot are
/// ignored.
pub trait DisplaySurface {
    /// Text currently shown in the slot, or `None` if the slot does not exist.
    fn current_text(&self, slot: &SlotKey) -> Option<String>;

    /// Put the slot into its mid-transition style.
    fn begin_transition(&self, slot: &SlotKey);

    /// Replace the slot's text and restore its resting style.
    fn commit(&self, slot: &SlotKey, text: &str);
}

impl<D: DisplaySurface + ?Sized> DisplaySurface for Rc<D> {
    fn current_text(&self, slot: &SlotKey) -> Option<String> {
        (**self).current_text(slot)
    }

    fn begin_transition(&self, slot: &SlotKey) {
        (**self).begin_transition(slot);
    }

    fn commit(&self, slot: &SlotKey, text: &str) {
        (**self).commit(slot, text);
    }
}

/// Observable state of one in-memory slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotState {
    pub text: String,
    pub transitioning: bool,
    pub transitions: usize,
    pub commits: usize,
}

/// In-memory display surface.
///
/// Only slots registered up front exist; everything else reads as missing.
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    slots: RefCell<BTreeMap<SlotKey, SlotState>>,
}

impl MemoryDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface with the given slots, each showing `initial`.
    pub fn with_slots(slots: impl IntoIterator<Item = SlotKey>, initial: &str) -> Self {
        let display = Self::new();
        for slot in slots {
            display.insert(slot, initial);
        }
        display
    }

    pub fn insert(&self, slot: SlotKey, text: &str) {
        self.slots.borrow_mut().insert(
            slot,
            SlotState {
                text: text.to_string(),
                ..SlotState::default()
            },
        );
    }

    pub fn remove(&self, slot: &SlotKey) -> Option<SlotState> {
        self.slots.borrow_mut().remove(slot)
    }

    #[must_use]
    pub fn state(&self, slot: &SlotKey) -> Option<SlotState> {
        self.slots.borrow().get(slot).cloned()
    }

    #[must_use]
    pub fn text(&self, slot: &SlotKey) -> Option<String> {
        self.slots.borrow().get(slot).map(|s| s.text.clone())
    }
}

impl DisplaySurface for MemoryDisplay {
    fn current_text(&self, slot: &SlotKey) -> Option<String> {
        self.text(slot)
    }

    fn begin_transition(&self, slot: &SlotKey) {
        if let Some(state) = self.slots.borrow_mut().get_mut(slot) {
            state.transitioning = true;
            state.transitions = state.transitions.saturating_add(1);
        }
    }

    fn commit(&self, slot: &SlotKey, text: &str) {
        if let Some(state) = self.slots.borrow_mut().get_mut(slot) {
            text.clone_into(&mut state.text);
            state.transitioning = false;
            state.commits = state.commits.saturating_add(1);
        }
    }
}
