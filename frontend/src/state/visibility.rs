use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use log::debug;
use yew::prelude::*;

pub const REVEALED_CLASS: &str = "animate-fade-in";
pub const HIDDEN_CLASS: &str = "reveal-hidden";

/// Where a marked element is in its one-shot reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Unobserved,
    Observed { revealed: bool },
}

/// Reveal ids that have entered the viewport at least once.
///
/// Append-only: nothing removes an id, so a revealed element never hides again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilitySet {
    seen: HashSet<String>,
}

impl VisibilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when `id` was not recorded before.
    pub fn record(&mut self, id: impl Into<String>) -> bool {
        self.seen.insert(id.into())
    }

    pub fn record_all<I, S>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter().fold(false, |changed, id| self.record(id) || changed)
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn phase(&self, id: &str, observed: bool) -> RevealPhase {
        if !observed {
            RevealPhase::Unobserved
        } else {
            RevealPhase::Observed { revealed: self.is_revealed(id) }
        }
    }

    /// Class for an element that is marked and observed.
    pub fn reveal_class(&self, id: &str) -> &'static str {
        match self.phase(id, true) {
            RevealPhase::Observed { revealed: true } => REVEALED_CLASS,
            _ => HIDDEN_CLASS,
        }
    }

    /// Id and class for a marked element, owned so both can go into markup.
    pub fn mark(&self, id: impl Into<String>) -> RevealMark {
        let id = id.into();
        let class = self.reveal_class(&id);
        RevealMark { id, class }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealMark {
    pub id: String,
    pub class: &'static str,
}

pub enum RevealAction {
    /// Ids the observer reported as intersecting.
    Entered(Vec<String>),
}

impl Reducible for VisibilitySet {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Entered(ids) => {
                if ids.iter().all(|id| self.is_revealed(id)) {
                    return self;
                }
                let mut next = (*self).clone();
                next.record_all(ids);
                debug!("revealed {} element(s)", next.len());
                Rc::new(next)
            }
        }
    }
}

/// Keeps the ids of entries that are intersecting, in report order.
pub fn intersecting_ids<I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, bool)>,
{
    entries
        .into_iter()
        .filter_map(|(id, intersecting)| intersecting.then_some(id))
        .collect()
}

/// Open while the owning section is mounted. Once closed, nothing is forwarded.
#[derive(Clone, Debug)]
pub struct ObserverGate {
    open: Rc<Cell<bool>>,
}

impl Default for ObserverGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ObserverGate {
    pub fn new() -> Self {
        Self { open: Rc::new(Cell::new(true)) }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Hands intersecting ids to `callback`. Returns whether it was invoked.
    pub fn forward(&self, callback: &Callback<Vec<String>>, ids: Vec<String>) -> bool {
        if !self.is_open() || ids.is_empty() {
            return false;
        }
        callback.emit(ids);
        true
    }

    /// Closes the gate when the returned guard is dropped.
    pub fn guard(&self) -> GateGuard {
        GateGuard { gate: self.clone() }
    }
}

pub struct GateGuard {
    gate: ObserverGate,
}

impl Drop for GateGuard {
    fn drop(&mut self) {
        self.gate.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[test]
    fn record_reports_only_first_sighting() {
        let mut set = VisibilitySet::new();
        assert!(set.record("animate-0"));
        assert!(!set.record("animate-0"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn revealed_ids_survive_leaving_the_viewport() {
        let entered = intersecting_ids(vec![("churn-prediction".to_string(), true)]);
        let set = Rc::new(VisibilitySet::new()).reduce(RevealAction::Entered(entered));

        let left = intersecting_ids(vec![
            ("churn-prediction".to_string(), false),
            ("air-canvas".to_string(), true),
        ]);
        assert_eq!(left, vec!["air-canvas".to_string()]);
        let set = set.reduce(RevealAction::Entered(left));

        assert!(set.is_revealed("churn-prediction"));
        assert!(set.is_revealed("air-canvas"));
        assert_eq!(set.reveal_class("churn-prediction"), REVEALED_CLASS);
    }

    #[test]
    fn reduce_keeps_the_same_rc_when_nothing_is_new() {
        let set = Rc::new(VisibilitySet::new()).reduce(RevealAction::Entered(vec!["a".into()]));
        let again = Rc::clone(&set).reduce(RevealAction::Entered(vec!["a".into()]));
        assert!(Rc::ptr_eq(&set, &again));
    }

    #[test]
    fn phase_follows_observation_then_reveal() {
        let mut set = VisibilitySet::new();
        assert_eq!(set.phase("x", false), RevealPhase::Unobserved);
        assert_eq!(set.phase("x", true), RevealPhase::Observed { revealed: false });
        set.record("x");
        assert_eq!(set.phase("x", true), RevealPhase::Observed { revealed: true });
    }

    #[test]
    fn never_seen_elements_stay_hidden() {
        let set = VisibilitySet::new();
        assert_eq!(set.reveal_class("far-below-the-fold"), HIDDEN_CLASS);
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn closed_gate_forwards_nothing() {
        let calls = Rc::new(RefCell::new(Vec::<Vec<String>>::new()));
        let callback = {
            let calls = calls.clone();
            Callback::from(move |ids: Vec<String>| calls.borrow_mut().push(ids))
        };
        let gate = ObserverGate::new();

        assert!(gate.forward(&callback, vec!["about-header".into()]));
        gate.close();
        assert!(!gate.forward(&callback, vec!["about-skills".into()]));

        assert_eq!(*calls.borrow(), vec![vec!["about-header".to_string()]]);
    }

    #[test]
    fn mark_carries_the_id_and_its_current_class() {
        let mut set = VisibilitySet::new();
        let mark = set.mark(format!("education-{}", 0));
        assert_eq!(mark, RevealMark { id: "education-0".to_string(), class: HIDDEN_CLASS });

        set.record("education-0");
        assert_eq!(set.mark("education-0").class, REVEALED_CLASS);
        assert_eq!(set.mark("service-3").class, HIDDEN_CLASS);
    }

    #[test]
    fn dropping_the_guard_stops_forwarding() {
        let calls = Rc::new(Cell::new(0));
        let callback = {
            let calls = calls.clone();
            Callback::from(move |_: Vec<String>| calls.set(calls.get() + 1))
        };
        let gate = ObserverGate::new();
        let guard = gate.guard();

        assert!(gate.forward(&callback, vec!["service-0".into()]));
        drop(guard);
        assert!(!gate.forward(&callback, vec!["service-1".into()]));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn gate_clones_share_state() {
        let gate = ObserverGate::new();
        let held_by_closure = gate.clone();
        gate.close();
        assert!(!held_by_closure.is_open());
    }
}
