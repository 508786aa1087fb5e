//! Tab switcher state machine.
//!
//! The DOM is never the source of truth here: `TabState` holds which trigger is
//! active and which panel is visible, and the rendering layer projects it onto
//! classes and `display` through [`Projection`].

use super::error::TabError;
use super::key::TabKey;

/// Snapshot of discovered trigger and panel keys, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSet {
    pub triggers: Vec<Option<TabKey>>,
    pub panels: Vec<Option<TabKey>>,
}

impl TabSet {
    pub fn new(triggers: Vec<Option<TabKey>>, panels: Vec<Option<TabKey>>) -> Self {
        Self { triggers, panels }
    }

    /// Build a snapshot from raw attribute values.
    pub fn from_raw<T, P>(triggers: T, panels: P) -> Self
    where
        T: IntoIterator<Item = Option<String>>,
        P: IntoIterator<Item = Option<String>>,
    {
        Self {
            triggers: triggers
                .into_iter()
                .map(|raw| TabKey::parse(raw.as_deref()))
                .collect(),
            panels: panels
                .into_iter()
                .map(|raw| TabKey::parse(raw.as_deref()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty() || self.panels.is_empty()
    }

    /// First trigger carrying a usable key.
    pub fn first_valid_trigger(&self) -> Option<usize> {
        self.triggers.iter().position(Option::is_some)
    }

    pub fn trigger_for(&self, key: &TabKey) -> Option<usize> {
        self.triggers.iter().position(|k| k.as_ref() == Some(key))
    }

    pub fn panel_for(&self, key: &TabKey) -> Option<usize> {
        self.panels.iter().position(|k| k.as_ref() == Some(key))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabState {
    pub active: Option<usize>,
    pub active_key: Option<TabKey>,
    pub visible: Option<usize>,
}

/// Outcome of a successful Activate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub trigger: usize,
    pub key: TabKey,
    pub panel: Option<usize>,
}

impl Activation {
    /// Warning to report when the activation left no panel visible.
    pub fn diagnostic(&self) -> Option<TabError> {
        match self.panel {
            Some(_) => None,
            None => Some(TabError::UnmatchedKey(self.key.clone())),
        }
    }
}

/// Per-element flags the rendering layer applies to the DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    pub triggers: Vec<bool>,
    pub panels: Vec<bool>,
}

impl Projection {
    pub fn active_count(&self) -> usize {
        self.triggers.iter().filter(|active| **active).count()
    }

    pub fn visible_count(&self) -> usize {
        self.panels.iter().filter(|visible| **visible).count()
    }
}

#[derive(Debug, Clone)]
pub struct TabSwitcher {
    set: TabSet,
    state: TabState,
}

impl TabSwitcher {
    /// Initialize over a discovered snapshot and activate the first keyed trigger.
    ///
    /// Returns `EmptyCollection` when either side is empty. When no trigger has
    /// a key the switcher is still created, with no tab active.
    pub fn init(set: TabSet) -> Result<(Self, Option<Activation>), TabError> {
        if set.is_empty() {
            return Err(TabError::EmptyCollection {
                triggers: set.triggers.len(),
                panels: set.panels.len(),
            });
        }

        let mut switcher = Self {
            set,
            state: TabState::default(),
        };
        let initial = match switcher.set.first_valid_trigger() {
            Some(index) => Some(switcher.activate(index)?),
            None => None,
        };
        Ok((switcher, initial))
    }

    /// Activate the trigger at `trigger`.
    ///
    /// A trigger without a key (or an index outside the snapshot) leaves the
    /// state untouched and yields `MissingKey`.
    pub fn activate(&mut self, trigger: usize) -> Result<Activation, TabError> {
        let key = self
            .set
            .triggers
            .get(trigger)
            .cloned()
            .flatten()
            .ok_or(TabError::MissingKey { trigger })?;

        let panel = self.set.panel_for(&key);
        self.state = TabState {
            active: Some(trigger),
            active_key: Some(key.clone()),
            visible: panel,
        };

        Ok(Activation {
            trigger,
            key,
            panel,
        })
    }

    /// Replace the snapshot after the document changed, keeping the active key.
    pub fn refresh(&mut self, set: TabSet) {
        let active = match (&self.state.active, &self.state.active_key) {
            (Some(index), Some(key)) if set.triggers.get(*index) == Some(&Some(key.clone())) => {
                Some(*index)
            }
            (_, Some(key)) => set.trigger_for(key),
            _ => None,
        };

        self.state = match active {
            Some(index) => {
                let key = self.state.active_key.clone();
                let visible = key.as_ref().and_then(|k| set.panel_for(k));
                TabState {
                    active: Some(index),
                    active_key: key,
                    visible,
                }
            }
            None => TabState::default(),
        };
        self.set = set;
    }

    pub fn state(&self) -> &TabState {
        &self.state
    }

    pub fn set(&self) -> &TabSet {
        &self.set
    }

    pub fn projection(&self) -> Projection {
        Projection {
            triggers: (0..self.set.triggers.len())
                .map(|i| self.state.active == Some(i))
                .collect(),
            panels: (0..self.set.panels.len())
                .map(|i| self.state.visible == Some(i))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &[&str]) -> Vec<Option<String>> {
        raw.iter().map(|s| Some(s.to_string())).collect()
    }

    fn tab_set(triggers: &[&str], panels: &[&str]) -> TabSet {
        TabSet::from_raw(keys(triggers), keys(panels))
    }

    fn active_key(switcher: &TabSwitcher) -> Option<&str> {
        switcher.state().active_key.as_ref().map(TabKey::as_str)
    }

    #[test]
    fn test_init_activates_first_tab() {
        let (switcher, initial) =
            TabSwitcher::init(tab_set(&["info", "docs", "billing"], &["info", "docs", "billing"]))
                .unwrap();

        let initial = initial.unwrap();
        assert_eq!(initial.trigger, 0);
        assert_eq!(initial.panel, Some(0));
        assert_eq!(initial.diagnostic(), None);
        assert_eq!(
            switcher.projection(),
            Projection {
                triggers: vec![true, false, false],
                panels: vec![true, false, false],
            }
        );
    }

    #[test]
    fn test_click_switches_panel() {
        let (mut switcher, _) =
            TabSwitcher::init(tab_set(&["info", "docs", "billing"], &["info", "docs", "billing"]))
                .unwrap();

        let activation = switcher.activate(2).unwrap();
        assert_eq!(activation.key.as_str(), "billing");
        assert_eq!(
            switcher.projection(),
            Projection {
                triggers: vec![false, false, true],
                panels: vec![false, false, true],
            }
        );
    }

    #[test]
    fn test_init_skips_triggers_without_key() {
        let set = TabSet::from_raw(
            vec![None, Some(" ".to_string()), Some("docs".to_string())],
            keys(&["info", "docs"]),
        );
        let (switcher, initial) = TabSwitcher::init(set).unwrap();

        assert_eq!(initial.map(|a| a.trigger), Some(2));
        assert_eq!(switcher.state().visible, Some(1));
    }

    #[test]
    fn test_init_without_any_key_leaves_nothing_active() {
        let set = TabSet::from_raw(vec![None, None], keys(&["info"]));
        let (switcher, initial) = TabSwitcher::init(set).unwrap();

        assert!(initial.is_none());
        assert_eq!(switcher.state(), &TabState::default());
        assert_eq!(switcher.projection().active_count(), 0);
        assert_eq!(switcher.projection().visible_count(), 0);
    }

    #[test]
    fn test_empty_collections_are_reported() {
        assert_eq!(
            TabSwitcher::init(tab_set(&[], &["info"])).unwrap_err(),
            TabError::EmptyCollection { triggers: 0, panels: 1 }
        );
        assert_eq!(
            TabSwitcher::init(tab_set(&["info"], &[])).unwrap_err(),
            TabError::EmptyCollection { triggers: 1, panels: 0 }
        );
    }

    #[test]
    fn test_single_active_after_every_click() {
        let (mut switcher, _) =
            TabSwitcher::init(tab_set(&["a", "b", "c", "d"], &["a", "b", "c", "d"])).unwrap();

        for trigger in [3, 1, 1, 0, 2, 3, 0] {
            switcher.activate(trigger).unwrap();
            let projection = switcher.projection();
            assert_eq!(projection.active_count(), 1);
            assert_eq!(projection.visible_count(), 1);
            assert!(projection.triggers[trigger]);
            assert!(projection.panels[trigger]);
        }
    }

    #[test]
    fn test_panel_matched_by_key_not_position() {
        let (mut switcher, _) =
            TabSwitcher::init(tab_set(&["info", "docs"], &["docs", "extra", "info"])).unwrap();
        assert_eq!(switcher.state().visible, Some(2));

        switcher.activate(1).unwrap();
        assert_eq!(switcher.projection().panels, vec![true, false, false]);
    }

    #[test]
    fn test_activate_is_idempotent() {
        let (mut switcher, _) =
            TabSwitcher::init(tab_set(&["info", "docs"], &["info", "docs"])).unwrap();

        let first = switcher.activate(1).unwrap();
        let state_once = switcher.state().clone();
        let second = switcher.activate(1).unwrap();

        assert_eq!(first, second);
        assert_eq!(switcher.state(), &state_once);
    }

    #[test]
    fn test_missing_key_is_noop() {
        let set = TabSet::from_raw(
            vec![Some("info".to_string()), Some("docs".to_string()), None],
            keys(&["info", "docs"]),
        );
        let (mut switcher, _) = TabSwitcher::init(set).unwrap();
        switcher.activate(1).unwrap();
        let before = switcher.projection();

        assert_eq!(
            switcher.activate(2).unwrap_err(),
            TabError::MissingKey { trigger: 2 }
        );
        assert_eq!(
            switcher.activate(7).unwrap_err(),
            TabError::MissingKey { trigger: 7 }
        );
        assert_eq!(switcher.projection(), before);
        assert_eq!(active_key(&switcher), Some("docs"));
    }

    #[test]
    fn test_unmatched_key_hides_all_panels() {
        let (mut switcher, _) = TabSwitcher::init(tab_set(&["a", "b"], &["a"])).unwrap();

        let activation = switcher.activate(1).unwrap();
        assert_eq!(activation.panel, None);
        assert_eq!(
            activation.diagnostic(),
            Some(TabError::UnmatchedKey(TabKey::parse(Some("b")).unwrap()))
        );
        assert_eq!(
            switcher.projection(),
            Projection {
                triggers: vec![false, true],
                panels: vec![false],
            }
        );
    }

    #[test]
    fn test_padded_trigger_key_does_not_match_panel() {
        let (switcher, initial) = TabSwitcher::init(tab_set(&[" info"], &["info"])).unwrap();

        let initial = initial.unwrap();
        assert_eq!(initial.panel, None);
        assert!(initial.diagnostic().is_some());
        assert_eq!(switcher.projection().visible_count(), 0);
    }

    #[test]
    fn test_refresh_picks_up_new_trigger() {
        let (mut switcher, _) = TabSwitcher::init(tab_set(&["a", "b"], &["a", "b"])).unwrap();
        switcher.activate(1).unwrap();

        // a trigger inserted before the active one shifts its index
        switcher.refresh(tab_set(&["new", "a", "b"], &["a", "b", "new"]));
        assert_eq!(switcher.state().active, Some(2));
        assert_eq!(switcher.state().visible, Some(1));

        switcher.activate(0).unwrap();
        assert_eq!(switcher.projection().triggers, vec![true, false, false]);
        assert_eq!(switcher.projection().panels, vec![false, false, true]);
    }

    #[test]
    fn test_refresh_drops_state_when_active_trigger_removed() {
        let (mut switcher, _) = TabSwitcher::init(tab_set(&["a", "b"], &["a", "b"])).unwrap();

        switcher.refresh(tab_set(&["b"], &["a", "b"]));
        assert_eq!(switcher.state(), &TabState::default());
    }
}
