use super::discovery::Discovered;
use crate::shared::dom::{set_class, set_visible};
use contracts::shared::tabs::{MarkerConfig, Projection};

/// Apply a projection: clear every trigger (and wrapper) first, then mark the
/// active ones, so triggers sharing a wrapper keep it marked.
pub fn apply(discovered: &Discovered, projection: &Projection, markers: &MarkerConfig) {
    let class = markers.active_class.as_str();

    for trigger in &discovered.triggers {
        set_class(trigger, class, false);
        if markers.mark_wrapper {
            if let Some(wrapper) = trigger.parent_element() {
                set_class(&wrapper, class, false);
            }
        }
    }

    for (trigger, _) in discovered
        .triggers
        .iter()
        .zip(&projection.triggers)
        .filter(|(_, active)| **active)
    {
        set_class(trigger, class, true);
        if markers.mark_wrapper {
            if let Some(wrapper) = trigger.parent_element() {
                set_class(&wrapper, class, true);
            }
        }
    }

    for (panel, visible) in discovered.panels.iter().zip(&projection.panels) {
        set_visible(panel, *visible);
    }
}
