//! Resource grid selection state.
//!
//! # Design
//! - Track the selection by key; the resource list itself stays caller-owned.
//! - Every transition goes through [`reduce`] and returns a fresh state.
//! - An empty list simply has no selection.
//! - Listeners hear about a row only when the active key actually moves.

use crate::models::Resource;

/// Selection state for one rendered list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceListState {
    /// Key of the active row.
    pub selected_key: Option<String>,
}

impl ResourceListState {
    /// Initial state: the first resource is active.
    #[must_use]
    pub fn for_resources(resources: &[Resource]) -> Self {
        Self {
            selected_key: resources.first().map(|resource| resource.key.clone()),
        }
    }

    /// Resolve the active resource within `resources`.
    #[must_use]
    pub fn selected<'a>(&self, resources: &'a [Resource]) -> Option<&'a Resource> {
        let key = self.selected_key.as_deref()?;
        resources.iter().find(|resource| resource.key == key)
    }

    /// Whether `key` is the active row.
    #[must_use]
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected_key.as_deref() == Some(key)
    }
}

/// Transitions accepted by [`reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceListAction {
    /// Activate the row with this key.
    Select(String),
    /// The list was replaced; start over from the first row.
    Reset,
}

/// Apply `action` against the currently displayed `resources`.
///
/// Selecting a key that is not displayed leaves the state unchanged.
#[must_use]
pub fn reduce(
    state: &ResourceListState,
    action: ResourceListAction,
    resources: &[Resource],
) -> ResourceListState {
    match action {
        ResourceListAction::Select(key) => {
            if resources.iter().any(|resource| resource.key == key) {
                ResourceListState {
                    selected_key: Some(key),
                }
            } else {
                state.clone()
            }
        }
        ResourceListAction::Reset => ResourceListState::for_resources(resources),
    }
}

/// Resource that became active going from `previous` to `next`.
///
/// Returns `None` when the active key did not move, so re-activating the
/// current row (focus followed by click, or a second click) stays silent.
#[must_use]
pub fn activated<'a>(
    previous: &ResourceListState,
    next: &ResourceListState,
    resources: &'a [Resource],
) -> Option<&'a Resource> {
    if previous == next {
        return None;
    }
    next.selected(resources)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resources() -> Vec<Resource> {
        vec![
            Resource::new("one", "Ada Lovelace", "One"),
            Resource::new("two", "Alan Turing", "Two").with_translation("Deux"),
        ]
    }

    #[test]
    fn initial_selection_is_first_resource() {
        let list = resources();
        let state = ResourceListState::for_resources(&list);
        assert_eq!(state.selected_key.as_deref(), Some("one"));
        assert_eq!(state.selected(&list).map(|r| r.source.as_str()), Some("One"));
    }

    #[test]
    fn empty_list_has_no_selection() {
        let state = ResourceListState::for_resources(&[]);
        assert!(state.selected_key.is_none());
        assert!(state.selected(&[]).is_none());
    }

    #[test]
    fn select_moves_to_known_key_only() {
        let list = resources();
        let state = ResourceListState::for_resources(&list);
        let next = reduce(&state, ResourceListAction::Select("two".into()), &list);
        assert!(next.is_selected("two"));
        assert!(!next.is_selected("one"));
        let unchanged = reduce(&next, ResourceListAction::Select("missing".into()), &list);
        assert_eq!(unchanged, next);
    }

    #[test]
    fn reset_returns_to_first_row_of_new_list() {
        let list = resources();
        let state = reduce(
            &ResourceListState::for_resources(&list),
            ResourceListAction::Select("two".into()),
            &list,
        );
        let replaced = vec![Resource::new("three", "Grace Hopper", "Three")];
        let reset = reduce(&state, ResourceListAction::Reset, &replaced);
        assert_eq!(reset.selected_key.as_deref(), Some("three"));
    }

    #[test]
    fn activation_reports_only_a_moved_selection() {
        let list = resources();
        let current = ResourceListState::for_resources(&list);

        let next = reduce(&current, ResourceListAction::Select("two".into()), &list);
        assert_eq!(
            activated(&current, &next, &list).map(|r| r.key.as_str()),
            Some("two")
        );

        // Focus then click on the same row applies the selection twice.
        let again = reduce(&next, ResourceListAction::Select("two".into()), &list);
        assert!(activated(&next, &again, &list).is_none());

        let missing = reduce(&next, ResourceListAction::Select("missing".into()), &list);
        assert!(activated(&next, &missing, &list).is_none());
    }
}
