use glossa_ui::core::store::{AppStore, set_resources, sign_out, start_loading};
use glossa_ui::features::resources::logic::{RESOURCE_COLUMNS, resource_rows};
use glossa_ui::features::resources::state::{ResourceListAction, ResourceListState, reduce};
use glossa_ui::models::{Resource, demo_resources};

#[test]
fn loaded_resources_render_one_row_each() {
    let mut store = AppStore::default();
    start_loading(&mut store);
    set_resources(&mut store, demo_resources());

    let rows = resource_rows(&store.resources.items);
    assert_eq!(rows.len(), store.resources.items.len());
    for (row, resource) in rows.iter().zip(&store.resources.items) {
        assert_eq!(row.key, resource.key);
        assert_eq!(row.editor, resource.editor);
        let expected = resource
            .translation
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(&resource.source);
        assert_eq!(row.secondary_text, expected);
    }
}

#[test]
fn grid_columns_cover_name_and_editor() {
    let fields: Vec<&str> = RESOURCE_COLUMNS.iter().map(|c| c.field_name).collect();
    assert_eq!(fields, vec!["key", "editor"]);
    assert!(RESOURCE_COLUMNS.iter().all(|c| c.min_width <= c.max_width));
}

#[test]
fn selection_follows_activation_and_resets_with_new_list() {
    let first = vec![
        Resource::new("one", "Ada Lovelace", "One"),
        Resource::new("two", "Alan Turing", "Two"),
    ];
    let state = ResourceListState::for_resources(&first);
    assert!(state.is_selected("one"));

    let state = reduce(&state, ResourceListAction::Select("two".into()), &first);
    assert_eq!(
        state.selected(&first).map(|resource| resource.source.as_str()),
        Some("Two")
    );

    let replaced = vec![Resource::new("three", "Grace Hopper", "Three")];
    let state = reduce(&state, ResourceListAction::Reset, &replaced);
    assert!(state.is_selected("three"));

    let state = reduce(&state, ResourceListAction::Reset, &[]);
    assert_eq!(state, ResourceListState::default());
}

#[test]
fn signing_out_empties_the_grid() {
    let mut store = AppStore::default();
    set_resources(&mut store, demo_resources());
    sign_out(&mut store);
    assert!(resource_rows(&store.resources.items).is_empty());
}
