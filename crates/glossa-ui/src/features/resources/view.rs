//! Resource grid view.

use crate::components::persona::Persona;
use crate::features::resources::logic::{RESOURCE_COLUMNS, ResourceRow, resource_rows};
use crate::features::resources::state::{
    ResourceListAction, ResourceListState, activated, reduce,
};
use crate::models::Resource;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ResourceListProps {
    pub resources: Rc<Vec<Resource>>,
    #[prop_or_default]
    pub on_active_item_changed: Option<Callback<Resource>>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ResourceList)]
pub(crate) fn resource_list(props: &ResourceListProps) -> Html {
    let state = {
        let resources = props.resources.clone();
        use_state(move || ResourceListState::for_resources(&resources))
    };
    // Focus and click land in the same frame, before `state` re-renders.
    let latest = {
        let initial = (*state).clone();
        use_mut_ref(move || initial)
    };

    {
        let state = state.clone();
        let latest = latest.clone();
        use_effect_with_deps(
            move |resources: &Rc<Vec<Resource>>| {
                let next = reduce(&latest.borrow(), ResourceListAction::Reset, resources);
                *latest.borrow_mut() = next.clone();
                state.set(next);
                || ()
            },
            props.resources.clone(),
        );
    }

    let on_activate = {
        let state = state.clone();
        let resources = props.resources.clone();
        let notify = props.on_active_item_changed.clone();
        Callback::from(move |key: String| {
            let previous = latest.borrow().clone();
            let next = reduce(&previous, ResourceListAction::Select(key), &resources);
            if let (Some(notify), Some(resource)) =
                (&notify, activated(&previous, &next, &resources))
            {
                notify.emit(resource.clone());
            }
            *latest.borrow_mut() = next.clone();
            state.set(next);
        })
    };

    let rows = resource_rows(&props.resources);
    html! {
        <div class={classes!("resource-list", props.class.clone())}>
            <div class="resource-list__scroll" role="grid" aria-rowcount={rows.len().to_string()}>
                <div class="resource-list__header" role="row">
                    {for RESOURCE_COLUMNS.iter().map(|column| html! {
                        <div
                            role="columnheader"
                            class={classes!("resource-list__cell", format!("col-{}", column.key), column.resizable.then_some("resizable"))}
                            style={format!("min-width:{}px; max-width:{}px;", column.min_width, column.max_width)}
                        >
                            {column.name}
                        </div>
                    })}
                </div>
                {for rows.iter().map(|row| render_row(row, state.is_selected(&row.key), &on_activate))}
            </div>
        </div>
    }
}

fn render_row(row: &ResourceRow, selected: bool, on_activate: &Callback<String>) -> Html {
    let activate = {
        let on_activate = on_activate.clone();
        let key = row.key.clone();
        move || on_activate.emit(key.clone())
    };
    let onclick = {
        let activate = activate.clone();
        Callback::from(move |_: MouseEvent| activate())
    };
    let onfocus = Callback::from(move |_: FocusEvent| activate());

    html! {
        <div
            key={row.key.clone()}
            role="row"
            tabindex="0"
            class={classes!("resource-list__row", selected.then_some("is-selected"))}
            aria-selected={selected.to_string()}
            {onclick}
            {onfocus}
        >
            <div role="gridcell" class="resource-list__cell col-name">
                <Persona
                    text={row.key.clone()}
                    initials={row.initials.clone()}
                    secondary_text={Some(AttrValue::from(row.secondary_text.clone()))}
                />
            </div>
            <div role="gridcell" class="resource-list__cell col-editor">{row.editor.clone()}</div>
        </div>
    }
}
