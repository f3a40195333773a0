use yew::prelude::*;

/// Avatar coin plus a primary and optional secondary line.
#[derive(Properties, PartialEq)]
pub(crate) struct PersonaProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub initials: AttrValue,
    #[prop_or_default]
    pub secondary_text: Option<AttrValue>,
    #[prop_or_default]
    pub image_url: Option<AttrValue>,
    #[prop_or(40)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Persona)]
pub(crate) fn persona(props: &PersonaProps) -> Html {
    let coin_style = format!("width:{0}px;height:{0}px;", props.size);
    html! {
        <div class={classes!("persona", props.class.clone())}>
            <div class="persona-coin persona-coin--violet" style={coin_style} aria-hidden="true">
                {if let Some(src) = &props.image_url {
                    html! { <img src={src.clone()} alt="" /> }
                } else if props.initials.is_empty() {
                    html! { <span class="persona-initials placeholder"></span> }
                } else {
                    html! { <span class="persona-initials">{props.initials.clone()}</span> }
                }}
            </div>
            <div class="persona-details">
                <div class="persona-primary">{props.text.clone()}</div>
                {if let Some(secondary) = &props.secondary_text {
                    html! { <div class="persona-secondary muted">{secondary.clone()}</div> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
