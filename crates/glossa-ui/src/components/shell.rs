use crate::components::persona::Persona;
use crate::core::store::SignedInUser;
use crate::features::resources::logic::initials;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub user: Option<SignedInUser>,
    /// Rendered in the header when nobody is signed in.
    pub sign_in: Html,
    pub on_sign_out: Callback<()>,
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let sign_out = {
        let on_sign_out = props.on_sign_out.clone();
        Callback::from(move |_: MouseEvent| on_sign_out.emit(()))
    };

    html! {
        <div class="app-shell" aria-busy={props.busy.to_string()}>
            <header class="topbar">
                <div class="brand">
                    <strong>{"Glossa"}</strong>
                    <span class="muted">{"Resource editor"}</span>
                </div>
                <div class="session">
                    {if let Some(user) = &props.user {
                        html! {
                            <>
                                <Persona
                                    text={user.user_name.clone()}
                                    initials={initials(&user.user_name)}
                                    image_url={user.icon_url.clone().map(AttrValue::from)}
                                    size={32}
                                />
                                <button class="ghost" onclick={sign_out}>{"Sign out"}</button>
                            </>
                        }
                    } else {
                        props.sign_in.clone()
                    }}
                </div>
            </header>
            <main class="content">
                {for props.children.iter()}
            </main>
        </div>
    }
}
