use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::config::UiSettings;
use crate::core::error::{ConfigError, SignInError};
use crate::core::signin::SignInSuccess;
use crate::core::store::{AppStore, SignedInUser, StoreAction};
use crate::features::resources::view::ResourceList;
use crate::features::session::view::LoginButton;
use crate::models::{Resource, Toast, ToastKind, demo_resources};
use crate::services::api::ApiClient;
use gloo::console;
use preferences::{api_base_url, clear_session, load_session, load_settings, persist_session};
use std::rc::Rc;
use yew::prelude::*;

mod preferences;

#[function_component(GlossaApp)]
pub(crate) fn glossa_app() -> Html {
    let settings = use_memo(|_| load_settings(), ());
    let store = use_reducer_eq(AppStore::default);
    let dispatch = store.dispatcher();
    let client = use_memo(|_| ApiClient::new(api_base_url()), ());
    let toasts = use_state(Vec::<Toast>::new);
    let toast_id = use_state(|| 0u64);
    let selected_key = use_state(|| None as Option<String>);

    let user_value = store.session.user.clone();
    let in_flight = store.session.in_flight;
    let loading = store.resources.loading;
    let load_error = store.resources.error.clone();
    // Keeps the list identity stable while the items are unchanged.
    let resources_value: Rc<Vec<Resource>> = (*use_memo(
        |items: &Vec<Resource>| Rc::new(items.clone()),
        store.resources.items.clone(),
    ))
    .clone();
    let demo = (*settings).as_ref().is_ok_and(|settings| settings.demo);

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(user) = load_session() {
                    dispatch.dispatch(StoreAction::RestoreSession(user));
                }
                || ()
            },
            (),
        );
    }
    {
        let dispatch = dispatch.clone();
        let client = client.clone();
        use_effect_with_deps(
            move |signed_in: &bool| {
                if *signed_in {
                    load_resources(&dispatch, &client, demo);
                }
                || ()
            },
            user_value.is_some(),
        );
    }
    {
        let selected_key = selected_key.clone();
        use_effect_with_deps(
            move |_| {
                selected_key.set(None);
                || ()
            },
            resources_value.clone(),
        );
    }

    let on_request = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.dispatch(StoreAction::BeginSignIn))
    };
    let on_success = {
        let dispatch = dispatch.clone();
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        Callback::from(move |success: SignInSuccess| {
            let signed_in = SignedInUser::from(success.clone());
            persist_session(&signed_in);
            dispatch.dispatch(StoreAction::CompleteSignIn(success));
            push_toast(
                &toasts,
                &toast_id,
                ToastKind::Success,
                format!("Signed in as {}", signed_in.user_name),
            );
        })
    };
    let on_failure = {
        let dispatch = dispatch.clone();
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        Callback::from(move |error: SignInError| {
            console::error!("sign-in failed", error.to_string());
            // Closing the popup is a user choice, not worth a toast.
            if !error.is_dismissal() {
                push_toast(
                    &toasts,
                    &toast_id,
                    ToastKind::Error,
                    format!("Sign-in failed: {error}"),
                );
            }
            dispatch.dispatch(StoreAction::FailSignIn(error));
        })
    };
    let on_sign_out = {
        let dispatch = dispatch.clone();
        let selected_key = selected_key.clone();
        Callback::from(move |()| {
            clear_session();
            selected_key.set(None);
            dispatch.dispatch(StoreAction::SignOut);
        })
    };
    let on_active_item_changed = {
        let selected_key = selected_key.clone();
        Callback::from(move |resource: Resource| selected_key.set(Some(resource.key)))
    };
    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| {
            toasts.set(
                (*toasts)
                    .iter()
                    .cloned()
                    .filter(|toast| toast.id != id)
                    .collect(),
            );
        })
    };

    let settings = match &*settings {
        Ok(settings) => settings.clone(),
        Err(err) => return config_error_panel(err),
    };

    // Mirrors the list, which activates its first row until told otherwise.
    let selected = selected_key
        .as_deref()
        .and_then(|key| resources_value.iter().find(|resource| resource.key == key))
        .or_else(|| resources_value.first())
        .cloned();

    html! {
        <>
            <AppShell
                user={user_value.clone()}
                sign_in={sign_in_button(&settings, on_request, on_success, on_failure)}
                on_sign_out={on_sign_out}
                busy={in_flight > 0 || loading}
            >
                {if user_value.is_some() {
                    html! {
                        <div class="resources-layout">
                            {if let Some(message) = load_error {
                                html! { <div class="callout error" role="alert">{message}</div> }
                            } else {
                                html! {}
                            }}
                            <ResourceList
                                resources={resources_value.clone()}
                                on_active_item_changed={Some(on_active_item_changed)}
                            />
                            {resource_detail(selected.as_ref())}
                        </div>
                    }
                } else {
                    html! {
                        <div class="empty-state">
                            <h2>{"Sign in to browse resources"}</h2>
                            <p class="muted">{"Your GitHub account is used to attribute edits."}</p>
                        </div>
                    }
                }}
            </AppShell>
            <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
        </>
    }
}

fn load_resources(
    dispatch: &UseReducerDispatcher<AppStore>,
    client: &Rc<ApiClient>,
    demo: bool,
) {
    if demo {
        dispatch.dispatch(StoreAction::SetResources(demo_resources()));
        return;
    }
    dispatch.dispatch(StoreAction::StartLoading);
    let dispatch = dispatch.clone();
    let client = Rc::clone(client);
    yew::platform::spawn_local(async move {
        match client.fetch_resources().await {
            Ok(items) => dispatch.dispatch(StoreAction::SetResources(items)),
            Err(err) => {
                console::error!("resource fetch failed", err.to_string());
                dispatch.dispatch(StoreAction::SetResourcesError(err.to_string()));
            }
        }
    });
}

fn sign_in_button(
    settings: &UiSettings,
    on_request: Callback<()>,
    on_success: Callback<SignInSuccess>,
    on_failure: Callback<SignInError>,
) -> Html {
    html! {
        <LoginButton
            strategy={settings.strategy()}
            {on_request}
            {on_success}
            {on_failure}
        />
    }
}

fn resource_detail(selected: Option<&Resource>) -> Html {
    let Some(resource) = selected else {
        return html! {
            <aside class="resource-detail muted">{"Select a resource to see its text."}</aside>
        };
    };
    html! {
        <aside class="resource-detail">
            <h3>{resource.key.clone()}</h3>
            <dl>
                <dt>{"Source"}</dt>
                <dd>{resource.source.clone()}</dd>
                <dt>{"Translation"}</dt>
                <dd>{resource.translation.clone().unwrap_or_else(|| "Not translated yet".to_string())}</dd>
                <dt>{"Modified by"}</dt>
                <dd>{resource.editor.clone()}</dd>
            </dl>
        </aside>
    }
}

fn config_error_panel(err: &ConfigError) -> Html {
    console::error!("invalid UI configuration", err.to_string());
    html! {
        <div class="config-error" role="alert">
            <h2>{"Glossa is not configured"}</h2>
            <p>{err.to_string()}</p>
            <p class="muted">{format!("Set {} at build time, or enable demo mode.", err.key())}</p>
        </div>
    }
}

fn push_toast(
    toasts: &UseStateHandle<Vec<Toast>>,
    next_id: &UseStateHandle<u64>,
    kind: ToastKind,
    message: String,
) {
    let id = **next_id + 1;
    next_id.set(id);
    let mut list = (**toasts).clone();
    list.push(Toast { id, message, kind });
    if list.len() > 4 {
        let drain = list.len() - 4;
        list.drain(0..drain);
    }
    toasts.set(list);
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<GlossaApp>::with_root(root).render();
    } else {
        yew::Renderer::<GlossaApp>::new().render();
    }
}
