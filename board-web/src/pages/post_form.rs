use crate::api::BoardClient;
use crate::components::ErrorAlert;
use crate::routes::BoardRoute;
use shared::models::PostRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

#[derive(Properties, PartialEq)]
pub struct PostFormPageProps {
    /// Post being edited; `None` writes a new post.
    #[prop_or_default]
    pub id: Option<i64>,
}

#[function_component(PostFormPage)]
pub fn post_form_page(props: &PostFormPageProps) -> Html {
    let post_id = props.id;
    let form = use_state(PostRequest::default);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let navigator = use_navigator();

    {
        let form = form.clone();
        let error = error.clone();
        use_effect_with(post_id, move |post_id| {
            if let Some(post_id) = *post_id {
                spawn_local(async move {
                    match BoardClient::shared().get_post(post_id).await {
                        Ok(post) => form.set(PostRequest {
                            title: post.title,
                            content: post.content,
                        }),
                        Err(err) => error.set(Some(err.user_message())),
                    }
                });
            }
            || ()
        });
    }

    let on_title_change = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(PostRequest {
                    title: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_content_change = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                form.set(PostRequest {
                    content: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let saving = saving.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = (*form).clone();
            if !request.is_complete() {
                error.set(Some("Title and content are required".to_string()));
                return;
            }
            saving.set(true);
            error.set(None);
            let error = error.clone();
            let saving = saving.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = BoardClient::shared();
                let saved = match post_id {
                    Some(id) => client.update_post(id, &request).await,
                    None => client.create_post(&request).await,
                };
                match saved {
                    Ok(post) => {
                        if let Some(nav) = navigator {
                            nav.push(&BoardRoute::post_detail(post.id));
                        }
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
                saving.set(false);
            });
        })
    };

    let heading = if post_id.is_some() { "Edit post" } else { "New post" };
    let is_busy = *saving;

    html! {
        <form class="space-y-4" onsubmit={onsubmit}>
            <h1 class="text-2xl font-bold">{heading}</h1>
            <ErrorAlert message={(*error).clone()} />
            <input
                class="input input-bordered w-full"
                type="text"
                placeholder="Title"
                value={form.title.clone()}
                oninput={on_title_change}
            />
            <textarea
                class="textarea textarea-bordered w-full h-64"
                placeholder="Write something"
                value={form.content.clone()}
                oninput={on_content_change}
            />
            <button class="btn btn-primary" type="submit" disabled={is_busy}>
                {if is_busy { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}
