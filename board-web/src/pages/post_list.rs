use crate::api::BoardClient;
use crate::components::{ErrorAlert, loading::Loading};
use crate::routes::BoardRoute;
use shared::models::Post;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(PostListPage)]
pub fn post_list_page() -> Html {
    let posts = use_state(|| None::<Vec<Post>>);
    let error = use_state(|| None::<String>);

    {
        let posts = posts.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match BoardClient::shared().list_posts().await {
                    Ok(list) => posts.set(Some(list)),
                    Err(err) => {
                        tracing::warn!(error = %err, "could not load posts");
                        error.set(Some(err.user_message()));
                    }
                }
            });
            || ()
        });
    }

    let body = match (*posts).as_ref() {
        None if error.is_none() => html! { <Loading /> },
        None => html! {},
        Some(list) if list.is_empty() => html! {
            <p class="opacity-70">{"No posts yet. Write the first one!"}</p>
        },
        Some(list) => html! {
            <ul class="space-y-2">
                { for list.iter().map(render_post_row) }
            </ul>
        },
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{"Posts"}</h1>
            <ErrorAlert message={(*error).clone()} />
            {body}
        </div>
    }
}

fn render_post_row(post: &Post) -> Html {
    html! {
        <li key={post.id.to_string()} class="card bg-base-200">
            <div class="card-body p-4">
                <Link<BoardRoute> to={BoardRoute::post_detail(post.id)} classes="card-title">
                    {post.title.clone()}
                </Link<BoardRoute>>
                <p class="text-sm opacity-70">
                    {format!(
                        "{} · {} · {} comments",
                        post.author_email,
                        post.created_at.format("%Y-%m-%d %H:%M"),
                        post.comments.len()
                    )}
                </p>
            </div>
        </li>
    }
}
