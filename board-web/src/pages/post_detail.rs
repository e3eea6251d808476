use crate::api::BoardClient;
use crate::components::{ErrorAlert, loading::Loading};
use crate::routes::BoardRoute;
use crate::session::Session;
use shared::models::{Comment, CommentRequest, Post};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct PostDetailPageProps {
    pub id: i64,
}

/// Bumped after every mutation to refetch the post.
#[derive(Debug, Default, PartialEq, Eq)]
struct Revision(u32);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, (): ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

#[function_component(PostDetailPage)]
pub fn post_detail_page(props: &PostDetailPageProps) -> Html {
    let post_id = props.id;
    let post = use_state(|| None::<Post>);
    let error = use_state(|| None::<String>);
    let draft = use_state(String::new);
    let revision = use_reducer(Revision::default);
    let navigator = use_navigator();
    let viewer = use_selector(|session: &Session| {
        session.user.as_ref().map(|user| user.email.clone())
    });

    {
        let post = post.clone();
        let error = error.clone();
        use_effect_with((post_id, revision.0), move |_| {
            spawn_local(async move {
                match BoardClient::shared().get_post(post_id).await {
                    Ok(loaded) => post.set(Some(loaded)),
                    Err(err) => {
                        tracing::warn!(post_id, error = %err, "could not load post");
                        error.set(Some(err.user_message()));
                    }
                }
            });
            || ()
        });
    }

    let on_draft_change = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                draft.set(input.value());
            }
        })
    };

    let on_comment = {
        let draft = draft.clone();
        let error = error.clone();
        let revision = revision.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = CommentRequest {
                content: (*draft).trim().to_string(),
            };
            if request.content.is_empty() {
                return;
            }
            let draft = draft.clone();
            let error = error.clone();
            let revision = revision.clone();
            spawn_local(async move {
                match BoardClient::shared().create_comment(post_id, &request).await {
                    Ok(_) => {
                        draft.set(String::new());
                        revision.dispatch(());
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        })
    };

    let on_delete_post = {
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let error = error.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match BoardClient::shared().delete_post(post_id).await {
                    Ok(()) => {
                        if let Some(nav) = navigator {
                            nav.push(&BoardRoute::PostList);
                        }
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        })
    };

    let on_delete_comment = {
        let error = error.clone();
        let revision = revision.clone();
        Callback::from(move |comment_id: i64| {
            let error = error.clone();
            let revision = revision.clone();
            spawn_local(async move {
                match BoardClient::shared().delete_comment(comment_id).await {
                    Ok(()) => revision.dispatch(()),
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        })
    };

    let Some(current) = (*post).clone() else {
        return html! {
            <div class="space-y-4">
                <ErrorAlert message={(*error).clone()} />
                if error.is_none() {
                    <Loading />
                }
            </div>
        };
    };

    let viewer = (*viewer).clone();
    let is_author = viewer
        .as_deref()
        .is_some_and(|email| current.is_authored_by(email));

    html! {
        <article class="space-y-6">
            <ErrorAlert message={(*error).clone()} />
            <header class="space-y-1">
                <h1 class="text-3xl font-bold">{current.title.clone()}</h1>
                <p class="text-sm opacity-70">
                    {format!(
                        "{} · {}",
                        current.author_email,
                        current.updated_at.format("%Y-%m-%d %H:%M")
                    )}
                </p>
            </header>
            <p class="whitespace-pre-wrap">{current.content.clone()}</p>
            if is_author {
                <div class="flex gap-2">
                    <Link<BoardRoute> to={BoardRoute::post_edit(post_id)} classes="btn btn-sm">
                        {"Edit"}
                    </Link<BoardRoute>>
                    <button class="btn btn-sm btn-error" onclick={on_delete_post}>{"Delete"}</button>
                </div>
            }
            <section class="space-y-3">
                <h2 class="text-xl font-semibold">
                    {format!("Comments ({})", current.comments.len())}
                </h2>
                <ul class="space-y-2">
                    { for current.comments.iter().map(|comment| {
                        render_comment(comment, viewer.as_deref(), on_delete_comment.clone())
                    }) }
                </ul>
                <form class="space-y-2" onsubmit={on_comment}>
                    <textarea
                        class="textarea textarea-bordered w-full"
                        placeholder="Write a comment"
                        value={(*draft).clone()}
                        oninput={on_draft_change}
                    />
                    <button class="btn btn-primary btn-sm" type="submit" disabled={draft.trim().is_empty()}>
                        {"Comment"}
                    </button>
                </form>
            </section>
        </article>
    }
}

fn render_comment(comment: &Comment, viewer: Option<&str>, on_delete: Callback<i64>) -> Html {
    let comment_id = comment.id;
    let can_delete = viewer.is_some_and(|email| email == comment.author_email);
    html! {
        <li key={comment_id.to_string()} class="bg-base-200 rounded p-3">
            <p class="whitespace-pre-wrap">{comment.content.clone()}</p>
            <div class="flex justify-between text-xs opacity-70">
                <span>
                    {format!(
                        "{} · {}",
                        comment.author_email,
                        comment.created_at.format("%Y-%m-%d %H:%M")
                    )}
                </span>
                if can_delete {
                    <button class="link" onclick={on_delete.reform(move |_: MouseEvent| comment_id)}>
                        {"Delete"}
                    </button>
                }
            </div>
        </li>
    }
}
