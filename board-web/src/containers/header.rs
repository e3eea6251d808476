use crate::{
    routes::BoardRoute,
    session::{Session, use_session_store},
};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[function_component(Header)]
pub fn header() -> Html {
    let email = use_selector(|session: &Session| {
        session.user.as_ref().map(|user| user.email.clone())
    });
    let store = use_session_store();

    let on_logout = Callback::from(move |_: MouseEvent| {
        if let Some(store) = &store {
            store.logout();
        }
    });

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<BoardRoute> to={BoardRoute::PostList} classes="btn btn-ghost text-lg">
                {"Board"}
            </Link<BoardRoute>>
            <div class="flex items-center gap-4">
                <Link<BoardRoute> to={BoardRoute::PostCreate} classes="btn btn-sm btn-primary">
                    {"New post"}
                </Link<BoardRoute>>
                if let Some(email) = (*email).clone() {
                    <span class="text-sm opacity-70">{email}</span>
                }
                <button class="btn btn-sm btn-ghost" onclick={on_logout}>{"Sign out"}</button>
            </div>
        </nav>
    }
}
