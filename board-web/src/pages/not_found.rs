use crate::routes::BoardRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// Rendered for any path outside the route table.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="p-4 space-y-6 text-center">
            <h1 class="text-2xl font-bold">{ "Page not found" }</h1>
            <p>{ "The page you asked for does not exist." }</p>
            <Link<BoardRoute> to={BoardRoute::PostList} classes="btn btn-primary">
                { "Back to posts" }
            </Link<BoardRoute>>
        </div>
    }
}
