use crate::api::BoardClient;
use crate::components::loading::Loading;
use crate::config::FrontendConfig;
use crate::routes::{BoardRoute, switch};
use crate::session::{Session, restore};
use crate::storage::LocalTokenStorage;
use yew::{Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

/// Root component. Routes are rendered only once the persisted token has been
/// read, so the guard never judges a reload as anonymous.
#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<Session>();
    let restored = use_state(|| false);

    {
        let restored = restored.clone();
        use_effect_with((), move |_| {
            let storage = LocalTokenStorage::from_config(&FrontendConfig::default());
            restore(&dispatch, &BoardClient::shared(), &storage);
            restored.set(true);
            || ()
        });
    }

    if !*restored {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<BoardRoute> render={switch} />
        </BrowserRouter>
    }
}
