use crate::pages::{LoginPage, NotFoundPage, PostDetailPage, PostFormPage, PostListPage};
use crate::{containers::layout::Layout, session::Session};
use std::iter;
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store_value;

/// The board routes.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum BoardRoute {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/posts")]
    PostList,
    #[at("/posts/new")]
    PostCreate,
    /// `id` is any path segment; pages parse it as a post id.
    #[at("/posts/:id")]
    PostDetail { id: String },
    #[at("/posts/:id/edit")]
    PostEdit { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Per-route metadata consulted by the navigation guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// `None` behaves like `Some(false)`.
    pub requires_auth: Option<bool>,
}

impl RouteMeta {
    const UNSET: Self = Self {
        requires_auth: None,
    };
    const PUBLIC: Self = Self {
        requires_auth: Some(false),
    };
    const PROTECTED: Self = Self {
        requires_auth: Some(true),
    };

    pub fn requires_auth(self) -> bool {
        self.requires_auth.unwrap_or(false)
    }
}

/// Stable identifier of a route record, independent of path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Root,
    Login,
    PostList,
    PostCreate,
    PostDetail,
    PostEdit,
    NotFound,
}

/// One entry of the route table.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteRecord {
    pub name: RouteName,
    pub path: &'static str,
    /// Record this one is nested under; its metadata applies here too.
    pub parent: Option<RouteName>,
    pub meta: RouteMeta,
    /// Static redirect resolved before the guard runs.
    pub redirect: Option<BoardRoute>,
}

static ROOT: RouteRecord = RouteRecord {
    name: RouteName::Root,
    path: "/",
    parent: None,
    meta: RouteMeta::UNSET,
    redirect: Some(BoardRoute::PostList),
};

static LOGIN: RouteRecord = RouteRecord {
    name: RouteName::Login,
    path: "/login",
    parent: None,
    meta: RouteMeta::PUBLIC,
    redirect: None,
};

static POST_LIST: RouteRecord = RouteRecord {
    name: RouteName::PostList,
    path: "/posts",
    parent: None,
    meta: RouteMeta::PROTECTED,
    redirect: None,
};

static POST_CREATE: RouteRecord = RouteRecord {
    name: RouteName::PostCreate,
    path: "/posts/new",
    parent: Some(RouteName::PostList),
    meta: RouteMeta::PROTECTED,
    redirect: None,
};

static POST_DETAIL: RouteRecord = RouteRecord {
    name: RouteName::PostDetail,
    path: "/posts/:id",
    parent: Some(RouteName::PostList),
    meta: RouteMeta::PROTECTED,
    redirect: None,
};

static POST_EDIT: RouteRecord = RouteRecord {
    name: RouteName::PostEdit,
    path: "/posts/:id/edit",
    parent: Some(RouteName::PostList),
    meta: RouteMeta::PROTECTED,
    redirect: None,
};

static NOT_FOUND: RouteRecord = RouteRecord {
    name: RouteName::NotFound,
    path: "/404",
    parent: None,
    meta: RouteMeta::UNSET,
    redirect: None,
};

/// The whole route table, in declaration order.
pub static ROUTES: [&RouteRecord; 7] = [
    &ROOT,
    &LOGIN,
    &POST_LIST,
    &POST_CREATE,
    &POST_DETAIL,
    &POST_EDIT,
    &NOT_FOUND,
];

impl RouteName {
    pub fn record(self) -> &'static RouteRecord {
        match self {
            Self::Root => &ROOT,
            Self::Login => &LOGIN,
            Self::PostList => &POST_LIST,
            Self::PostCreate => &POST_CREATE,
            Self::PostDetail => &POST_DETAIL,
            Self::PostEdit => &POST_EDIT,
            Self::NotFound => &NOT_FOUND,
        }
    }
}

impl BoardRoute {
    pub fn name(&self) -> RouteName {
        match self {
            Self::Root => RouteName::Root,
            Self::Login => RouteName::Login,
            Self::PostList => RouteName::PostList,
            Self::PostCreate => RouteName::PostCreate,
            Self::PostDetail { .. } => RouteName::PostDetail,
            Self::PostEdit { .. } => RouteName::PostEdit,
            Self::NotFound => RouteName::NotFound,
        }
    }

    pub fn record(&self) -> &'static RouteRecord {
        self.name().record()
    }

    pub fn post_detail(id: i64) -> Self {
        Self::PostDetail { id: id.to_string() }
    }

    pub fn post_edit(id: i64) -> Self {
        Self::PostEdit { id: id.to_string() }
    }

    /// The numeric post id in the path, if this route has one that parses.
    pub fn post_id(&self) -> Option<i64> {
        match self {
            Self::PostDetail { id } | Self::PostEdit { id } => id.parse().ok(),
            _ => None,
        }
    }

    /// The matched records, outermost ancestor first.
    pub fn matched(&self) -> Vec<&'static RouteRecord> {
        let mut chain: Vec<_> = iter::successors(Some(self.record()), |record| {
            record.parent.map(RouteName::record)
        })
        .collect();
        chain.reverse();
        chain
    }

    /// Whether this route or any matched ancestor is protected.
    pub fn requires_auth(&self) -> bool {
        self.matched()
            .iter()
            .any(|record| record.meta.requires_auth())
    }
}

/// Outcome of the navigation guard for a single transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    Redirect(BoardRoute),
}

/// Decide whether `target` may be entered with the current session.
///
/// Protected routes send anonymous visitors to `/login`; `/login` sends
/// signed-in users to `/posts`. Everything else passes.
pub fn guard(target: &BoardRoute, authenticated: bool) -> NavigationDecision {
    if target.requires_auth() && !authenticated {
        NavigationDecision::Redirect(BoardRoute::Login)
    } else if *target == BoardRoute::Login && authenticated {
        NavigationDecision::Redirect(BoardRoute::PostList)
    } else {
        NavigationDecision::Allow
    }
}

/// Apply the route table's static redirect, then the guard.
pub fn resolve(target: &BoardRoute, authenticated: bool) -> NavigationDecision {
    match &target.record().redirect {
        Some(redirected) => match guard(redirected, authenticated) {
            NavigationDecision::Allow => NavigationDecision::Redirect(redirected.clone()),
            decision => decision,
        },
        None => guard(target, authenticated),
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteViewProps {
    pub route: BoardRoute,
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let session = use_store_value::<Session>();
    let authenticated = session.is_authenticated();

    let decision = resolve(&props.route, authenticated);
    tracing::debug!(
        route = %props.route.to_path(),
        authenticated,
        decision = ?decision,
        "navigation guard"
    );

    match decision {
        NavigationDecision::Redirect(to) => html! { <Redirect<BoardRoute> {to} /> },
        NavigationDecision::Allow => render_route(&props.route),
    }
}

fn render_route(route: &BoardRoute) -> Html {
    match (route, route.post_id()) {
        (BoardRoute::Login, _) => html! { <LoginPage /> },
        (BoardRoute::PostList, _) => html! {
            <Layout><PostListPage /></Layout>
        },
        (BoardRoute::PostCreate, _) => html! {
            <Layout><PostFormPage /></Layout>
        },
        (BoardRoute::PostDetail { .. }, Some(id)) => html! {
            <Layout><PostDetailPage {id} /></Layout>
        },
        (BoardRoute::PostEdit { .. }, Some(id)) => html! {
            <Layout><PostFormPage id={Some(id)} /></Layout>
        },
        // Root always redirects; reaching it here means the table changed.
        (
            BoardRoute::Root
            | BoardRoute::NotFound
            | BoardRoute::PostDetail { .. }
            | BoardRoute::PostEdit { .. },
            _,
        ) => html! {
            <Layout><NotFoundPage /></Layout>
        },
    }
}

/// Switch function for the board routes.
pub fn switch(route: BoardRoute) -> Html {
    html! { <RouteView {route} /> }
}
