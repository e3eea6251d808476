use crate::containers::header::Header;
use yew::{Children, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Chrome shared by every signed-in page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
    <>
        <Header />
        <div class="min-h-screen bg-base-100">
            <main class={classes!("container", "mx-auto", "p-4", "max-w-3xl")}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <p>{"Board · Powered by Rust and Yew"}</p>
            </footer>
        </div>
    </>
    }
}
