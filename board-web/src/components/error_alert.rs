use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    #[prop_or_default]
    pub message: Option<String>,
}

/// Renders nothing when there is no message.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="alert alert-error">
                <span>{message.clone()}</span>
            </div>
        },
        None => html! {},
    }
}
