use feedbox_client::SaveFailed;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct FormErrorProps {
    #[prop_or_default]
    pub error: Option<SaveFailed>,
}

#[function_component(FormError)]
pub fn form_error(p: &FormErrorProps) -> Html {
    match &p.error {
        None => html! {},
        Some(err) => html! {
            <div class="alert alert-danger py-2" role="alert">{ err.to_string() }</div>
        },
    }
}
