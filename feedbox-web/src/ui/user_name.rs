use feedbox_client::api::User;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct UserNameProps {
    pub user: User,
}

#[function_component(UserName)]
pub fn user_name(p: &UserNameProps) -> Html {
    html! {
        <strong class="user-name">{ &p.user.name }</strong>
    }
}
