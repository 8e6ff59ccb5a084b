use feedbox_client::api::User;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct AvatarProps {
    pub user: User,
}

#[function_component(Avatar)]
pub fn avatar(p: &AvatarProps) -> Html {
    match &p.user.avatar_url {
        Some(url) => html! {
            <img class="avatar rounded-circle" src={ url.clone() } alt={ p.user.name.clone() } />
        },
        None => {
            let initial = p
                .user
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default();
            html! {
                <div class="avatar avatar-initial rounded-circle" aria-hidden="true">
                    { initial }
                </div>
            }
        }
    }
}
