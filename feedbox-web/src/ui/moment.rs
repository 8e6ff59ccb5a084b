use chrono::Utc;
use feedbox_client::{api::Time, view::format_date};
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct MomentProps {
    pub date: Time,
}

/// Relative date, with the full date on hover
#[function_component(Moment)]
pub fn moment(p: &MomentProps) -> Html {
    html! {
        <time
            class="moment text-muted"
            datetime={ p.date.to_rfc3339() }
            title={ format_date(p.date, &util::local_tz()) }
        >
            { util::relative_time(p.date, Utc::now()) }
        </time>
    }
}
