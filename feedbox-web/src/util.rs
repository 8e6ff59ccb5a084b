use std::str::FromStr;

use feedbox_client::api::Time;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        let tz = get_timezone();
        chrono_tz::Tz::from_str(&tz).unwrap_or_else(|_| {
            tracing::warn!(%tz, "host js timezone is not in chrono-tz database, using UTC");
            chrono_tz::UTC
        })
    };
}

pub fn local_tz() -> chrono_tz::Tz {
    *LOCAL_TZ
}

/// Describes how long ago `date` was, eg. "3 hours ago"
pub fn relative_time(date: Time, now: Time) -> String {
    let elapsed = now - date;
    let (count, unit) = match elapsed.num_seconds() {
        s if s < 45 => return String::from("a few seconds ago"),
        s if s < 60 * 60 => (s / 60, "minute"),
        s if s < 60 * 60 * 24 => (s / (60 * 60), "hour"),
        s if s < 60 * 60 * 24 * 30 => (s / (60 * 60 * 24), "day"),
        s if s < 60 * 60 * 24 * 365 => (s / (60 * 60 * 24 * 30), "month"),
        s => (s / (60 * 60 * 24 * 365), "year"),
    };
    match count {
        0 | 1 if unit == "hour" => String::from("an hour ago"),
        0 | 1 => format!("a {unit} ago"),
        n => format!("{n} {unit}s ago"),
    }
}
