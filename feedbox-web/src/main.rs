use std::rc::Rc;

use anyhow::{anyhow, Context};
use feedbox_client::api::PageData;

mod api;
mod ui;
mod util;

const PAGE_DATA_ELEMENT_ID: &str = "page-data";

lazy_static::lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::new();
}

/// Reads the state the server embedded in the page as json
fn load_page_data() -> anyhow::Result<PageData> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document to read page data from"))?;
    let json = document
        .get_element_by_id(PAGE_DATA_ELEMENT_ID)
        .ok_or_else(|| anyhow!("page has no #{} element", PAGE_DATA_ELEMENT_ID))?
        .text_content()
        .unwrap_or_default();
    let page: PageData = serde_json::from_str(&json).context("parsing page data")?;
    if let Err(err) = page.validate() {
        // still render, ill-formed comments are displayed as best as possible
        tracing::warn!(%err, "page data failed validation");
    }
    Ok(page)
}

fn main() {
    tracing_wasm::set_as_global_default();
    match load_page_data() {
        Ok(page) => {
            tracing::info!(
                idea = %page.idea.number,
                num_comments = page.comments.len(),
                "loaded page data"
            );
            yew::Renderer::<ui::App>::with_props(ui::AppProps {
                page: Rc::new(page),
            })
            .render();
        }
        Err(err) => tracing::error!(?err, "failed to load page data"),
    }
}
