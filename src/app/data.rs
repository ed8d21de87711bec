use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

use crate::content::{PortfolioPayload, VideoBatch};

/// Page content with bundled content filling every gap. The store can fail;
/// this can't, short of the request itself failing.
#[server(input = GetUrl)]
pub async fn get_portfolio() -> Result<PortfolioPayload, ServerFnError> {
    use crate::store::{load_portfolio, AppState};

    let state = use_context::<AppState>().unwrap_or_default();
    Ok(load_portfolio(state.store.as_ref()).await)
}

#[server(input = GetUrl)]
pub async fn get_video_batch(offset: usize) -> Result<VideoBatch, ServerFnError> {
    use crate::store::AppState;

    let state = use_context::<AppState>().unwrap_or_default();
    match state.store {
        Some(store) => Ok(store.probe_videos(offset).await),
        None => Ok(VideoBatch::default()),
    }
}
