use std::time::Duration;

use rand::Rng;
use tokio::time;

use crate::config::PageSpec;
use crate::extractor::extract;
use crate::fetcher::fetch;

/// Fetches and extracts every spec in order, flattening the fragments into
/// one sequence. A page that fails to download contributes nothing.
pub async fn collect_all<R: Rng>(
    specs: &[PageSpec],
    user_agents: &[String],
    proxies: &[String],
    rng: &mut R,
) -> Vec<String> {
    let mut fragments = Vec::new();
    for spec in specs {
        match fetch(&spec.url, user_agents, proxies, rng).await {
            Ok(html) => fragments.extend(extract(&html, &spec.tag, &spec.style)),
            Err(e) => log::error!("Skipping page: {e}"),
        }
        // Throttling pause, drawn fresh after every page.
        let pause = rng.gen_range(1..=4);
        time::sleep(Duration::from_secs(pause)).await;
    }
    fragments
}
