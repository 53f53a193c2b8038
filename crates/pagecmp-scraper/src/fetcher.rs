use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::header::USER_AGENT;
use thiserror::Error;

use crate::config::ConfigError;

lazy_static! {
    static ref HTTP_CLI: reqwest::Client = reqwest::ClientBuilder::new()
        .gzip(true)
        .deflate(true)
        .build()
        .unwrap();
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("couldn't fetch {url}: {cause}")]
    Http { url: String, cause: reqwest::Error },
}

/// Downloads `url` once, with a user agent drawn from `user_agents` and,
/// when `proxies` is non-empty, through a proxy drawn from it.
pub async fn fetch<R: Rng>(
    url: &str,
    user_agents: &[String],
    proxies: &[String],
    rng: &mut R,
) -> Result<String, FetchError> {
    let user_agent = user_agents
        .choose(rng)
        .ok_or(ConfigError::EmptyUserAgentPool)?;
    let proxy = proxies.choose(rng);

    log::info!("Fetching {url}");
    do_fetch(url, user_agent, proxy.map(String::as_str))
        .await
        .map_err(|cause| FetchError::Http {
            url: url.to_string(),
            cause,
        })
}

async fn do_fetch(
    url: &str,
    user_agent: &str,
    proxy: Option<&str>,
) -> Result<String, reqwest::Error> {
    let req = match proxy {
        Some(proxy) => proxied_client(proxy)?.get(url),
        None => HTTP_CLI.get(url),
    };
    req.header(USER_AGENT, user_agent)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}

// The proxy differs per request, so proxied requests can't go through the
// shared client.
fn proxied_client(proxy: &str) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::ClientBuilder::new()
        .gzip(true)
        .deflate(true)
        .proxy(reqwest::Proxy::all(format!("http://{proxy}"))?)
        .build()
}
