// src/robots/gate.rs
// =============================================================================
// Asks a site's robots.txt whether we may fetch a page.
//
// Strategy:
// - Build "<scheme>://<host>/robots.txt" from the page URL
// - Fetch it through the same fetch layer as everything else
// - Evaluate it with `texting_robots`
//
// How the response is treated:
// - 401 / 403           -> everything disallowed
// - any other 4xx       -> no robots.txt, everything allowed
// - 5xx                 -> disallowed (the site is not answering properly)
// - 2xx / 3xx           -> parse the file and ask it
// - network error       -> disallowed, and the error is handed back so the
//                          caller can say the site was unreachable
// - unparseable URL     -> disallowed
//
// Decisions are cached per origin so a batch of pages on one site only
// downloads robots.txt once.
// =============================================================================

use std::collections::HashMap;

use texting_robots::Robot;
use url::Url;

use crate::checker::Fetch;
use crate::error::FetchError;

/// Name we match robots.txt groups against. Sites rarely name it, so the
/// "*" group is what normally applies.
const ROBOTS_AGENT: &str = "link-inspector";

// What we learned from one origin's robots.txt
enum RobotsRules {
    AllowAll,
    DisallowAll,
    Parsed(Robot),
    Unreachable(FetchError),
}

impl RobotsRules {
    fn allows(&self, url: &str) -> Result<bool, FetchError> {
        match self {
            RobotsRules::AllowAll => Ok(true),
            RobotsRules::DisallowAll => Ok(false),
            RobotsRules::Parsed(robot) => Ok(robot.allowed(url)),
            RobotsRules::Unreachable(e) => Err(e.clone()),
        }
    }
}

#[derive(Default)]
pub struct RobotsGate {
    cache: HashMap<String, RobotsRules>,
}

impl RobotsGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns Ok(true) if robots.txt lets us fetch `page_url`
    ///
    /// Err means robots.txt could not be fetched at all. The page must be
    /// treated as disallowed, but the error says why.
    pub async fn is_allowed(
        &mut self,
        fetcher: &dyn Fetch,
        page_url: &str,
    ) -> Result<bool, FetchError> {
        let Some(robots_url) = robots_url(page_url) else {
            log::debug!("Cannot derive robots.txt location for {}", page_url);
            return Ok(false);
        };

        if !self.cache.contains_key(&robots_url) {
            let rules = fetch_rules(fetcher, &robots_url).await;
            self.cache.insert(robots_url.clone(), rules);
        }

        self.cache
            .get(&robots_url)
            .map_or(Ok(false), |rules| rules.allows(page_url))
    }
}

// "https://example.com/a/b?c" -> "https://example.com/robots.txt"
fn robots_url(page_url: &str) -> Option<String> {
    let url = Url::parse(page_url).ok()?;
    if url.host_str().is_none() {
        return None;
    }
    url.join("/robots.txt").ok().map(|u| u.to_string())
}

async fn fetch_rules(fetcher: &dyn Fetch, robots_url: &str) -> RobotsRules {
    let response = match fetcher.get_page(robots_url).await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Could not read {}: {}", robots_url, e);
            return RobotsRules::Unreachable(e);
        }
    };

    match response.status {
        401 | 403 => RobotsRules::DisallowAll,
        400..=499 => RobotsRules::AllowAll,
        500.. => {
            log::warn!("{} answered HTTP {}", robots_url, response.status);
            RobotsRules::DisallowAll
        }
        _ => match Robot::new(ROBOTS_AGENT, response.body.as_bytes()) {
            Ok(robot) => RobotsRules::Parsed(robot),
            Err(e) => {
                log::warn!("Could not parse {}: {}", robots_url, e);
                RobotsRules::DisallowAll
            }
        },
    }
}
