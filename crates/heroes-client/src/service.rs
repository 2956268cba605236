//! The hero data-access service.
//!
//! [`HeroService`] is the only thing that talks to the remote hero
//! collection. Every operation:
//!
//! 1. issues exactly one HTTP request (no retries),
//! 2. writes a one-line outcome to the shared [`MessageService`],
//! 3. on failure, also emits a `warn!` event and resolves to a fallback
//!    value (empty list, `None`, or `()`) instead of returning an error.
//!
//! Callers therefore never handle a failed operation; the message log is
//! the only trace of one.
//!
//! # Resource addressing
//!
//! ```text
//! GET    api/heroes            list all
//! GET    api/heroes/{id}       get by id (404 when absent)
//! GET    api/heroes/?id={id}   get by id (empty match set when absent)
//! GET    api/heroes/?name={t}  search by name
//! POST   api/heroes            create
//! PUT    api/heroes            update
//! DELETE api/heroes/{id}       delete
//! ```

use heroes_messages::MessageService;
use heroes_types::{Hero, HeroId, HeroRef, NewHero};
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Path of the hero collection relative to the API base URL.
pub const HEROES_PATH: &str = "api/heroes";

/// Prefix on every message this service writes to the log.
const LOG_PREFIX: &str = "HeroService: ";

/// Client-side mediator between callers and the remote hero collection.
///
/// Cheap to clone: clones share the HTTP connection pool and the message
/// log.
#[derive(Debug, Clone)]
pub struct HeroService {
    client: reqwest::Client,
    api_url: String,
    messages: MessageService,
}

impl HeroService {
    /// Create a service for the configured API, logging to `messages`.
    pub fn new(config: &ClientConfig, messages: MessageService) -> Self {
        Self::with_client(reqwest::Client::new(), config, messages)
    }

    /// Create a service that sends requests through an existing client.
    pub fn with_client(
        client: reqwest::Client,
        config: &ClientConfig,
        messages: MessageService,
    ) -> Self {
        Self {
            client,
            api_url: config.api_url.clone(),
            messages,
        }
    }

    /// The message log this service writes to.
    pub const fn messages(&self) -> &MessageService {
        &self.messages
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Fetch the whole collection.
    ///
    /// Yields an empty list if the request fails.
    pub async fn list_all(&self) -> Vec<Hero> {
        let request = self.client.get(self.collection_url());

        match fetch_json::<Vec<Hero>>(request).await {
            Ok(heroes) => {
                info!(count = heroes.len(), "fetched heroes");
                self.log("fetched heroes");
                heroes
            }
            Err(e) => self.handle_error("getHeroes", &e, Vec::new()),
        }
    }

    /// Fetch one hero from its singular resource path.
    ///
    /// The store answers 404 for an unknown id; that is reported to the
    /// log as a failure and yields `None`.
    pub async fn get_by_id_strict(&self, id: HeroId) -> Option<Hero> {
        let request = self.client.get(self.item_url(id));

        match fetch_json::<Hero>(request).await {
            Ok(hero) => {
                info!(%id, "fetched hero");
                self.log(&format!("fetched hero id={id}"));
                Some(hero)
            }
            Err(e) => self.handle_error(&format!("getHero id={id}"), &e, None),
        }
    }

    /// Fetch one hero through a filtered collection query.
    ///
    /// An unknown id comes back as an empty match set, which is a normal
    /// outcome here: it is logged as "did not find" and yields `None`.
    pub async fn get_by_id_lenient(&self, id: HeroId) -> Option<Hero> {
        let request = self
            .client
            .get(self.query_url())
            .query(&[("id", id.into_inner())]);

        match fetch_json::<Vec<Hero>>(request).await {
            Ok(matches) => {
                let hero = matches.into_iter().next();
                let outcome = if hero.is_some() {
                    "fetched"
                } else {
                    "did not find"
                };
                info!(%id, found = hero.is_some(), "looked up hero");
                self.log(&format!("{outcome} hero id={id}"));
                hero
            }
            Err(e) => self.handle_error(&format!("getHero id={id}"), &e, None),
        }
    }

    /// Find heroes whose name contains `term`.
    ///
    /// A blank term returns an empty list straight away: no request is
    /// sent and nothing is logged.
    pub async fn search(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }

        let request = self.client.get(self.query_url()).query(&[("name", term)]);

        match fetch_json::<Vec<Hero>>(request).await {
            Ok(heroes) => {
                info!(term, count = heroes.len(), "searched heroes");
                self.log(&format!("found heroes matching \"{term}\""));
                heroes
            }
            Err(e) => self.handle_error("searchHeroes", &e, Vec::new()),
        }
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Store a new hero. The store assigns its id.
    ///
    /// Yields the stored record, or `None` if the request fails.
    pub async fn create(&self, hero: &NewHero) -> Option<Hero> {
        let request = self
            .client
            .post(self.collection_url())
            .header(CONTENT_TYPE, "application/json")
            .json(hero);

        match fetch_json::<Hero>(request).await {
            Ok(stored) => {
                info!(id = %stored.id, name = %stored.name, "added hero");
                self.log(&format!("added hero w/ id={}", stored.id));
                Some(stored)
            }
            Err(e) => self.handle_error("addHero", &e, None),
        }
    }

    /// Replace the stored hero that shares `hero`'s id.
    pub async fn update(&self, hero: &Hero) {
        let request = self
            .client
            .put(self.collection_url())
            .header(CONTENT_TYPE, "application/json")
            .json(hero);

        match send(request).await {
            Ok(()) => {
                info!(id = %hero.id, "updated hero");
                self.log(&format!("updated hero id={}", hero.id));
            }
            Err(e) => self.handle_error("updateHero", &e, ()),
        }
    }

    /// Remove a hero, given either the record or its bare id.
    ///
    /// Both forms resolve to the same `DELETE api/heroes/{id}` request.
    pub async fn delete(&self, hero: impl Into<HeroRef>) {
        let id = hero.into().id();
        let request = self
            .client
            .delete(self.item_url(id))
            .header(CONTENT_TYPE, "application/json");

        match send(request).await {
            Ok(()) => {
                info!(%id, "deleted hero");
                self.log(&format!("deleted hero id={id}"));
            }
            Err(e) => self.handle_error("deleteHero", &e, ()),
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn collection_url(&self) -> String {
        format!("{}{HEROES_PATH}", self.api_url)
    }

    fn query_url(&self) -> String {
        format!("{}{HEROES_PATH}/", self.api_url)
    }

    fn item_url(&self, id: HeroId) -> String {
        format!("{}{HEROES_PATH}/{id}", self.api_url)
    }

    /// Record a failed operation and hand back its fallback value.
    fn handle_error<T>(&self, operation: &str, error: &ClientError, fallback: T) -> T {
        warn!(operation, error = %error, "hero operation failed");
        self.log(&format!("{operation} failed: {error}"));
        fallback
    }

    fn log(&self, message: &str) {
        self.messages.add(format!("{LOG_PREFIX}{message}"));
    }
}

/// Send a request and decode a JSON body from a successful response.
async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = checked_response(request).await?;
    response.json::<T>().await.map_err(ClientError::Decode)
}

/// Send a request whose response body is not needed.
async fn send(request: RequestBuilder) -> Result<(), ClientError> {
    checked_response(request).await.map(drop)
}

/// Send a request and turn any non-2xx status into an error.
async fn checked_response(request: RequestBuilder) -> Result<Response, ClientError> {
    let response = request.send().await.map_err(ClientError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status {
            url: response.url().to_string(),
            status,
        });
    }

    Ok(response)
}
