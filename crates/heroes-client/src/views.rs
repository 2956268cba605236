//! View-state controllers that sit between user actions and the service.
//!
//! Each controller keeps its own snapshot of the heroes it displays and
//! turns user actions (add, delete, edit, type into a search box) into
//! [`HeroService`] calls. Every service call is awaited before the action
//! completes, so no request is ever built and then silently dropped.

use heroes_types::{Hero, HeroId, NewHero};
use tracing::debug;

use crate::service::HeroService;

// ---------------------------------------------------------------------------
// List view
// ---------------------------------------------------------------------------

/// The hero list: shows every hero and supports add and delete.
#[derive(Debug, Clone)]
pub struct HeroesView {
    service: HeroService,
    heroes: Vec<Hero>,
}

impl HeroesView {
    /// Create an empty list view. Call [`HeroesView::load`] to populate it.
    pub const fn new(service: HeroService) -> Self {
        Self {
            service,
            heroes: Vec::new(),
        }
    }

    /// The heroes currently displayed.
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Replace the displayed list with the store's collection.
    pub async fn load(&mut self) {
        self.heroes = self.service.list_all().await;
    }

    /// Create a hero from raw input and append it to the list.
    ///
    /// Blank input is ignored without contacting the store. If creation
    /// fails the list is left unchanged.
    pub async fn add(&mut self, name: &str) {
        let Some(new_hero) = NewHero::from_input(name) else {
            debug!("ignoring blank hero name");
            return;
        };

        if let Some(hero) = self.service.create(&new_hero).await {
            self.heroes.push(hero);
        }
    }

    /// Remove a hero from the list and from the store.
    ///
    /// The hero disappears from the display immediately; the delete
    /// request is then sent and awaited.
    pub async fn delete(&mut self, hero: &Hero) {
        self.heroes.retain(|h| h != hero);
        self.service.delete(hero).await;
    }
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

/// The single-hero editor.
#[derive(Debug, Clone)]
pub struct HeroDetailView {
    service: HeroService,
    hero: Option<Hero>,
}

impl HeroDetailView {
    /// Create a detail view with nothing loaded.
    pub const fn new(service: HeroService) -> Self {
        Self {
            service,
            hero: None,
        }
    }

    /// The hero being edited, if one was found.
    pub const fn hero(&self) -> Option<&Hero> {
        self.hero.as_ref()
    }

    /// Load the hero with the given id for editing.
    pub async fn load(&mut self, id: HeroId) {
        self.hero = self.service.get_by_id_strict(id).await;
    }

    /// Change the held hero's name. Does nothing when no hero is held.
    pub fn rename(&mut self, name: &str) {
        if let Some(hero) = self.hero.as_mut() {
            name.clone_into(&mut hero.name);
        }
    }

    /// Send the held hero back to the store.
    pub async fn save(&self) {
        if let Some(hero) = &self.hero {
            self.service.update(hero).await;
        }
    }
}

// ---------------------------------------------------------------------------
// Search view
// ---------------------------------------------------------------------------

/// Search-as-you-type box.
///
/// Typing the same term twice in a row does not search again.
#[derive(Debug, Clone)]
pub struct HeroSearchView {
    service: HeroService,
    last_term: Option<String>,
    results: Vec<Hero>,
}

impl HeroSearchView {
    /// Create a search view with no results.
    pub const fn new(service: HeroService) -> Self {
        Self {
            service,
            last_term: None,
            results: Vec::new(),
        }
    }

    /// Results of the most recent search.
    pub fn results(&self) -> &[Hero] {
        &self.results
    }

    /// Handle a new value in the search box.
    pub async fn input(&mut self, term: &str) {
        if self.last_term.as_deref() == Some(term) {
            debug!(term, "search term unchanged");
            return;
        }

        self.last_term = Some(term.to_owned());
        self.results = self.service.search(term).await;
    }
}
