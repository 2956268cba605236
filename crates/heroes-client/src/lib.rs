//! Hero data-access layer for the Tour of Heroes application.
//!
//! [`HeroService`] mediates between callers and the remote hero
//! collection. It never returns an error: each operation traps its own
//! failure, writes a diagnostic to the shared
//! [`MessageService`](heroes_messages::MessageService), and yields a safe
//! fallback (an empty list, `None`, or `()`).
//!
//! # Architecture
//!
//! ```text
//! views (list / detail / search) --> HeroService --> reqwest --> api/heroes
//!                                         |
//!                                         +--> MessageService (outcome log)
//! ```
//!
//! Every operation is an `async fn` and does nothing until awaited. The
//! view controllers in [`views`] always await the calls they make.

pub mod config;
pub mod error;
pub mod service;
pub mod views;

pub use config::ClientConfig;
pub use error::ClientError;
pub use service::{HeroService, HEROES_PATH};
pub use views::{HeroDetailView, HeroSearchView, HeroesView};
