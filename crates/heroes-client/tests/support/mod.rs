//! Shared harness: a mock hero API on a loopback port plus a client for it.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use heroes_client::{ClientConfig, HeroService};
use heroes_messages::MessageService;
use heroes_mock_api::{spawn_mock_api, AppState, ServerConfig};
use heroes_types::Hero;
use tokio::task::JoinHandle;

/// A running mock API and a service wired to it.
pub struct TestApi {
    /// Service under test.
    pub service: HeroService,
    /// The log the service writes to.
    pub messages: MessageService,
    /// The store behind the API.
    pub state: Arc<AppState>,
    /// Where the API listens.
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl Drop for TestApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Start a mock API holding `heroes` and build a service pointed at it.
pub async fn spawn_api(heroes: Vec<Hero>) -> TestApi {
    let state = Arc::new(AppState::with_heroes(heroes));
    let config = ServerConfig {
        host: "127.0.0.1".to_owned(),
        port: 0,
    };
    let (addr, handle) = spawn_mock_api(&config, Arc::clone(&state)).await.unwrap();

    let messages = MessageService::new();
    let service = service_for(addr, &messages);

    TestApi {
        service,
        messages,
        state,
        addr,
        handle,
    }
}

/// A service pointed at a loopback port nothing listens on.
pub fn unreachable_service() -> (HeroService, MessageService) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let messages = MessageService::new();
    (service_for(addr, &messages), messages)
}

/// A service for the API at `addr` that ignores any proxy settings in the
/// environment, since every test server is on loopback.
pub fn service_for(addr: SocketAddr, messages: &MessageService) -> HeroService {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let config = ClientConfig::new(&format!("http://{addr}/")).unwrap();
    HeroService::with_client(client, &config, messages.clone())
}

/// The roster most tests start from.
pub fn roster() -> Vec<Hero> {
    vec![
        Hero::new(11_u32, "Superman"),
        Hero::new(12_u32, "Narco"),
        Hero::new(13_u32, "Batman"),
    ]
}
