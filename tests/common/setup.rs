use std::sync::Arc;

use study_coach::config::{Config, ConfigLoader, ProviderKind};
use study_coach::gateway;
use study_coach::service::CoachService;

use crate::mocks::{InMemoryConfigLoader, MockGateway};

pub fn create_mock_service(gateway: MockGateway) -> (Arc<CoachService>, Arc<MockGateway>) {
    let gateway = Arc::new(gateway);
    let service = Arc::new(CoachService::new(gateway.clone()));
    (service, gateway)
}

pub fn create_provider_config(kind: ProviderKind, base_url: String) -> Config {
    let mut config = Config::default();
    config.provider.kind = kind;
    config.provider.api_url = Some(base_url);
    config.api_key = Some("test-key".to_string());
    config
}

pub fn create_provider_service(kind: ProviderKind, base_url: String) -> Arc<CoachService> {
    let loader = InMemoryConfigLoader::new(create_provider_config(kind, base_url));
    let config = loader.load_config().unwrap();
    let gateway = gateway::from_config(&config, reqwest::Client::new());
    Arc::new(CoachService::new(gateway))
}
