use std::sync::Arc;

use coach_llm::CompletionClient;

use crate::coaching::coaching_service::CoachingService;

#[derive(Clone)]
pub struct AppService {
    pub coaching_service: CoachingService,
}

impl AppService {
    pub fn new(client: CompletionClient) -> Self {
        let coaching_service = CoachingService::new(Arc::new(client));

        Self { coaching_service }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
}

impl AppState {
    pub fn new(client: CompletionClient) -> Self {
        Self {
            service: AppService::new(client),
        }
    }
}
