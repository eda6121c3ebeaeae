use policy_service_cli::ai::ChatModel;
use policy_service_cli::breach::BreachClient;
use std::sync::Arc;

/// Shared handles for the request handlers. Everything inside is immutable
/// and constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ChatModel>,
    pub breach: Arc<BreachClient>,
}

impl AppState {
    pub fn new(model: Arc<dyn ChatModel>, breach: BreachClient) -> Self {
        Self {
            model,
            breach: Arc::new(breach),
        }
    }
}
