use crate::{
    domain::common::{CalorieLensConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::ChatCompletionClient,
};

pub type CalorieLensService = Service<ChatCompletionClient>;

pub fn create_service(config: CalorieLensConfig) -> Result<CalorieLensService, CoreError> {
    if config.llm.credential().is_none() {
        tracing::warn!("MODELSCOPE_API_KEY is not set, meal analysis will be unavailable");
    }

    let llm_client = ChatCompletionClient::new(config.llm)?;

    Ok(Service::new(llm_client))
}
