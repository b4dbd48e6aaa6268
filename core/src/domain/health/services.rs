use crate::domain::{
    common::services::Service,
    health::{entities::ServiceStatus, ports::HealthCheckService},
    meal_analysis::ports::LLMClient,
};

impl<LLM> HealthCheckService for Service<LLM>
where
    LLM: LLMClient,
{
    fn status(&self) -> ServiceStatus {
        if self.llm_client.is_configured() {
            ServiceStatus {
                configured: true,
                message: "API 已配置".to_string(),
            }
        } else {
            ServiceStatus {
                configured: false,
                message: "请在 .env 文件中配置 MODELSCOPE_API_KEY".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meal_analysis::ports::MockLLMClient;

    #[test]
    fn reports_missing_credential() {
        let mut client = MockLLMClient::new();
        client.expect_is_configured().return_const(false);

        let status = Service::new(client).status();

        assert!(!status.configured);
        assert!(status.message.contains("MODELSCOPE_API_KEY"));
    }

    #[test]
    fn reports_configured_credential() {
        let mut client = MockLLMClient::new();
        client.expect_is_configured().return_const(true);

        assert!(Service::new(client).status().configured);
    }
}
