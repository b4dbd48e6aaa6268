use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    meal_analysis::{
        clarification::{resolve_manually, resolved_food_lines},
        entities::{AnalysisResult, ClearAnalysis},
        parser::parse_ai_response,
        ports::{LLMClient, MealAnalysisService},
        prompts::{KNOWLEDGE_PROMPT, build_analysis_prompt, build_confirmation_prompt},
        reply::interpret_reply,
        value_objects::{AnalyzeMealInput, ConfirmClarificationInput},
    },
};

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    fn ensure_llm_configured(&self) -> Result<(), CoreError> {
        if self.llm_client.is_configured() {
            Ok(())
        } else {
            tracing::error!("AI credential is not configured");
            Err(CoreError::Configuration(
                "AI API key is not configured".to_string(),
            ))
        }
    }
}

impl<LLM> MealAnalysisService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn analyze_meal(&self, input: AnalyzeMealInput) -> Result<AnalysisResult, CoreError> {
        // 1. Validate input, before anything about the AI backend
        let description = input.description.trim();
        if description.is_empty() {
            return Err(CoreError::InvalidInput(
                "meal description is empty".to_string(),
            ));
        }

        // 2. Check credential
        self.ensure_llm_configured()?;

        // 3. Call LLM
        let user_prompt = build_analysis_prompt(input.meal_type, description);
        let raw_response = self
            .llm_client
            .complete(KNOWLEDGE_PROMPT.to_string(), user_prompt)
            .await?;

        // 4. Parse and interpret response
        let parsed = parse_ai_response(&raw_response).ok_or_else(|| {
            tracing::error!(reply_len = raw_response.len(), "AI reply contains no JSON");
            CoreError::UpstreamFormat("no JSON found in AI reply".to_string())
        })?;

        let result = interpret_reply(parsed).inspect_err(|e| {
            tracing::error!("Failed to interpret AI reply: {}", e);
        })?;

        tracing::info!(
            meal_type = input.meal_type.as_str(),
            clear = result.is_clear(),
            "meal analyzed"
        );

        Ok(result)
    }

    async fn confirm_clarification(
        &self,
        input: ConfirmClarificationInput,
    ) -> Result<ClearAnalysis, CoreError> {
        self.ensure_llm_configured()?;

        let food_lines = resolved_food_lines(&input.clear_foods, &input.clarified_items);
        let user_prompt = build_confirmation_prompt(input.meal_type, &food_lines);

        let fallback = |reason: &str| {
            tracing::warn!(reason, "resolving clarification without the AI reply");
            resolve_manually(&input.clear_foods, &input.clarified_items)
        };

        let raw_response = match self
            .llm_client
            .complete(KNOWLEDGE_PROMPT.to_string(), user_prompt)
            .await
        {
            Ok(raw_response) => raw_response,
            Err(e @ CoreError::Configuration(_)) => return Err(e),
            Err(e) => {
                tracing::error!("AI confirmation call failed: {}", e);
                return Ok(fallback("AI call failed"));
            }
        };

        let Some(parsed) = parse_ai_response(&raw_response) else {
            return Ok(fallback("AI reply contains no JSON"));
        };

        match interpret_reply(parsed) {
            Ok(AnalysisResult::Clear(clear)) => {
                tracing::info!(
                    meal_type = input.meal_type.as_str(),
                    total_calories = clear.total_calories,
                    "clarification confirmed"
                );
                Ok(clear)
            }
            Ok(AnalysisResult::NeedsClarification(_)) => {
                Ok(fallback("AI asked for clarification again"))
            }
            Err(_) => Ok(fallback("AI reply has an unexpected shape")),
        }
    }
}
