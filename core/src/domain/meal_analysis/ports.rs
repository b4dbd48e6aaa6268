use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_analysis::{
        entities::{AnalysisResult, ClearAnalysis},
        value_objects::{AnalyzeMealInput, ConfirmClarificationInput},
    },
};

/// Chat-completion backend that answers in free text.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Whether a credential is available. Checked before any call is attempted.
    fn is_configured(&self) -> bool;

    /// Sends one system and one user message and returns the full reply text,
    /// however it was delivered.
    fn complete(
        &self,
        system_prompt: String,
        user_prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for meal analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait MealAnalysisService: Send + Sync {
    fn analyze_meal(
        &self,
        input: AnalyzeMealInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;

    fn confirm_clarification(
        &self,
        input: ConfirmClarificationInput,
    ) -> impl Future<Output = Result<ClearAnalysis, CoreError>> + Send;
}
