/// Application service. Every port implementation for the domain lives on this struct,
/// and the outbound adapters it relies on are injected at construction.
#[derive(Clone, Debug)]
pub struct Service<LLM> {
    pub(crate) llm_client: LLM,
}

impl<LLM> Service<LLM> {
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }
}
