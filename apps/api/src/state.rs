use crate::config::Config;
use crate::enhance::Enhancer;
use crate::extraction::ExtractionLimits;
use crate::parsing::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
/// Both services hold the same `Arc<dyn CompletionProvider>`.
#[derive(Clone)]
pub struct AppState {
    pub parser: ResumeParser,
    pub enhancer: Enhancer,
    pub config: Config,
    pub extraction_limits: ExtractionLimits,
}
