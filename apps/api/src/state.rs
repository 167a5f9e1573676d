use std::sync::Arc;

use crate::artifacts::encoder::OneHotEncoder;
use crate::artifacts::vectorizer::TfidfVectorizer;
use crate::artifacts::SalaryModel;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only after startup, so clones are
/// cheap and no locking is needed under concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// Runtime config, kept alongside the artifacts for handlers that need it.
    #[allow(dead_code)]
    pub config: Config,
    pub encoder: Arc<OneHotEncoder>,
    /// Present only when the deployment ships a TF-IDF artifact; absence
    /// selects the no-text feature layout.
    pub vectorizer: Option<Arc<TfidfVectorizer>>,
    /// Pluggable predictor. Production: the loaded tree ensemble. Tests swap
    /// in a stub with a fixed output.
    pub model: Arc<dyn SalaryModel>,
}
