use std::sync::Arc;

use crate::analysis::AnalysisInvoker;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup; both handles are safe to share across requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub analysis: AnalysisInvoker,
}
