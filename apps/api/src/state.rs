use crate::generation::generator::Generator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub generator: Generator,
}
