//! Shared state of the inference backend

use std::sync::Arc;

use crate::model::LinearModel;

/// Handler state. The model is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct InferenceState {
    pub model: Arc<LinearModel>,
}

impl InferenceState {
    pub fn new(model: LinearModel) -> Self {
        Self {
            model: Arc::new(model),
        }
    }
}
