pub mod gemini;
pub mod traits;

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::config::Config;
use crate::error::{BrandzError, Result};

pub use gemini::GeminiClient;
pub use traits::{ContentGenerator, ModelError};

/// Process-wide model client, built on first use and reused afterwards.
///
/// Initialization runs at most once even under concurrent first use. A failed
/// initialization leaves the slot empty and is retried on the next request.
pub struct SharedGenerator {
    config: Arc<Config>,
    cell: OnceCell<Arc<dyn ContentGenerator>>,
}

impl SharedGenerator {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            cell: OnceCell::new(),
        }
    }

    /// A slot that already holds `generator`; used by tests and embedders.
    pub fn preloaded(config: Arc<Config>, generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            config,
            cell: OnceCell::with_value(generator),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get(&self) -> Result<Arc<dyn ContentGenerator>> {
        self.cell
            .get_or_try_init(|| {
                let client = GeminiClient::from_config(&self.config)?;
                tracing::info!("Initialized Gemini client (model={})", client.model_name());
                Ok::<_, BrandzError>(Arc::new(client) as Arc<dyn ContentGenerator>)
            })
            .cloned()
    }
}
