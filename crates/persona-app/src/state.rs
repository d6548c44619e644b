use std::sync::Arc;

use persona_config::Config;
use persona_core::directory::DirectoryEntry;
use persona_generator::CardGenerator;

pub struct AppState {
    pub config: Config,
    pub generator: Arc<dyn CardGenerator>,
    pub directory: &'static [DirectoryEntry],
}

impl AppState {
    pub fn new(
        config: Config,
        generator: Arc<dyn CardGenerator>,
        directory: &'static [DirectoryEntry],
    ) -> Self {
        Self {
            config,
            generator,
            directory,
        }
    }
}
