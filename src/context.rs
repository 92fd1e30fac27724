use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{
    LanguageClassifierService, PlatformService, SnippetStoreService, VersionControlService,
};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub platform: Arc<dyn PlatformService>,
    pub snippet_store: Arc<dyn SnippetStoreService>,
    pub version_control: Arc<dyn VersionControlService>,
    pub classifier: Arc<dyn LanguageClassifierService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        platform: Arc<dyn PlatformService>,
        snippet_store: Arc<dyn SnippetStoreService>,
        version_control: Arc<dyn VersionControlService>,
        classifier: Arc<dyn LanguageClassifierService>,
    ) -> Self {
        Self {
            config,
            platform,
            snippet_store,
            version_control,
            classifier,
        }
    }
}
