pub mod language_classifier;
pub mod platform;
pub mod snippet_store;
pub mod version_control;

pub use language_classifier::LanguageClassifierService;
pub use platform::PlatformService;
pub use snippet_store::SnippetStoreService;
pub use version_control::VersionControlService;
