pub mod commit;
pub mod diff;
pub mod event;
pub mod language;
pub mod snippet;
