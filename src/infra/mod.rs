pub mod command;
pub mod git;
pub mod github;
pub mod linguist;
