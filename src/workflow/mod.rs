pub mod classify;
pub mod collect;
pub mod harvest;
pub mod pipeline;
