pub mod clean;
pub mod dedupe;
pub mod expand;
pub mod merge;
pub mod pipeline;
pub mod reconcile;
