pub mod context;
pub mod extraction;
pub mod input;
pub mod report;
