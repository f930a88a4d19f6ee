pub mod report;
pub mod select;
