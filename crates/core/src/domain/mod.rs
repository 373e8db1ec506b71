pub mod catalog;
pub mod project;
pub mod rfq;
pub mod supplier;
