pub mod error;
pub mod validation;
pub mod model;
pub mod book;
pub mod cli;
