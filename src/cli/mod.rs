pub mod app;
pub mod check;
pub mod gen;
pub mod query;
