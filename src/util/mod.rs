pub mod log;
pub mod database;
pub mod image;
pub mod string;
pub mod task;
