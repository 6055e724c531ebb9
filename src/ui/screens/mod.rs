pub mod create;
pub mod feed;
pub mod nav;
pub mod quest;
pub mod tempter;
pub mod vault;
