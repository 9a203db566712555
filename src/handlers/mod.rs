pub mod classify;
pub mod register;
pub mod resource;
pub mod service;

pub use classify::{classify, Operation};
pub use register::register_post;
