pub mod config;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::portfolio;

#[cfg(test)]
mod tests;
