pub mod cli;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;

pub use crate::core::git::GitRepository;
pub use config::Config;
pub use utils::{Result, ShearError};
