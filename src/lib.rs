pub mod config;
pub mod discovery;
pub mod logging;
pub mod scanner;
pub mod update;
pub mod version;
