pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod matching;
pub mod models;
pub mod normalize;
pub mod orchestrator;
pub mod source;
pub mod util;

pub use matching::compare_email_name;
pub use normalize::{UNKNOWN, process_handle, remove_frequent_letters};
