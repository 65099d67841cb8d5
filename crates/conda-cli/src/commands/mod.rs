//! Command implementations for conda-cli

pub mod info;
pub mod list;
pub mod locate;

pub use info::run_info;
pub use list::run_list;
pub use locate::run_locate;
