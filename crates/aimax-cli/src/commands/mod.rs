//! Command implementations for aimax-cli

pub mod install;
pub mod list;
pub mod status;
pub mod uninstall;
pub mod update;

pub use install::run_install;
pub use list::run_list;
pub use status::run_status;
pub use uninstall::run_uninstall;
pub use update::run_update;
