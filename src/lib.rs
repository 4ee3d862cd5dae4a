//! # Dash - personal contacts and tasks
//!
//! A command-line utility for keeping track of people and the tasks that
//! involve them.
//!
//! ## Features
//!
//! - **Address Book**: Add, edit, delete, find and clear persons
//! - **Task List**: Add, edit, complete, delete and clear tasks
//! - **Tag System**: Organize persons and tasks with tags
//! - **Search**: Combine description, tag, person, date and status criteria
//! - **Upcoming View**: Future tasks in chronological order
//! - **JSON Storage**: Plain JSON files in the platform data directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dash::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod storage;
