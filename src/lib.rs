//! A terminal episode catalogue browser written in Rust.
//!
//! episode-browser fetches one show's full episode list from the TVMaze
//! API and presents it in a TUI: a live free-text search, a selector
//! panel for jumping straight to one episode, and a counter that always
//! shows how many episodes are displayed out of the total.
//!
//! # Usage
//!
//! ```bash
//! # Browse the default show
//! cargo run
//!
//! # Browse a different show by TVMaze id
//! cargo run -- --show 431
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod tui;
pub mod types;
pub mod view;
