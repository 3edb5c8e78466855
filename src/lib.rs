// blogdash library: API client, session store and terminal UI

pub mod api;
pub mod articles;
pub mod config;
pub mod logging;
pub mod session;
pub mod ui;
