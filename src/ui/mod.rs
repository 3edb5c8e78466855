// Terminal UI using Ratatui

pub mod components;
pub mod events;
pub mod focus;
pub mod form;
pub mod list;
pub mod login;
pub mod modal;
pub mod register;
pub mod state;

pub use events::run_ui;
pub use list::ListScreen;
pub use login::LoginScreen;
pub use register::RegisterScreen;
pub use state::{AppState, Screen};
