mod session;
mod presentation;
mod calendar_views;

pub use session::run_tui;
