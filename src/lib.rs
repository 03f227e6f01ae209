pub mod io;
pub mod state;
pub mod ui;
