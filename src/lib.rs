mod board;
mod common;
mod config;
mod game;
mod logging;
mod session;
mod ship;
mod space;
mod strategy;
mod timer;
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use session::*;
pub use ship::*;
pub use space::*;
pub use strategy::*;
pub use timer::*;
pub use ui::*;
