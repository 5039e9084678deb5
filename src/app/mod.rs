// App module - state, input handling and rendering for the terminal screen
pub mod events;
pub mod state;
pub mod ui;

pub use events::handle_event;
pub use state::App;
pub use ui::{render, BoardProjection, ScreenLayout};
