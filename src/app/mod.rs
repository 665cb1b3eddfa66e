mod events;
mod state;
mod step;

pub use state::App;
