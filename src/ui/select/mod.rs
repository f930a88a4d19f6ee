pub mod app;
pub mod coordinator;
pub mod renderer;
pub mod state;

pub use app::{run_interactive, SessionEnd};
pub use coordinator::SelectCoordinator;
pub use state::{SelectMode, SelectState, SelectionItem};
