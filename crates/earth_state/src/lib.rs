pub mod context_menu;
pub mod plugin;
pub mod state;
pub mod view_state;

pub use context_menu::{ContextMenuEntry, ContextMenuModel, MenuIcon};
pub use plugin::{ViewSet, ViewStatePlugin};
pub use state::AppState;
pub use view_state::{ViewAction, ViewSettings, ViewState};
