pub mod matcher;
pub mod task;
pub mod typeahead;

pub use matcher::{find_matches, find_matches_limited};
pub use task::{MountedWidget, mount, run_widget};
pub use typeahead::{Mode, RenderState, Typeahead};
