pub mod navigation;
pub mod view_state;

pub use navigation::{GridMove, Navigation, SELECTOR_COLUMNS};
pub use view_state::{CalendarViewState, ViewMode};
