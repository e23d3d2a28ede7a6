// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod page_header;
pub mod skeleton;

// Primitive wrappers
pub mod avatar;
pub mod dropdown_menu;
pub mod progress;

// Reads DrawerState context
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dropdown_menu::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use sidebar::*;
pub use skeleton::*;
