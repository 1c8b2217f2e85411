// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod skeleton;

// Depend on button, input or skeleton
pub mod file_input;
pub mod form_sheet;
pub mod pagination;
pub mod sidebar;
pub mod textarea;

// Primitive wrappers
pub mod confirm_dialog;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use confirm_dialog::*;
pub use data_table::*;
pub use file_input::*;
pub use form_select::*;
pub use form_sheet::*;
pub use input::*;
pub use page_header::*;
pub use pagination::*;
pub use search_bar::*;
pub use sidebar::*;
pub use skeleton::*;
pub use textarea::*;
pub use toast::*;
