// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod pagination;
pub mod skeleton;
pub mod tabs;

// Primitive wrappers
pub mod dialog;
pub mod switch;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use pagination::*;
pub use skeleton::*;
pub use switch::*;
pub use tabs::*;
pub use toast::*;
