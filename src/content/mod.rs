//! Page content: the response builder, static prose, and the handlers for
//! the landing, menu and form pages.

pub mod builder;
pub mod form;
pub mod home;
pub mod menu;
pub mod table;

pub use builder::PageBuilder;
pub use form::{form_page, submit_page, ProfileSubmission, FORM_PAGE, SUBMIT_PAGE};
pub use home::{home_page, HOME_PAGE};
pub use menu::{menu_page, MENU_LINKS};
pub use table::ContentTable;
