//! Directory page: the dynamic listing built from the external people source.

pub mod keys;
pub mod page;
pub mod source;

pub use keys::{key_for, OverflowPolicy, KEY_ALPHABET};
pub use page::{degraded_directory_page, directory_page, load_directory_page, DirectoryOptions};
pub use source::{fetch_with_deadline, PeopleSource, PersonRecord, StaticSource};
