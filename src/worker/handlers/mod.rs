pub mod double_entry;
pub mod integrity;
pub mod post;
