pub mod calendar_keys;
pub mod text_entry;
