pub mod clipboard;
pub mod highlight;
