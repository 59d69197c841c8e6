pub mod contacts;
pub mod labels;
