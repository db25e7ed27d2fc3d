pub mod screen;
pub mod table;
