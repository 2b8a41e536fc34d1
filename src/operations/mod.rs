pub mod creation;
pub mod select;
