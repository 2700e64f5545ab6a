pub mod local;
pub mod visibility;
