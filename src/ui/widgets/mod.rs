pub mod r#box;
pub mod meter;
