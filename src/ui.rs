pub mod render;
pub mod widgets;
