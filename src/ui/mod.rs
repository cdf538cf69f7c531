pub mod buttons;
pub mod style;
