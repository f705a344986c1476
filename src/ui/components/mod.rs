//! Reusable UI components

mod button;

pub use button::{render_nav_button, NavButton, BUTTON_HEIGHT};
