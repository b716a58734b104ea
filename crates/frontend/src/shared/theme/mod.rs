pub mod theme_select;

pub use theme_select::ThemeSelect;
