pub mod style_category;
