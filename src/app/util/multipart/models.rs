pub mod file_properties;
pub mod form_parts;
pub mod image_file_properties;
