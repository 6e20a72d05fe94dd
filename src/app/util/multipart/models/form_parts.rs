use std::collections::HashMap;

use super::file_properties::FileProperties;

#[derive(Debug, Default)]
pub struct FormParts {
    pub files: Vec<FileProperties>,
    pub fields: HashMap<String, String>,
}

impl FormParts {
    pub fn take_file(&mut self, field_name: &str) -> Option<FileProperties> {
        let index = self
            .files
            .iter()
            .position(|file| file.field_name == field_name)?;

        Some(self.files.remove(index))
    }

    pub fn field(&self, field_name: &str) -> Option<&str> {
        self.fields.get(field_name).map(|value| value.as_str())
    }
}
