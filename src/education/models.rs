pub mod education_content;
