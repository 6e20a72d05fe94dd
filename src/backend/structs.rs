pub mod check_prediction_response;
pub mod create_prediction_response;
pub mod generate_education_response;
