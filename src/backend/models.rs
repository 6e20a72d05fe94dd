pub mod input_spec;
pub mod prediction_state;
