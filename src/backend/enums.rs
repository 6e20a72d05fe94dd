pub mod prediction_status;
