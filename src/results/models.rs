pub mod result_view;
pub mod share_payload;
