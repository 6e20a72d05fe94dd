pub mod transfer_dto;
