pub mod question_bank;
pub mod quiz_service;
