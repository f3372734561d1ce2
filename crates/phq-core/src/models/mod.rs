pub mod questionnaire;
pub mod response;
pub mod result;
pub mod session;
