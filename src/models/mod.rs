mod brief_question;
mod envelope;
mod user;

pub use brief_question::{BriefQuestion, CreateBriefQuestion};
pub use envelope::ApiEnvelope;
pub use user::{LoginRequest, LoginResponse, RegisterRequest, User, UsersPage};
