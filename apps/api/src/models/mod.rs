pub mod conversation;
pub mod document;
pub mod session;
