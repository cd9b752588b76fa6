pub mod chat;
pub mod dalle;
