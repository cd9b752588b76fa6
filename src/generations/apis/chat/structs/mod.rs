pub mod chat_completion_response;
