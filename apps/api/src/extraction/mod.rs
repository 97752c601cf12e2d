//! Extraction — validate a link, scrape it to plain text, and ask the LLM to
//! pull resume-shaped fields out of it.

pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod scrape;
pub mod validator;
