//! End-to-end tests: real server on 127.0.0.1:0, mock completion backend, reqwest client.

mod common;
mod generate_docs;
mod invalid_body;
mod timeout;
