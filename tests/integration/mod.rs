//! Integration tests for vultr-cli

mod client_http;
