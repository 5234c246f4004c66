//! Integration tests for `miniqlite_core`, driven through its public API.

#[cfg(test)]
mod engine_test;
