//! Property-based tests for the renderable contract

mod arity;
