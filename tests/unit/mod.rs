//! Property tests for DN tokenizing and RFC 4512 lexical rules.

pub mod properties;
