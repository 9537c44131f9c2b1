//! JSONL journal of store mutations: writing and replay.

pub mod replayer;
pub mod writer;
