pub mod repl;
pub mod sentence_pipeline;
