pub mod ascii;
pub mod cli;
pub mod document;
pub mod enhance;
pub mod error;
pub mod frames;
pub mod pipeline;
pub mod preprocess;
