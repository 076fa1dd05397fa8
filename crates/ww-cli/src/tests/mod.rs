mod cli;
mod error;
