mod puzzle;
mod word;

pub use puzzle::PuzzleCommands;
pub use word::WordCommands;
