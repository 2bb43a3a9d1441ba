mod classifier;

pub use classifier::{classify, ParsedQuery};
