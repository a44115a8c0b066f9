pub mod memory;
pub mod reports;
pub mod tester;

pub use memory::MemoryBackend;
pub use tester::*;
