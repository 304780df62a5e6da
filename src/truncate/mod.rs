pub mod driver;
pub mod job;
pub mod lines;
pub mod operations;
pub mod status;

// Re-export commonly used items
pub use driver::*;
pub use job::*;
pub use lines::FileContent;
pub use operations::*;
pub use status::*;
