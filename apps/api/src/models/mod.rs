pub mod lenient;
pub mod merge;
pub mod resume;

pub use resume::ResumeRecord;
