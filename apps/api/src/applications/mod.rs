// Job application tracker
// Records applications in memory for the life of the process.

pub mod handlers;
pub mod models;
