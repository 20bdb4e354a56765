pub mod error;
pub mod evaluation;
pub mod game;
pub mod logging;
pub mod report;
pub mod results;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
