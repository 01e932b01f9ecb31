//! Problem files and solution output.
//!
//! - [`read_problem`] / [`read_problem_file`] — parse the load list format
//! - [`write_text_solution`] / [`write_json_solution`] — render an outcome
//! - [`write_json_batch`] — render a whole directory run
//!
//! Problem file format: one header line, then one load per line,
//!
//! ```text
//! loadNumber pickup dropoff
//! 1 (-50.1,80.0) (90.1,12.2)
//! 2 (-24.5,-19.2) (98.5,1.8)
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ParsePointError, ReadError};
pub use reader::{parse_point, read_problem, read_problem_file};
pub use writer::{write_json_batch, write_json_solution, write_text_solution};
