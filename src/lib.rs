//! Optimal paragraph line breaking.
//!
//! Breaks a stream of words into lines at most `max_width` characters wide,
//! minimizing the summed penalty over lines: squared leftover space for
//! lines that fit, a large scaled overflow cost for words wider than the
//! limit. Six solvers share the one cost model and return breakings of
//! identical penalty while searching the break space differently, from
//! exhaustive enumeration up to the linear-time SMAWK column-minima
//! algorithm; [`Algorithm`] picks the strategy per call.
//!
//! ```
//! use line_breaking::{break_lines, Algorithm};
//!
//! let text = "a b c d e f g h i j k l m n o p qqqqqqqqq";
//! let lines = break_lines(text, 9, Algorithm::Smawk).unwrap();
//! assert_eq!(lines[0], "a b c d");
//! ```

mod api;
mod binary_search;
mod brute_force;
mod cost;
mod divide_and_conquer;
mod dynamic_programming;
#[doc(hidden)]
pub mod samples;
mod shortest_path;
mod smawk;
#[cfg(target_arch = "wasm32")]
mod wasm;
mod words;

pub use api::{break_lines, Algorithm, BreakError};
pub use cost::total_penalty;
#[cfg(target_arch = "wasm32")]
pub use wasm::{algorithm_names, break_paragraph, sample_texts};
