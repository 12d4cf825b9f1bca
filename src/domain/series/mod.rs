//! Series value type plus the alignment and summation engine.

pub mod aggregate;
pub mod align;
pub mod error;
pub mod model;

pub use aggregate::sum;
pub use align::align;
pub use error::{AlignError, SeriesError};
pub use model::{DataPoint, Series};
