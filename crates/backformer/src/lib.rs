pub mod flatten;
pub mod handlers;
pub mod input;
pub mod logging;
pub mod normalize;
pub mod pipeline;
pub mod query;

pub use flatten::{flatten, unique_candidates};
pub use handlers::{AppState, router};
pub use input::{parse_records, read_records};
pub use logging::log_filter;
pub use normalize::{
    InvalidModeError, NormalizeMode, normalize_all, normalize_for_circumfix, normalize_for_prefix,
    normalize_for_suffix,
};
pub use pipeline::{Backformation, BackformedRow, Backformer, FrequencyRow, annotate_frequencies};
pub use query::{QueryRequest, derivation_query, to_query};
