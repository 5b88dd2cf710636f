//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod script;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_name};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use script::{ScriptRequest, handle_request, run_script};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_path};
