pub mod breakpoint;
pub mod entries;
pub mod error;
pub mod options;
pub mod tokenize;
pub mod types;

// Re-export commonly used types
pub use breakpoint::{BootstrapBreakpoint, BreakpointSpec, Origin, TailwindBreakpoint};
pub use entries::deserialize_entries;
pub use error::ConfigError;
pub use options::{BreakpointStrategy, ColorShade, ConvertOptions, SpacingStrictness};
pub use tokenize::tokenize;
pub use types::{ConversionResult, RawToken, Warning, WarningKind};
