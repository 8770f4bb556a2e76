pub mod breakpoint;
pub mod compose;
pub mod converter;
pub mod loader;
pub mod plugin_map;
pub mod resolver;
pub mod rule;
pub mod tables;
pub mod value_map;

// Re-export main types
pub use breakpoint::{custom_screens_table, remap, RemappedBreakpoint};
pub use compose::{compose, ResolvedToken};
pub use converter::Converter;
pub use loader::{load_extension_from_json, load_rules_from_json};
pub use resolver::{resolve, Resolution};
pub use rule::{MappingRule, OutputTemplate, RuleKind, RuleTable, ScaleEntry, ScaleTable};
pub use tables::{MappingTables, RuleMatch};
