//! Property-based tests for the conversion pipeline
//!
//! - output never has fewer classes than input tokens
//! - unknown tokens survive verbatim at their relative position
//! - breakpoint remapping preserves order under both strategies
//! - conversion is deterministic

use crosswind_bs_index::{remap, Converter, MappingTables};
use crosswind_core::{BootstrapBreakpoint, BreakpointStrategy, ConvertOptions, WarningKind};
use proptest::prelude::*;

/// Bootstrap classes the built-in tables understand
const KNOWN: &[&str] = &[
    "d-flex", "d-none", "d-md-block", "m-3", "mt-n2", "px-lg-5", "gap-2",
    "text-center", "text-primary", "text-bg-success", "bg-light", "border",
    "border-danger", "rounded-circle", "rounded-3", "shadow", "fw-bold",
    "fs-5", "lh-sm", "w-50", "h-100", "vstack", "translate-middle",
    "sticky-lg-top", "fixed-top", "visually-hidden", "link-offset-2-hover",
    "align-items-center", "justify-content-between", "flex-column",
];

/// Tailwind-only classes: none of them is Bootstrap syntax
const TAILWIND_ONLY: &[&str] = &[
    "flex", "hidden", "md:block", "space-x-4", "bg-blue-500", "items-center",
    "w-screen", "grid-cols-3", "rounded-lg", "hover:underline", "font-bold",
    "tracking-wide", "text-blue-600", "justify-between", "mt-px",
];

fn tables() -> MappingTables {
    MappingTables::bootstrap().expect("Failed to build mapping tables")
}

fn known_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(KNOWN).prop_map(str::to_string)
}

/// 不会命中任何词干的 token
fn unknown_strategy() -> impl Strategy<Value = String> {
    "qx[a-z]{1,6}(-[a-z0-9]{1,4})?"
}

fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => known_strategy(),
        1 => unknown_strategy(),
    ]
}

fn breakpoint_strategy() -> impl Strategy<Value = BootstrapBreakpoint> {
    prop::sample::select(BootstrapBreakpoint::ALL.to_vec())
}

fn remap_strategy() -> impl Strategy<Value = BreakpointStrategy> {
    prop_oneof![
        Just(BreakpointStrategy::Nearest),
        Just(BreakpointStrategy::Exact),
    ]
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_output_never_shrinks(tokens in prop::collection::vec(token_strategy(), 0..12)) {
            let tables = tables();
            let converter = Converter::new(&tables, ConvertOptions::default());

            let result = converter.convert(&tokens.join(" "));
            prop_assert!(result.output_classes.len() >= tokens.len());
        }

        #[test]
        fn test_unknown_token_kept_in_place(
            before in prop::collection::vec(known_strategy(), 0..6),
            unknown in unknown_strategy(),
            after in prop::collection::vec(known_strategy(), 0..6),
        ) {
            let tables = tables();
            let converter = Converter::new(&tables, ConvertOptions::default());

            let mut tokens = before.clone();
            tokens.push(unknown.clone());
            tokens.extend(after);
            let result = converter.convert(&tokens.join(" "));

            // 前面每个 token 单独转换的输出数之和就是 unknown 的下标
            let offset: usize = before
                .iter()
                .map(|t| converter.convert(t).output_classes.len())
                .sum();
            prop_assert_eq!(&result.output_classes[offset], &unknown);

            let warning = result
                .warnings
                .iter()
                .find(|w| w.source_token.text == unknown)
                .expect("unknown token should produce a warning");
            prop_assert_eq!(warning.kind, WarningKind::UnrecognizedToken);
            prop_assert_eq!(warning.source_token.position, before.len());
        }

        #[test]
        fn test_breakpoints_stay_ordered(
            a in breakpoint_strategy(),
            b in breakpoint_strategy(),
            strategy in remap_strategy(),
        ) {
            let ra = remap(Some(a), strategy).unwrap();
            let rb = remap(Some(b), strategy).unwrap();
            prop_assert_eq!(a.cmp(&b), ra.screen.cmp(&rb.screen));
        }

        #[test]
        fn test_conversion_is_deterministic(
            tokens in prop::collection::vec(token_strategy(), 0..12),
            strategy in remap_strategy(),
        ) {
            let tables = tables();
            let options = ConvertOptions::default().with_breakpoint_strategy(strategy);
            let input = tokens.join(" ");

            let first = Converter::new(&tables, options.clone()).convert(&input);
            let second = Converter::new(&tables, options).convert(&input);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_tailwind_input_is_left_alone(
            tokens in prop::collection::vec(prop::sample::select(TAILWIND_ONLY), 1..8),
        ) {
            let tables = tables();
            let converter = Converter::new(&tables, ConvertOptions::default());

            let result = converter.convert(&tokens.join(" "));
            prop_assert_eq!(&result.output_classes, &tokens);
            prop_assert_eq!(result.warnings.len(), tokens.len());
            prop_assert!(result
                .warnings
                .iter()
                .all(|w| w.kind == WarningKind::UnrecognizedToken));
        }
    }
}
