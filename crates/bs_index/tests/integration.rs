use crosswind_bs_index::{
    load_extension_from_json, load_rules_from_json, Converter, MappingTables,
};
use crosswind_core::{
    BreakpointStrategy, ColorShade, ConvertOptions, Origin, SpacingStrictness, WarningKind,
};
use pretty_assertions::assert_eq;

fn convert(input: &str) -> crosswind_core::ConversionResult {
    let tables = MappingTables::bootstrap().expect("Failed to build mapping tables");
    Converter::new(&tables, ConvertOptions::default()).convert(input)
}

#[test]
fn test_end_to_end_rename() {
    let result = convert("d-flex");
    assert_eq!(result.output_string(), "flex");
    assert!(result.is_clean());
}

#[test]
fn test_end_to_end_responsive() {
    let result = convert("d-none d-md-block");
    assert_eq!(result.output_classes, vec!["hidden", "md:block"]);
    assert!(result.warnings.is_empty());
    assert_eq!(result.custom_screens, None);
}

#[test]
fn test_end_to_end_composite() {
    let result = convert("text-bg-primary");
    assert_eq!(result.output_classes, vec!["bg-blue-600", "text-white"]);

    let result = convert("text-bg-warning p-2");
    assert_eq!(result.output_classes, vec!["bg-yellow-400", "text-black", "p-2"]);
}

#[test]
fn test_end_to_end_scale_remap() {
    let result = convert("m-3 p-4");
    assert_eq!(result.output_string(), "m-4 p-6");

    let result = convert("mt-n3 mx-auto");
    assert_eq!(result.output_string(), "-mt-4 mx-auto");
}

#[test]
fn test_end_to_end_exact_key_and_color() {
    let result = convert("rounded-circle border-success");
    assert_eq!(result.output_classes, vec!["rounded-full", "border-green-600"]);
}

#[test]
fn test_end_to_end_unknown_token() {
    let result = convert("btn-glow-xyz");
    assert_eq!(result.output_classes, vec!["btn-glow-xyz"]);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, WarningKind::UnrecognizedToken);
    assert_eq!(result.warnings[0].source_token.position, 0);
    assert_eq!(result.warnings[0].source_token.text, "btn-glow-xyz");
}

#[test]
fn test_mixed_attribute_keeps_order() {
    let result = convert("card d-flex btn-glow-xyz align-items-center text-bg-dark gap-2");
    assert_eq!(
        result.output_classes,
        vec![
            "card",
            "flex",
            "btn-glow-xyz",
            "items-center",
            "bg-gray-900",
            "text-white",
            "gap-2",
        ]
    );
    let positions: Vec<usize> = result
        .warnings
        .iter()
        .map(|w| w.source_token.position)
        .collect();
    assert_eq!(positions, vec![0, 2]);
}

#[test]
fn test_duplicates_preserved() {
    let result = convert("m-3 m-3 d-flex");
    assert_eq!(result.output_classes, vec!["m-4", "m-4", "flex"]);
}

#[test]
fn test_grid_classes_pass_through() {
    let result = convert("row col-md-6 g-3");
    assert_eq!(result.output_classes, vec!["row", "col-md-6", "g-3"]);
    assert_eq!(
        result.warnings_of(WarningKind::UnrecognizedToken).count(),
        3
    );
}

#[test]
fn test_invalid_modifier_combination() {
    let result = convert("shadow-md-sm m-6 d-flex");
    assert_eq!(result.output_classes, vec!["shadow-md-sm", "m-6", "flex"]);
    assert_eq!(
        result
            .warnings_of(WarningKind::InvalidModifierCombination)
            .count(),
        2
    );
}

#[test]
fn test_link_state_and_sticky_breakpoint() {
    let result = convert("link-offset-2-hover sticky-md-top");
    assert_eq!(
        result.output_classes,
        vec!["hover:underline-offset-2", "md:sticky", "md:top-0", "md:z-[1020]"]
    );
}

#[test]
fn test_breakpoint_on_fixed_text_utilities() {
    let result = convert("text-md-primary text-lg-nowrap text-md-center");
    assert_eq!(
        result.output_classes,
        vec!["text-md-primary", "text-lg-nowrap", "md:text-center"]
    );
    assert_eq!(result.warnings.len(), 2);
    assert!(result
        .warnings
        .iter()
        .all(|w| w.kind == WarningKind::InvalidModifierCombination));
    assert_eq!(result.warnings[1].source_token.position, 1);
}

#[test]
fn test_state_suffixes() {
    let result = convert("link-primary-hover link-offset-2-focus link-underline-opacity-25-hover");
    assert_eq!(
        result.output_classes,
        vec![
            "link-primary-hover",
            "link-offset-2-focus",
            "hover:decoration-[color:color-mix(in_srgb,currentColor_25%,transparent)]",
        ]
    );
    assert_eq!(
        result
            .warnings_of(WarningKind::InvalidModifierCombination)
            .count(),
        2
    );
}

#[test]
fn test_important_composite_with_variants() {
    let result = convert("!stretched-link !mt-n3");
    assert_eq!(
        result.output_classes,
        vec![
            "after:!absolute",
            "after:!inset-0",
            "after:!z-[1]",
            "after:!content-['']",
            "!-mt-4",
        ]
    );
    assert!(result.is_clean());
}

#[test]
fn test_exact_strategy_emits_custom_screens() {
    let tables = MappingTables::bootstrap().unwrap();
    let options = ConvertOptions::default().with_breakpoint_strategy(BreakpointStrategy::Exact);
    let converter = Converter::new(&tables, options);

    let result = converter.convert("d-none d-lg-block");
    assert_eq!(result.output_classes, vec!["hidden", "lg:block"]);

    let screens = result.custom_screens.expect("exact strategy should emit screens");
    let lg = screens.iter().find(|s| s.name == "lg").unwrap();
    assert_eq!(lg.min_width_px, 992);
    assert_eq!(lg.origin, Origin::Tailwind);

    // 没有断点时不需要 screens
    assert_eq!(converter.convert("d-block").custom_screens, None);
}

#[test]
fn test_strict_spacing() {
    let tables = MappingTables::bootstrap().unwrap();
    let options = ConvertOptions::default().with_spacing_strictness(SpacingStrictness::Strict);
    let converter = Converter::new(&tables, options);

    let result = converter.convert("fs-1 fs-5 m-3");
    assert_eq!(result.output_classes, vec!["fs-1", "text-xl", "m-4"]);
    assert_eq!(
        result.warnings[0].kind,
        WarningKind::InvalidModifierCombination
    );
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_color_overrides_from_json() {
    let tables = MappingTables::bootstrap().unwrap();
    let options = ConvertOptions::from_json(
        r#"{ "colorOverrides": { "primary": { "color": "indigo", "shade": 700 } } }"#,
    )
    .unwrap();
    let converter = Converter::new(&tables, options);

    let result = converter.convert("text-primary bg-primary-subtle btn-primary");
    assert_eq!(
        result.output_classes,
        vec!["text-indigo-700", "bg-indigo-100", "btn-primary"]
    );

    let options = ConvertOptions::default()
        .with_color_override("success", ColorShade::new("emerald", Some(500)))
        .unwrap();
    let result = Converter::new(&tables, options).convert("border-success");
    assert_eq!(result.output_string(), "border-emerald-500");
}

#[test]
fn test_user_rule_table() {
    let json = r#"[
        { "match": "btn", "kind": "composite",
          "outputs": [
            { "type": "literal", "class": "inline-block" },
            { "type": "literal", "class": "px-3" },
            { "type": "literal", "class": "py-1.5" },
            { "type": "literal", "class": "rounded-md" }
          ] },
        { "match": "btn-primary", "kind": "composite",
          "outputs": [
            { "type": "literal", "class": "bg-blue-600" },
            { "type": "literal", "class": "text-white" }
          ] }
    ]"#;
    let table = load_rules_from_json("components", json).unwrap();
    let tables = MappingTables::bootstrap()
        .unwrap()
        .with_rule_table(table)
        .unwrap();
    let converter = Converter::new(&tables, ConvertOptions::default());

    let result = converter.convert("btn btn-primary mt-2");
    assert_eq!(
        result.output_classes,
        vec![
            "inline-block",
            "px-3",
            "py-1.5",
            "rounded-md",
            "bg-blue-600",
            "text-white",
            "mt-2",
        ]
    );
    assert!(result.is_clean());
}

#[test]
fn test_user_rule_ambiguity_warning() {
    let json = r#"[
        { "match": "shadow", "kind": "rename", "outputs": [{ "type": "literal", "class": "shadow-lg" }] }
    ]"#;
    let table = load_rules_from_json("custom", json).unwrap();
    let tables = MappingTables::bootstrap()
        .unwrap()
        .with_rule_table(table)
        .unwrap();
    let converter = Converter::new(&tables, ConvertOptions::default());

    let result = converter.convert("shadow");
    // 先注册的内置规则胜出
    assert_eq!(result.output_classes, vec!["shadow-md"]);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, WarningKind::AmbiguousMapping);
}

#[test]
fn test_user_rule_priority_wins() {
    let json = r#"[
        { "match": "shadow", "kind": "rename",
          "outputs": [{ "type": "literal", "class": "shadow-lg" }], "priority": 5 }
    ]"#;
    let table = load_rules_from_json("custom", json).unwrap();
    let tables = MappingTables::bootstrap()
        .unwrap()
        .with_rule_table(table)
        .unwrap();
    let converter = Converter::new(&tables, ConvertOptions::default());

    let result = converter.convert("shadow");
    assert_eq!(result.output_classes, vec!["shadow-lg"]);
    assert!(result.is_clean());
}

#[test]
fn test_extension_scale_and_color() {
    let json = r#"{
        "scales": { "stack": { "1": { "value": "1" }, "3": { "value": "4" } } },
        "colors": { "brand": { "color": "violet", "shade": 600, "contrast": { "color": "white" } } },
        "rules": [
            { "match": "vstack-gap", "kind": "scaleRemap",
              "outputs": [{ "type": "scaled", "prefix": "space-y", "scale": "stack" }] }
        ]
    }"#;
    let tables =
        load_extension_from_json(MappingTables::bootstrap().unwrap(), "extension", json).unwrap();
    let converter = Converter::new(&tables, ConvertOptions::default());

    let result = converter.convert("vstack vstack-gap-3 text-bg-brand bg-brand-subtle");
    assert_eq!(
        result.output_classes,
        vec![
            "flex",
            "flex-1",
            "flex-col",
            "self-stretch",
            "space-y-4",
            "bg-violet-600",
            "text-white",
            "bg-violet-100",
        ]
    );
}

#[test]
fn test_convert_batch_keeps_order() {
    let tables = MappingTables::bootstrap().unwrap();
    let converter = Converter::new(&tables, ConvertOptions::default());

    let inputs: Vec<String> = (0..64)
        .map(|i| if i % 2 == 0 { format!("m-{}", i % 6) } else { "d-none d-md-flex".to_string() })
        .collect();
    let results = converter.convert_batch(&inputs);

    assert_eq!(results.len(), inputs.len());
    for (input, result) in inputs.iter().zip(&results) {
        assert_eq!(result, &converter.convert(input));
    }
    assert_eq!(results[1].output_string(), "hidden md:flex");
    assert_eq!(results[4].output_string(), "m-6");
}
