/// 转换示例：把 Bootstrap class 属性值转换为 Tailwind
///
/// 运行示例：
/// ```bash
/// cargo run --example convert_classes -p crosswind-bs-index
/// ```

use crosswind_bs_index::{Converter, MappingTables};
use crosswind_core::{BreakpointStrategy, ConvertOptions};

fn main() {
    // 1. 构建内置映射表
    let tables = MappingTables::bootstrap().expect("Failed to build mapping tables");
    println!("✓ 加载映射表：{} 条规则\n", tables.rule_count());

    // 2. 测试各种 class 属性值
    let test_cases = vec![
        // 简单改名
        "d-flex align-items-center",
        // 响应式
        "d-none d-md-block",
        // 组合展开
        "text-bg-primary translate-middle",
        // 刻度换算
        "m-3 p-4 mt-n2",
        // 颜色
        "rounded-circle border-success bg-primary-subtle",
        // 状态后缀
        "link-offset-2-hover",
        // 无法转换
        "btn-glow-xyz col-md-6 shadow-md-sm",
    ];

    for strategy in [BreakpointStrategy::Nearest, BreakpointStrategy::Exact] {
        let converter = Converter::new(
            &tables,
            ConvertOptions::default().with_breakpoint_strategy(strategy),
        );

        println!("🔄 Strategy: {:?}", strategy);
        println!("{}", "=".repeat(80));

        for input in &test_cases {
            let result = converter.convert(input);
            println!("\n📝 Input:  {}", input);
            println!("   Output: {}", result.output_string());
            for warning in &result.warnings {
                println!("   ⚠️  {:?}: {}", warning.kind, warning.message);
            }
            if let Some(screens) = &result.custom_screens {
                let widths: Vec<String> = screens
                    .iter()
                    .map(|s| format!("{}: {}px", s.name, s.min_width_px))
                    .collect();
                println!("   📐 screens: {}", widths.join(", "));
            }
        }

        println!("\n{}\n", "=".repeat(80));
    }

    println!("✨ Done!");
}
