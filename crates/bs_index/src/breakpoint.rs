use crosswind_core::{BootstrapBreakpoint, BreakpointSpec, BreakpointStrategy, Origin, TailwindBreakpoint};
use serde::{Deserialize, Serialize};

/// 重映射后的断点
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemappedBreakpoint {
    pub screen: TailwindBreakpoint,
    /// 调用方需要写入 [`custom_screens_table`] 给出的 `screens` 配置
    pub requires_custom_screens: bool,
}

/// 按档位序号映射：第 n 档对第 n 档，xxl → 2xl
pub fn nearest(breakpoint: BootstrapBreakpoint) -> TailwindBreakpoint {
    match breakpoint {
        BootstrapBreakpoint::Sm => TailwindBreakpoint::Sm,
        BootstrapBreakpoint::Md => TailwindBreakpoint::Md,
        BootstrapBreakpoint::Lg => TailwindBreakpoint::Lg,
        BootstrapBreakpoint::Xl => TailwindBreakpoint::Xl,
        BootstrapBreakpoint::Xxl => TailwindBreakpoint::Xxl2,
    }
}

/// 把 Bootstrap 断点换成 Tailwind 断点
///
/// 两种策略都保持顺序：A < B ⇒ remap(A) < remap(B)
pub fn remap(
    breakpoint: Option<BootstrapBreakpoint>,
    strategy: BreakpointStrategy,
) -> Option<RemappedBreakpoint> {
    let breakpoint = breakpoint?;
    Some(RemappedBreakpoint {
        screen: nearest(breakpoint),
        requires_custom_screens: strategy == BreakpointStrategy::Exact,
    })
}

/// `exact` 策略下的 `screens` 配置：Tailwind 名称 + Bootstrap 像素值
pub fn custom_screens_table() -> Vec<BreakpointSpec> {
    BootstrapBreakpoint::ALL
        .iter()
        .map(|bp| BreakpointSpec::new(nearest(*bp).as_str(), bp.min_width_px(), Origin::Tailwind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STRATEGIES: [BreakpointStrategy; 2] = [BreakpointStrategy::Nearest, BreakpointStrategy::Exact];

    #[test]
    fn test_nearest_by_ordinal() {
        for bp in BootstrapBreakpoint::ALL {
            assert_eq!(nearest(bp).ordinal(), bp.ordinal());
        }
        assert_eq!(nearest(BootstrapBreakpoint::Xxl), TailwindBreakpoint::Xxl2);
    }

    #[test]
    fn test_remap_none() {
        for strategy in STRATEGIES {
            assert_eq!(remap(None, strategy), None);
        }
    }

    #[test]
    fn test_exact_sets_flag() {
        let md = remap(Some(BootstrapBreakpoint::Md), BreakpointStrategy::Exact).unwrap();
        assert_eq!(md.screen, TailwindBreakpoint::Md);
        assert!(md.requires_custom_screens);

        let md = remap(Some(BootstrapBreakpoint::Md), BreakpointStrategy::Nearest).unwrap();
        assert!(!md.requires_custom_screens);
    }

    #[test]
    fn test_remap_is_monotonic() {
        for strategy in STRATEGIES {
            for a in BootstrapBreakpoint::ALL {
                for b in BootstrapBreakpoint::ALL {
                    if a < b {
                        let (ra, rb) = (remap(Some(a), strategy), remap(Some(b), strategy));
                        assert!(ra.unwrap().screen < rb.unwrap().screen, "{} < {}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_custom_screens_table() {
        let screens = custom_screens_table();
        let pairs: Vec<(&str, u32)> = screens
            .iter()
            .map(|s| (s.name.as_str(), s.min_width_px))
            .collect();
        assert_eq!(
            pairs,
            vec![("sm", 576), ("md", 768), ("lg", 992), ("xl", 1200), ("2xl", 1400)]
        );
        assert!(screens.iter().all(|s| s.origin == Origin::Tailwind));
    }
}
