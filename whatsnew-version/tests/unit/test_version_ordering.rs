use rand::Rng;
use std::cmp::Ordering;
use whatsnew_version::Version;

/// 随机版本号,每段取值范围较小以制造相等段
fn random_versions(count: usize) -> Vec<Version> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            Version::with_build(
                rng.gen_range(0..4),
                rng.gen_range(0..12),
                rng.gen_range(0..4),
                rng.gen_range(0..120),
            )
        })
        .collect()
}

/// 按数值逐段比较四段文本
fn numeric_text_cmp(a: &str, b: &str) -> Ordering {
    let segments = |s: &str| -> Vec<u64> { s.split('.').map(|t| t.parse().unwrap()).collect() };
    segments(a).cmp(&segments(b))
}

// ============================================================================
// 数值比较 (非字典序)
// ============================================================================

#[test]
fn test_ordering_十大于二() {
    let two = Version::with_build(2, 0, 0, 0);
    let ten = Version::with_build(10, 0, 0, 0);

    assert!(!(two > ten));
    assert!(ten > two);
}

#[test]
fn test_ordering_与文本数值比较一致() {
    let versions = random_versions(200);
    for a in &versions {
        for b in &versions {
            assert_eq!(
                a.cmp(b),
                numeric_text_cmp(&a.to_string(), &b.to_string()),
                "{} vs {}",
                a,
                b
            );
        }
    }
}

// ============================================================================
// 全序性质
// ============================================================================

#[test]
fn test_ordering_自反() {
    for v in random_versions(200) {
        assert_eq!(v.cmp(&v), Ordering::Equal);
    }
}

#[test]
fn test_ordering_反对称() {
    let versions = random_versions(100);
    for a in &versions {
        for b in &versions {
            if a <= b && b <= a {
                assert_eq!(a, b);
            }
            assert_eq!(a.cmp(b), b.cmp(a).reverse());
        }
    }
}

#[test]
fn test_ordering_传递() {
    let versions = random_versions(40);
    for a in &versions {
        for b in &versions {
            for c in &versions {
                if a <= b && b <= c {
                    assert!(a <= c, "{} <= {} <= {}", a, b, c);
                }
            }
        }
    }
}

#[test]
fn test_ordering_排序后单调() {
    let mut versions = random_versions(500);
    versions.sort();
    assert!(versions.windows(2).all(|pair| pair[0] <= pair[1]));
}
