use rand::Rng;
use whatsnew_version::Version;

// ============================================================================
// 文本输出
// ============================================================================

#[test]
fn test_render_三段补全构建号() {
    assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3.0");
}

#[test]
fn test_render_四段原样输出() {
    assert_eq!(Version::with_build(10, 20, 30, 40).to_string(), "10.20.30.40");
}

// ============================================================================
// 宽松解析
// ============================================================================

#[test]
fn test_parse_两段补零() {
    assert_eq!(Version::parse("1.2"), Version::with_build(1, 2, 0, 0));
}

#[test]
fn test_parse_空串全零() {
    assert_eq!(Version::parse(""), Version::with_build(0, 0, 0, 0));
}

#[test]
fn test_parse_非数字段按零处理() {
    assert_eq!(Version::parse("1.2.x"), Version::with_build(1, 2, 0, 0));
}

#[test]
fn test_parse_带空白的段按零处理() {
    assert_eq!(Version::parse(" 1.2"), Version::new(0, 2, 0));
}

#[test]
fn test_parse_负数段按零处理() {
    assert_eq!(Version::parse("-1.2.3"), Version::new(0, 2, 3));
}

#[test]
fn test_parse_加号前缀数字可解析() {
    assert_eq!(Version::parse("+1.2"), Version::new(1, 2, 0));
}

#[test]
fn test_parse_超出u64按零处理() {
    assert_eq!(
        Version::parse("1.99999999999999999999999"),
        Version::new(1, 0, 0)
    );
}

#[test]
fn test_parse_连续点号() {
    assert_eq!(Version::parse("1..3"), Version::new(1, 0, 3));
}

// ============================================================================
// 往返
// ============================================================================

#[test]
fn test_render_后解析保持不变() {
    let samples = [
        Version::new(0, 0, 0),
        Version::new(1, 2, 3),
        Version::with_build(4, 0, 12, 9001),
        Version::with_build(u64::MAX, 0, 1, u64::MAX),
    ];
    for version in samples {
        assert_eq!(Version::parse(&version.to_string()), version);
    }
}

#[test]
fn test_render_后解析保持不变_随机四段() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let version = Version::with_build(rng.gen(), rng.gen(), rng.gen(), rng.gen());
        assert_eq!(Version::parse(&version.to_string()), version);
    }
}

#[test]
fn test_render_后解析保持不变_随机三段() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let (major, minor, patch) = (rng.gen(), rng.gen(), rng.gen());
        let version = Version::new(major, minor, patch);
        assert_eq!(version.to_string(), format!("{}.{}.{}.0", major, minor, patch));
        assert_eq!(Version::parse(&version.to_string()), version);
    }
}
