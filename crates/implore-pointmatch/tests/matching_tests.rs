//! Point matching integration tests

use implore_pointmatch::{
    IndexPolicy, MatchOptions, PatternError, PatternMatcher, Point, SelectionConfig,
    SelectionList,
};
use rstest::rstest;

fn point(n: i64, xmin: f64, xmax: f64) -> Point {
    Point::new("/foo", n, xmin, xmax)
}

// === Selector-free patterns ===

#[rstest]
#[case("/foo")]
#[case("/fo+")]
#[case("/.*")]
#[case("/foo   # comment")]
fn test_path_only_never_rejects_points(#[case] patt: &str) {
    let pm = PatternMatcher::compile(patt).unwrap();
    for p in [point(0, 0.0, 1.0), point(99, -5.0, 5.0), point(-1, 1e9, 2e9)] {
        assert!(pm.match_path(&p.path));
        assert!(pm.match_point(&p));
    }
}

// === Index selectors ===

#[rstest]
#[case(2, false)]
#[case(3, true)]
#[case(4, false)]
fn test_exact_index(#[case] n: i64, #[case] expected: bool) {
    let pm = PatternMatcher::compile("/foo#3").unwrap();
    assert_eq!(pm.match_point(&point(n, 0.0, 1.0)), expected);
}

#[rstest]
#[case(0, false)]
#[case(1, true)]
#[case(1_000_000, true)]
fn test_open_ended_index_range(#[case] n: i64, #[case] expected: bool) {
    let pm = PatternMatcher::compile("/foo#1:").unwrap();
    assert_eq!(pm.match_point(&point(n, 0.0, 1.0)), expected);
}

#[rstest]
#[case(1, false)]
#[case(2, true)]
#[case(4, true)]
#[case(5, false)]
fn test_closed_open_index_range(#[case] n: i64, #[case] expected: bool) {
    let pm = PatternMatcher::compile("/foo#2:5").unwrap();
    assert_eq!(pm.match_point(&point(n, 0.0, 1.0)), expected);
}

#[test]
fn test_non_integer_index_policy() {
    let pm = PatternMatcher::compile("/foo#2.5").unwrap();
    assert!(pm.match_point(&point(2, 0.0, 1.0)));
    assert!(!pm.match_point(&point(3, 0.0, 1.0)));

    let strict = MatchOptions {
        index_policy: IndexPolicy::Reject,
        ..MatchOptions::default()
    };
    assert!(matches!(
        PatternMatcher::compile_with("/foo#2.5", strict),
        Err(PatternError::MalformedSelector { .. })
    ));
    assert!(PatternMatcher::compile_with("/foo#2", strict).is_ok());
}

// === Position selectors ===

#[rstest]
#[case("/foo@0.0", true)]
#[case("/foo@0.5", true)]
#[case("/foo@1.0", false)]
#[case("/foo@-0.1", false)]
fn test_exact_position_is_half_open(#[case] patt: &str, #[case] expected: bool) {
    let pm = PatternMatcher::compile(patt).unwrap();
    assert_eq!(pm.match_point(&point(0, 0.0, 1.0)), expected);
}

#[rstest]
#[case("/foo@0:2.5", true)]
#[case("/foo@3:5", false)]
#[case("/foo@2.5:2.6", true)]
#[case("/foo@:2", true)]
#[case("/foo@:1.9", false)]
#[case("/foo@2.9:", true)]
#[case("/foo@3:", false)]
fn test_position_range_overlap(#[case] patt: &str, #[case] expected: bool) {
    let pm = PatternMatcher::compile(patt).unwrap();
    assert_eq!(pm.match_point(&point(0, 2.0, 3.0)), expected);
}

// === Comments and normalisation ===

#[test]
fn test_comment_stripping_is_transparent() {
    let with_comment = PatternMatcher::compile("/foo#1:2  # a trailing remark").unwrap();
    let without = PatternMatcher::compile("/foo#1:2").unwrap();
    assert_eq!(with_comment, without);
    assert_eq!(with_comment.pattern(), without.pattern());
}

#[rstest]
#[case("/foo#3   # remark")]
#[case("  /baz/.*@:1.32 ")]
#[case("/bar@2.76:")]
#[case(r"/mail\@host#1:4")]
#[case("/foo@1e-3:inf")]
fn test_recompiling_normalised_text_is_idempotent(#[case] patt: &str) {
    let first = PatternMatcher::compile(patt).unwrap();
    let second = PatternMatcher::compile(&first.to_string()).unwrap();
    assert_eq!(first.selector(), second.selector());

    let points = [
        Point::new("/foo", 3, 0.0, 1.0),
        Point::new("/baz/pi", 1, 1.0, 2.0),
        Point::new("/bar", 0, 2.0, 3.0),
        Point::new("/mail@host", 2, 0.0, 0.5),
    ];
    for p in &points {
        assert_eq!(first.matches(p), second.matches(p));
    }
}

// === Malformed input ===

#[rstest]
#[case("/foo@abc")]
#[case("/foo#1:x")]
#[case("/foo@1.5.2")]
#[case("/foo@1:2@3")]
fn test_malformed_number(#[case] patt: &str) {
    let err = PatternMatcher::compile(patt).unwrap_err();
    assert!(matches!(err, PatternError::MalformedNumber { .. }), "{:?}", err);
    assert_eq!(err.pattern(), patt);
}

#[rstest]
#[case("/foo#")]
#[case("/foo@")]
#[case("/foo@ trailing")]
fn test_malformed_selector(#[case] patt: &str) {
    let err = PatternMatcher::compile(patt).unwrap_err();
    assert!(matches!(err, PatternError::MalformedSelector { .. }), "{:?}", err);
}

#[rstest]
#[case("/foo#1e300", IndexPolicy::Truncate)]
#[case("/foo#1e300", IndexPolicy::Reject)]
#[case("/foo#-1e19", IndexPolicy::Truncate)]
fn test_exact_index_out_of_range(#[case] patt: &str, #[case] policy: IndexPolicy) {
    let options = MatchOptions {
        index_policy: policy,
        ..MatchOptions::default()
    };
    let err = PatternMatcher::compile_with(patt, options).unwrap_err();
    assert!(matches!(err, PatternError::MalformedSelector { .. }), "{:?}", err);
    assert_eq!(err.pattern(), patt);
}

#[test]
fn test_malformed_path() {
    let err = PatternMatcher::compile("/foo[#1").unwrap_err();
    assert!(matches!(err, PatternError::MalformedPath { .. }));
    assert!(err.to_string().contains("/foo[#1"));
}

// === Path matching independence ===

#[rstest]
#[case("/group/h1")]
#[case("/group/h10")]
#[case("/other/group/h1")]
#[case("")]
fn test_path_matching_ignores_selector(#[case] path: &str) {
    let plain = PatternMatcher::compile("/group/h1").unwrap();
    for suffix in ["#0", "#2:", "@1.5", "@:3"] {
        let with_sel = PatternMatcher::compile(&format!("/group/h1{}", suffix)).unwrap();
        assert_eq!(plain.match_path(path), with_sel.match_path(path));
        assert_eq!(plain.search_path(path), with_sel.search_path(path));
    }
}

// === Concurrency ===

#[test]
fn test_shared_matcher_across_threads() {
    let pm = PatternMatcher::compile("/foo#10:20").unwrap();
    let points: Vec<Point> = (0..1000).map(|i| point(i, i as f64, i as f64 + 1.0)).collect();

    let counts: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = points
            .chunks(250)
            .map(|chunk| {
                let pm = &pm;
                s.spawn(move || chunk.iter().filter(|p| pm.matches(*p)).count())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(counts.iter().sum::<usize>(), 10);
}

// === Selection lists ===

#[test]
fn test_selection_list_end_to_end() {
    let text = "\
/foo#0        # first bin
/foo@7.5:     # tail
";
    let list = SelectionList::parse(text, &SelectionConfig::default()).unwrap();
    let points = Point::from_edges("/foo", &[0.0, 2.5, 5.0, 7.5, 10.0]);
    let ns: Vec<i64> = list.select_points(&points).iter().map(|p| p.n).collect();
    assert_eq!(ns, vec![0, 3]);
}
