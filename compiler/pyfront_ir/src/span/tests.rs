use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn test_span_merge_is_order_independent() {
    let a = Span::new(10, 20);
    let b = Span::new(4, 12);
    assert_eq!(a.merge(b), Span::new(4, 20));
    assert_eq!(b.merge(a), Span::new(4, 20));
}

#[test]
fn test_span_point_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn test_span_from_offsets_saturates() {
    let huge = usize::try_from(u64::from(u32::MAX) + 10).unwrap_or(usize::MAX);
    let span = Span::from_offsets(3, huge);
    assert_eq!(span.start, 3);
    assert_eq!(span.end, u32::MAX);
}

#[test]
fn test_span_debug_format() {
    assert_eq!(format!("{:?}", Span::new(0, 4)), "0..4");
    assert_eq!(Span::default(), Span::DUMMY);
}
