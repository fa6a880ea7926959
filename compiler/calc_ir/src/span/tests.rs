use super::*;
use pretty_assertions::assert_eq;

#[test]
fn from_range_saturates() {
    assert_eq!(Span::from_range(3..7), Span::new(3, 7));
    let huge = u32::MAX as usize + 10;
    assert_eq!(Span::from_range(1..huge), Span::new(1, u32::MAX));
}

#[test]
fn merge_covers_both() {
    assert_eq!(Span::new(4, 6).merge(Span::new(1, 2)), Span::new(1, 6));
    assert_eq!(Span::new(2, 9).to_range(), 2..9);
    assert_eq!(format!("{:?}", Span::DUMMY), "0..0");
}
