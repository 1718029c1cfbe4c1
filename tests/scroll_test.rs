use tickertape::ticker::{DisplaySegment, ScrollAnimator, SegmentColor};

fn segment(x: i32, width: i32) -> DisplaySegment {
    DisplaySegment {
        text: "X".to_string(),
        color: SegmentColor::Gray,
        x,
        width,
    }
}

#[test]
fn single_segment_wraps_once_fully_off_screen() {
    let animator = ScrollAnimator::new(64);
    let mut segments = vec![segment(64, 30)];

    for tick in 1..=47 {
        assert!(!animator.tick(&mut segments, 2), "wrapped early at tick {tick}");
    }
    // Right edge sits exactly on the border; not yet gone.
    assert_eq!(segments[0].x, -30);

    assert!(animator.tick(&mut segments, 2));
    assert_eq!(segments[0].x, 64);
}

#[test]
fn wrap_restores_contiguous_layout() {
    let animator = ScrollAnimator::new(64);
    let mut segments = vec![segment(64, 40), segment(104, 25), segment(129, 35)];

    let mut wrapped = false;
    while !wrapped {
        wrapped = animator.tick(&mut segments, 3);
    }

    let xs: Vec<i32> = segments.iter().map(|s| s.x).collect();
    assert_eq!(xs, [64, 104, 129]);
}

#[test]
fn positions_decrease_between_wraps() {
    let animator = ScrollAnimator::new(64);
    let mut segments = vec![segment(64, 12), segment(76, 12)];

    let mut previous: Vec<i32> = segments.iter().map(|s| s.x).collect();
    for _ in 0..20 {
        if animator.tick(&mut segments, 1) {
            break;
        }
        let current: Vec<i32> = segments.iter().map(|s| s.x).collect();
        assert!(current.iter().zip(&previous).all(|(c, p)| c < p));
        previous = current;
    }
}

#[test]
fn only_trailing_segment_triggers_wrap() {
    let animator = ScrollAnimator::new(64);
    // The leading segment is long gone but the trailing one is visible.
    let mut segments = vec![segment(-200, 10), segment(10, 10)];

    assert!(!animator.tick(&mut segments, 1));
    assert_eq!(segments[0].x, -201);
}

#[test]
fn empty_strip_is_a_no_op() {
    let animator = ScrollAnimator::new(64);
    let mut segments: Vec<DisplaySegment> = Vec::new();

    assert!(!animator.tick(&mut segments, 2));
    assert!(segments.is_empty());
}
