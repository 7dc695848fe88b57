use super::*;

fn numeric(frame: &str, suffix: &str) -> u32 {
    frame.strip_suffix(suffix).unwrap_or(frame).parse().expect("numeric frame")
}

#[test]
fn counter_climbs_monotonically_to_exact_target() {
    let animation = CounterAnimation::new(150, "%");
    let frames: Vec<String> = animation.frames().collect();

    assert_eq!(frames.last().map(String::as_str), Some("150%"));
    let values: Vec<u32> = frames.iter().map(|f| numeric(f, "%")).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]), "frames must never decrease: {values:?}");
    assert!(values.iter().all(|v| *v <= 150));
    assert_eq!(values.iter().filter(|v| **v == 150).count(), 1, "target shown once, then stop");
}

#[test]
fn frame_count_matches_duration_over_tick() {
    let animation = CounterAnimation::new(150, "%");
    let count = animation.frames().count();
    let expected = (COUNTER_DURATION_MS / COUNTER_TICK_MS) as usize;
    assert!((expected..=expected + 1).contains(&count), "got {count} frames");
}

#[test]
fn first_frame_starts_near_zero() {
    let animation = CounterAnimation::new(150, "+");
    let first = animation.frames().next().expect("at least one frame");
    assert_eq!(first, "1+");
}

#[test]
fn zero_target_finishes_immediately() {
    let animation = CounterAnimation::new(0, "");
    let frames: Vec<String> = animation.frames().collect();
    assert_eq!(frames, vec!["0".to_owned()]);
}

#[test]
fn small_target_holds_values_between_increments() {
    let animation = CounterAnimation::new(5, "");
    let frames: Vec<String> = animation.frames().collect();
    assert_eq!(frames.first().map(String::as_str), Some("0"));
    assert_eq!(frames.last().map(String::as_str), Some("5"));
}

#[test]
fn from_data_parses_like_parse_int() {
    let animation = CounterAnimation::from_data(Some(" 42px"), Some("+")).expect("parses");
    assert_eq!(animation.target(), 42);
    assert_eq!(animation.frames().last().as_deref(), Some("42+"));
}

#[test]
fn from_data_rejects_missing_or_non_numeric_target() {
    assert_eq!(CounterAnimation::from_data(None, Some("%")), None);
    assert_eq!(CounterAnimation::from_data(Some("abc"), None), None);
    assert_eq!(CounterAnimation::from_data(Some(""), None), None);
}

#[test]
fn missing_suffix_renders_bare_number() {
    let animation = CounterAnimation::from_data(Some("12"), None).expect("parses");
    assert_eq!(animation.frames().last().as_deref(), Some("12"));
}

#[test]
fn from_data_accepts_explicit_sign() {
    let plus = CounterAnimation::from_data(Some("+150"), Some("%")).expect("parses");
    assert_eq!(plus.target(), 150);

    let minus = CounterAnimation::from_data(Some(" -5"), None).expect("parses");
    assert_eq!(minus.target(), 0);
    assert_eq!(minus.frames().last().as_deref(), Some("0"));
}

#[test]
fn from_data_rejects_bare_sign() {
    assert_eq!(CounterAnimation::from_data(Some("-"), None), None);
    assert_eq!(CounterAnimation::from_data(Some("+x"), None), None);
    assert_eq!(CounterAnimation::from_data(Some("--5"), None), None);
}

#[test]
fn from_data_saturates_oversized_target() {
    let animation = CounterAnimation::from_data(Some("99999999999"), None).expect("parses");
    assert_eq!(animation.target(), u32::MAX);
    assert_eq!(animation.frames().last(), Some(u32::MAX.to_string()));
}
