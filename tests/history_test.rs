use tickertape::models::Symbol;
use tickertape::ticker::{PriceHistory, Trend};

#[test]
fn absence_never_erases_known_price() {
    let symbol = Symbol::from("AAPL");
    let mut history = PriceHistory::new();

    let observations = [None, Some(100.0), None, Some(105.0)];
    let expected_trends = [Trend::Unknown, Trend::Unknown, Trend::Unknown, Trend::Up];
    let expected_last = [None, Some(100.0), Some(100.0), Some(105.0)];

    for ((observed, trend), last) in observations
        .into_iter()
        .zip(expected_trends)
        .zip(expected_last)
    {
        assert_eq!(history.update(&symbol, observed), trend);
        assert_eq!(history.last_known(&symbol), last);
    }
}

#[test]
fn down_and_flat() {
    let symbol = Symbol::from("TSLA");
    let mut history = PriceHistory::new();

    history.update(&symbol, Some(250.0));
    assert_eq!(history.update(&symbol, Some(249.99)), Trend::Down);
    assert_eq!(history.update(&symbol, Some(249.99)), Trend::Flat);
    assert_eq!(history.last_known(&symbol), Some(249.99));
}

#[test]
fn comparison_is_exact() {
    let symbol = Symbol::from("NVDA");
    let mut history = PriceHistory::new();

    history.update(&symbol, Some(0.1 + 0.2));
    // 0.1 + 0.2 is slightly above 0.3 in binary floating point.
    assert_eq!(history.update(&symbol, Some(0.3)), Trend::Down);
}

#[test]
fn symbols_are_tracked_independently() {
    let a = Symbol::from("A");
    let b = Symbol::from("B");
    let mut history = PriceHistory::new();

    history.update(&a, Some(10.0));
    assert_eq!(history.last_known(&b), None);
    assert_eq!(history.update(&b, Some(5.0)), Trend::Unknown);
    assert_eq!(history.update(&a, Some(11.0)), Trend::Up);
}
