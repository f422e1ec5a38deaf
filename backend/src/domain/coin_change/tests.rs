//! Tests for coin change validation and solving.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn limits() -> ValidationLimits {
    ValidationLimits::default()
}

fn coins(values: &[usize]) -> Denominations {
    Denominations::from_values(values.iter().copied()).expect("test sets are non-empty")
}

fn text(raw: &str) -> DenominationsInput {
    DenominationsInput::Text(raw.to_owned())
}

/// Fewest coins by breadth-first search over partial sums.
fn reference_minimum(values: &[usize], amount: usize) -> Option<usize> {
    let mut frontier = vec![0_usize];
    let mut seen = vec![false; amount + 1];
    seen[0] = true;
    for depth in 0..=amount {
        if frontier.contains(&amount) {
            return Some(depth);
        }
        let mut next = Vec::new();
        for sum in frontier {
            for &coin in values {
                let reached = sum + coin;
                if reached <= amount && !seen[reached] {
                    seen[reached] = true;
                    next.push(reached);
                }
            }
        }
        if next.is_empty() {
            return None;
        }
        frontier = next;
    }
    None
}

#[rstest]
#[case(&[1, 2, 5], 11, MinimumCoins::Count(3))]
#[case(&[2], 3, MinimumCoins::Infeasible)]
#[case(&[1], 0, MinimumCoins::Count(0))]
#[case(&[2], 0, MinimumCoins::Count(0))]
#[case(&[1, 3, 4], 6, MinimumCoins::Count(2))]
#[case(&[5, 10], 3, MinimumCoins::Infeasible)]
#[case(&[7], 7, MinimumCoins::Count(1))]
#[case(&[186, 419, 83, 408], 6249, MinimumCoins::Count(20))]
fn solves_known_scenarios(
    #[case] values: &[usize],
    #[case] amount: usize,
    #[case] expected: MinimumCoins,
) {
    assert_eq!(solve(&coins(values), Amount::new(amount)), expected);
}

#[rstest]
fn duplicates_and_order_do_not_change_results() {
    let plain = solve(&coins(&[1, 2, 5]), Amount::new(27));
    let shuffled = solve(&coins(&[5, 1, 5, 2, 1]), Amount::new(27));
    assert_eq!(plain, shuffled);
}

#[rstest]
fn sets_containing_one_are_always_feasible() {
    for amount in 0..200 {
        let result = solve(&coins(&[1, 7, 13]), Amount::new(amount));
        assert!(
            matches!(result, MinimumCoins::Count(_)),
            "amount {amount} should be reachable"
        );
    }
}

#[rstest]
fn matches_exhaustive_search_on_small_inputs() {
    let sets: [&[usize]; 5] = [&[2], &[3, 5], &[1, 5, 6, 9], &[4, 6, 9], &[2, 7, 11]];
    for values in sets {
        for amount in 0..60 {
            let expected = reference_minimum(values, amount)
                .map_or(MinimumCoins::Infeasible, MinimumCoins::Count);
            assert_eq!(
                solve(&coins(values), Amount::new(amount)),
                expected,
                "coins {values:?}, amount {amount}"
            );
        }
    }
}

#[rstest]
fn adding_a_denomination_never_increases_the_count() {
    for amount in 0..80 {
        let smaller = solve(&coins(&[3, 7]), Amount::new(amount));
        let larger = solve(&coins(&[3, 7, 5]), Amount::new(amount));
        if let (MinimumCoins::Count(before), MinimumCoins::Count(after)) = (smaller, larger) {
            assert!(after <= before, "amount {amount}: {after} > {before}");
        }
        if matches!(smaller, MinimumCoins::Count(_)) {
            assert!(matches!(larger, MinimumCoins::Count(_)));
        }
    }
}

#[rstest]
fn huge_denominations_are_inert() {
    let set = Denominations::parse(DenominationsInput::Structured(vec![
        json!(u64::MAX),
        json!(3),
    ]))
    .expect("huge values are still positive integers");
    assert_eq!(solve(&set, Amount::new(9)), MinimumCoins::Count(3));
}

#[rstest]
#[case("1, 2, 5", vec![1, 2, 5])]
#[case("5", vec![5])]
#[case(" 3 ,3,  1 ", vec![3, 1])]
fn parses_text_denominations(#[case] raw: &str, #[case] expected: Vec<usize>) {
    let set = Denominations::parse(text(raw)).expect("valid text");
    assert_eq!(set.values().collect::<Vec<_>>(), expected);
    assert_eq!(set.len(), expected.len());
    assert!(!set.is_empty());
}

#[rstest]
fn parses_structured_denominations_including_numeric_strings() {
    let set = Denominations::parse(DenominationsInput::Structured(vec![
        json!(1),
        json!("2"),
        json!(5),
    ]))
    .expect("valid structured input");
    assert_eq!(set.values().collect::<Vec<_>>(), vec![1, 2, 5]);
}

#[rstest]
fn whole_numbers_with_a_fractional_part_are_denominations() {
    let set = Denominations::parse(DenominationsInput::Structured(vec![
        json!(1),
        json!(2),
        json!(5.0),
    ]))
    .expect("5.0 is a whole number");
    assert_eq!(set.values().collect::<Vec<_>>(), vec![1, 2, 5]);
}

#[rstest]
fn repeated_denominations_collapse_to_first_occurrence() {
    let set = Denominations::parse(DenominationsInput::Structured(vec![
        json!(5),
        json!(1),
        json!("5"),
        json!(2),
        json!(1.0),
    ]))
    .expect("repeats are valid");
    assert_eq!(set.values().collect::<Vec<_>>(), vec![5, 1, 2]);
    assert_eq!(set.len(), 3);
}

#[rstest]
#[case(
    DenominationsInput::Structured(vec![json!(1), json!("x"), json!(5)]),
    DenominationFault::Malformed { index: 1, token: "x".to_owned() }
)]
#[case(
    DenominationsInput::Structured(vec![json!(1.5)]),
    DenominationFault::Malformed { index: 0, token: "1.5".to_owned() }
)]
#[case(
    text("1,,2"),
    DenominationFault::Malformed { index: 1, token: String::new() }
)]
#[case(
    text(""),
    DenominationFault::Malformed { index: 0, token: String::new() }
)]
#[case(text("1, 0"), DenominationFault::NotPositive { index: 1, value: 0 })]
#[case(text("-3"), DenominationFault::NotPositive { index: 0, value: -3 })]
#[case(DenominationsInput::Structured(Vec::new()), DenominationFault::Empty)]
#[case(DenominationsInput::Unsupported(json!(5)), DenominationFault::NotASequence)]
#[case(DenominationsInput::Missing, DenominationFault::Missing)]
fn rejects_invalid_denominations(
    #[case] input: DenominationsInput,
    #[case] expected: DenominationFault,
) {
    assert_eq!(
        Denominations::parse(input),
        Err(CoinChangeValidationError::InvalidDenomination(expected))
    );
}

#[rstest]
#[case(AmountInput::Text("11".to_owned()), 11)]
#[case(AmountInput::Text(" 0 ".to_owned()), 0)]
#[case(AmountInput::Structured(json!(42)), 42)]
#[case(AmountInput::Structured(json!("42")), 42)]
#[case(AmountInput::Structured(json!(11.0)), 11)]
fn parses_amounts(limits: ValidationLimits, #[case] input: AmountInput, #[case] expected: usize) {
    assert_eq!(Amount::parse(input, &limits), Ok(Amount::new(expected)));
}

#[rstest]
#[case(AmountInput::Structured(json!(-5)), AmountFault::Negative { value: -5 })]
#[case(AmountInput::Text("-1".to_owned()), AmountFault::Negative { value: -1 })]
#[case(AmountInput::Text("ten".to_owned()), AmountFault::Malformed { token: "ten".to_owned() })]
#[case(AmountInput::Structured(json!(2.5)), AmountFault::Malformed { token: "2.5".to_owned() })]
#[case(AmountInput::Structured(json!(-5.0)), AmountFault::Negative { value: -5 })]
#[case(AmountInput::Structured(json!(null)), AmountFault::Malformed { token: "null".to_owned() })]
#[case(AmountInput::Missing, AmountFault::Missing)]
fn rejects_invalid_amounts(
    limits: ValidationLimits,
    #[case] input: AmountInput,
    #[case] expected: AmountFault,
) {
    assert_eq!(
        Amount::parse(input, &limits),
        Err(CoinChangeValidationError::InvalidAmount(expected))
    );
}

#[rstest]
fn enforces_the_amount_ceiling() {
    let limits = ValidationLimits::new(100);
    assert_eq!(
        Amount::parse(AmountInput::Structured(json!(100)), &limits),
        Ok(Amount::new(100))
    );
    assert_eq!(
        Amount::parse(AmountInput::Structured(json!(101)), &limits),
        Err(CoinChangeValidationError::InvalidAmount(
            AmountFault::TooLarge {
                value: 101,
                max: 100
            }
        ))
    );
}

#[rstest]
fn text_request_matches_structured_request(limits: ValidationLimits) {
    let from_text = CoinChangeRequest {
        denominations: text("1, 2, 5"),
        amount: AmountInput::Text("11".to_owned()),
    }
    .validate(&limits)
    .expect("text request is valid");
    let from_json = CoinChangeRequest {
        denominations: DenominationsInput::Structured(vec![json!(1), json!(2), json!(5)]),
        amount: AmountInput::Structured(json!(11)),
    }
    .validate(&limits)
    .expect("structured request is valid");

    assert_eq!(from_text, from_json);
    assert_eq!(
        solve(&from_text.denominations, from_text.amount),
        MinimumCoins::Count(3)
    );
}

#[rstest]
fn validation_reports_denominations_before_amount(limits: ValidationLimits) {
    let result = CoinChangeRequest {
        denominations: DenominationsInput::Missing,
        amount: AmountInput::Structured(json!(-5)),
    }
    .validate(&limits);
    assert!(matches!(
        result,
        Err(CoinChangeValidationError::InvalidDenomination(
            DenominationFault::Missing
        ))
    ));
}

#[rstest]
fn validation_caps_distinct_denominations() {
    let limits = ValidationLimits::default().with_max_denominations(3);
    let request = |values: Vec<serde_json::Value>| CoinChangeRequest {
        denominations: DenominationsInput::Structured(values),
        amount: AmountInput::Structured(json!(10)),
    };

    let within = request(vec![json!(1), json!(2), json!(5), json!(5), json!(2)])
        .validate(&limits)
        .expect("three distinct values fit the cap");
    assert_eq!(within.denominations.len(), 3);

    assert_eq!(
        request(vec![json!(1), json!(2), json!(5), json!(10)]).validate(&limits),
        Err(CoinChangeValidationError::InvalidDenomination(
            DenominationFault::TooMany { count: 4, max: 3 }
        ))
    );
}

#[rstest]
fn default_limits_cap_denominations() {
    assert_eq!(
        ValidationLimits::default().max_denominations(),
        DEFAULT_MAX_DENOMINATIONS
    );
}

#[rstest]
#[case(MinimumCoins::Count(0), 0)]
#[case(MinimumCoins::Count(3), 3)]
#[case(MinimumCoins::Infeasible, -1)]
fn wire_encoding(#[case] result: MinimumCoins, #[case] expected: i64) {
    assert_eq!(result.to_wire(), expected);
}

#[rstest]
fn from_values_rejects_empty_and_zero() {
    assert!(Denominations::from_values(Vec::new()).is_none());
    assert!(Denominations::from_values([1, 0]).is_none());
}
