//! End-to-end button sequences against a fresh engine.

use keypad_core::{numeric::evaluate, CalculatorEngine, Evaluation, InputEvent, Operator};

fn run(labels: &[&str]) -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    for label in labels {
        engine.press(label).unwrap();
    }
    engine
}

#[test]
fn test_addition() {
    assert_eq!(run(&["AC", "5", "+", "3", "="]).display(), "8");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(run(&["AC", "1", "÷", "0", "="]).display(), "Error");
}

#[test]
fn test_chain_shows_running_total() {
    let engine = run(&["AC", "5", "+", "3", "-"]);
    assert_eq!(engine.display(), "8");

    let engine = run(&["AC", "5", "+", "3", "-", "2", "="]);
    assert_eq!(engine.display(), "6");
}

#[test]
fn test_percent() {
    assert_eq!(run(&["AC", "5", "%"]).display(), "0.05");
}

#[test]
fn test_double_sign_toggle() {
    assert_eq!(run(&["AC", "7", "+/-", "+/-"]).display(), "7");
}

#[test]
fn test_no_left_to_right_precedence() {
    // 2 + 3 × 4 is (2 + 3) × 4 on this keypad
    assert_eq!(run(&["2", "+", "3", "×", "4", "="]).display(), "20");
}

#[test]
fn test_decimal_arithmetic_keeps_float_text() {
    assert_eq!(run(&[".", "1", "+", ".", "2", "="]).display(), "0.30000000000000004");
}

#[test]
fn test_negative_results() {
    assert_eq!(run(&["3", "-", "1", "0", "="]).display(), "-7");
    assert_eq!(run(&["3", "+/-", "×", "3", "="]).display(), "-9");
}

#[test]
fn test_overflow_shows_error() {
    let mut labels = vec!["9"; 300];
    labels.extend(["×", "="]);
    assert_eq!(run(&labels).display(), "Error");
}

#[test]
fn test_never_two_decimal_points() {
    let alphabet = ["0", "1", "5", ".", "+/-"];
    // Every sequence of length 5 over the alphabet, after a clear
    let mut stack: Vec<Vec<&str>> = vec![vec![]];
    while let Some(seq) = stack.pop() {
        let engine = run(&[&["AC"][..], &seq[..]].concat());
        assert!(
            engine.display().matches('.').count() <= 1,
            "sequence {:?} produced {:?}",
            seq,
            engine.display()
        );
        if seq.len() < 5 {
            for label in alphabet {
                let mut next = seq.clone();
                next.push(label);
                stack.push(next);
            }
        }
    }
}

#[test]
fn test_sign_toggle_twice_restores_display() {
    let inputs: &[&[&str]] = &[
        &["1", "2", "3"],
        &["0", "."],
        &["4", ".", "0", "5"],
        &["9", "%"],
        &["7", "+/-"],
        &["1", "÷", "8", "="],
    ];
    for input in inputs {
        let mut engine = run(input);
        let before = engine.display().to_string();
        engine.sign_toggle();
        engine.sign_toggle();
        assert_eq!(engine.display(), before, "input {:?}", input);
    }
}

#[test]
fn test_clear_always_resets() {
    for input in [&["1", "÷", "0", "="][..], &["5", "+"][..], &["3", ".", "2"][..]] {
        let mut engine = run(input);
        assert_eq!(engine.apply(InputEvent::Clear), "0");
        assert_eq!(engine, CalculatorEngine::new());
        assert_eq!(engine.apply(InputEvent::Clear), "0");
    }
}

#[test]
fn test_evaluate_divide_matches_native_division() {
    for b in [1.0, -2.0, 0.5, 3.0, 1e-9] {
        assert_eq!(evaluate(10.0, b, Operator::Divide), Evaluation::Value(10.0 / b));
    }
    assert_eq!(evaluate(10.0, 0.0, Operator::Divide), Evaluation::Undefined);
}

#[test]
fn test_independent_engines() {
    let mut a = CalculatorEngine::new();
    let mut b = CalculatorEngine::new();
    a.press("4").unwrap();
    a.press("+").unwrap();
    b.press("9").unwrap();

    assert_eq!(a.pending_operator(), Some(Operator::Add));
    assert_eq!(b.pending_operator(), None);
    assert_eq!(b.display(), "9");
}
