use expectrl::{Regex, spawn};

#[test]
fn prints_sum_for_even_bound() {
    let mut p = spawn(even_sum_command()).expect("spawn binary");
    p.expect(Regex("Enter a number: ")).expect("input prompt");
    p.send_line("10").expect("bound input");
    p.expect(Regex("Sum of even numbers from 1 to 10 is: 30"))
        .expect("sum line");
    p.expect(expectrl::Eof).expect("process exits");
}

#[test]
fn odd_bound_stops_below_it() {
    let mut p = spawn(even_sum_command()).expect("spawn binary");
    p.expect(Regex("Enter a number: ")).expect("input prompt");
    p.send_line("7").expect("bound input");
    p.expect(Regex("Sum of even numbers from 1 to 7 is: 12"))
        .expect("sum line");
    p.expect(expectrl::Eof).expect("process exits");
}

#[test]
fn bound_below_two_yields_zero() {
    let mut p = spawn(even_sum_command()).expect("spawn binary");
    p.expect(Regex("Enter a number: ")).expect("input prompt");
    p.send_line("1").expect("bound input");
    p.expect(Regex("Sum of even numbers from 1 to 1 is: 0"))
        .expect("sum line");
    p.expect(expectrl::Eof).expect("process exits");
}

#[test]
fn negative_bound_yields_zero() {
    let mut p = spawn(even_sum_command()).expect("spawn binary");
    p.expect(Regex("Enter a number: ")).expect("input prompt");
    p.send_line("-12").expect("bound input");
    p.expect(Regex("Sum of even numbers from 1 to -12 is: 0"))
        .expect("sum line");
    p.expect(expectrl::Eof).expect("process exits");
}

#[test]
fn non_numeric_input_fails_with_parse_error() {
    let mut p = spawn(even_sum_command()).expect("spawn binary");
    p.expect(Regex("Enter a number: ")).expect("input prompt");
    p.send_line("abc").expect("bad input");
    p.expect(Regex("Failed to parse bound 'abc'"))
        .expect("parse error surfaces");
    p.expect(expectrl::Eof).expect("process exits");
}

fn even_sum_command() -> String {
    format!("{} even-sum", binary_path())
}

fn binary_path() -> String {
    std::env::var("CARGO_BIN_EXE_promptpack")
        .unwrap_or_else(|_| "target/debug/promptpack".to_string())
}
