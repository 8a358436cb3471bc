use console_katas::core::reader::{Prompt, ScalarReader};
use console_katas::utils::validation::{accept_any, in_range, non_negative};

fn run_reader<T, F>(input: &str, read: F) -> (Option<T>, String)
where
    F: FnOnce(&mut ScalarReader<&[u8], &mut Vec<u8>>) -> Option<T>,
{
    let mut out = Vec::new();
    let value = {
        let mut reader = ScalarReader::new(input.as_bytes(), &mut out);
        read(&mut reader)
    };
    (value, String::from_utf8(out).unwrap())
}

#[test]
fn test_radius_reader_reports_each_rejection_then_accepts() {
    let (value, output) = run_reader("abc\n-5\n3\n", |r| {
        r.read_with::<f64, _>(Prompt::new("Enter the circle radius: "), non_negative)
            .unwrap()
    });

    assert_eq!(value, Some(3.0));
    assert_eq!(
        output,
        "Enter the circle radius: Error: please enter a numeric value.\n\
         Enter the circle radius: Error: the value cannot be negative.\n\
         Enter the circle radius: "
    );
    assert_eq!(output.matches("please enter a numeric value").count(), 1);
    assert_eq!(output.matches("cannot be negative").count(), 1);
}

#[test]
fn test_malformed_token_discards_rest_of_line() {
    // "5" shares the line with the junk token and must be thrown away.
    let (value, output) = run_reader("abc 5\n8\n", |r| r.read_value::<i64>("n: ").unwrap());

    assert_eq!(value, Some(8));
    assert_eq!(output, "n: Error: please enter an integer.\nn: ");
}

#[test]
fn test_domain_violation_keeps_rest_of_line() {
    let (value, output) = run_reader("-5 3\n", |r| {
        r.read_with::<f64, _>(Prompt::new("r: "), non_negative).unwrap()
    });

    assert_eq!(value, Some(3.0));
    assert_eq!(output, "r: Error: the value cannot be negative.\nr: ");
}

#[test]
fn test_accepted_token_keeps_rest_of_line() {
    let (values, output) = run_reader("12 18\n", |r| {
        let first = r.read_value::<i64>("a: ").unwrap()?;
        let second = r.read_value::<i64>("b: ").unwrap()?;
        Some((first, second))
    });

    assert_eq!(values, Some((12, 18)));
    assert_eq!(output, "a: b: ");
}

#[test]
fn test_end_of_stream_returns_none() {
    let (value, output) = run_reader("", |r| r.read_value::<f64>("r: ").unwrap());
    assert_eq!(value, None);
    assert_eq!(output, "r: ");
}

#[test]
fn test_end_of_stream_after_rejections() {
    let (value, output) = run_reader("x\n-1\n", |r| {
        r.read_with::<f64, _>(Prompt::new("r: "), non_negative).unwrap()
    });

    assert_eq!(value, None);
    assert_eq!(
        output,
        "r: Error: please enter a numeric value.\n\
         r: Error: the value cannot be negative.\n\
         r: "
    );
}

#[test]
fn test_blank_lines_are_skipped_without_reprompting() {
    let (value, output) = run_reader("\n   \n\t\n42\n", |r| r.read_value::<i64>("n: ").unwrap());
    assert_eq!(value, Some(42));
    assert_eq!(output, "n: ");
}

#[test]
fn test_whole_token_must_parse() {
    let (value, output) = run_reader("3abc\n3\n", |r| r.read_value::<i64>("").unwrap());
    assert_eq!(value, Some(3));
    assert_eq!(output, "Error: please enter an integer.\n");
}

#[test]
fn test_integer_overflow_is_malformed() {
    let (value, output) = run_reader("9223372036854775808\n-9223372036854775808\n", |r| {
        r.read_value::<i64>("").unwrap()
    });
    assert_eq!(value, Some(i64::MIN));
    assert_eq!(output, "Error: please enter an integer.\n");
}

#[test]
fn test_non_finite_reals_are_malformed() {
    let (value, output) = run_reader("inf\nNaN\n0.5\n", |r| {
        r.read_with::<f64, _>(Prompt::new(""), non_negative).unwrap()
    });
    assert_eq!(value, Some(0.5));
    assert_eq!(output.matches("please enter a numeric value").count(), 2);
    assert!(!output.contains("negative"));
}

#[test]
fn test_range_constraint_message() {
    let (value, output) = run_reader("11 0 4\n", |r| {
        r.read_with::<i64, _>(Prompt::new(""), in_range(1_i64, 10)).unwrap()
    });
    assert_eq!(value, Some(4));
    assert_eq!(
        output,
        "Error: the value must be between 1 and 10.\n\
         Error: the value must be between 1 and 10.\n"
    );
}

#[test]
fn test_silent_prompt_with_custom_message() {
    let prompt = Prompt::silent().with_malformed_message("please enter a valid integer");
    let (values, output) = run_reader("1\nfoo bar\n2\n", |r| {
        let mut seen = Vec::new();
        while let Some(n) = r.read_with::<i64, _>(prompt, accept_any).unwrap() {
            seen.push(n);
        }
        Some(seen)
    });

    assert_eq!(values, Some(vec![1, 2]));
    assert_eq!(output, "Error: please enter a valid integer.\n");
}
