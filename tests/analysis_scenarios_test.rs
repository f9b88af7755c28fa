//! End-to-end analysis of parsed source files, without the CLI.

use complex_lint::{analyze_file, ComplexityReport, StateSpaceWeights, SymbolSnapshot};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn analyze(source: &str) -> Vec<ComplexityReport> {
    let file = syn::parse_file(source).expect("Failed to parse");
    let snapshot = SymbolSnapshot::from_file(&file);
    analyze_file(&file, &snapshot, &StateSpaceWeights::default())
}

fn analyze_one(source: &str) -> ComplexityReport {
    let mut reports = analyze(source);
    assert_eq!(reports.len(), 1, "expected exactly one function");
    reports.remove(0)
}

#[test]
fn test_bool_and_sequence_params_with_single_conditional() {
    let report = analyze_one(indoc! {r#"
        fn clamp(flag: bool, values: Vec<i32>) -> i32 {
            if flag == LIMIT {
                total = 1;
            }
        }
    "#});

    assert_eq!(report.name, "clamp");
    assert_eq!(report.input_state_space, 2000);
    assert_eq!(report.output_state_space, 10);
    assert_eq!(report.branching_factor, 1);
    assert_eq!(report.operational_complexity, 2);
    assert_eq!(report.local_assignment_count, 1);
}

#[test]
fn test_empty_function_is_neutral() {
    let report = analyze_one("fn noop() {}");

    assert_eq!(report.input_state_space, 1);
    assert_eq!(report.output_state_space, 1);
    assert_eq!(report.branching_factor, 0);
    assert_eq!(report.operational_complexity, 0);
    assert_eq!(report.local_assignment_count, 0);
    assert!(report.diagnostics.is_clean());
}

#[test]
fn test_unresolved_parameter_is_neutral() {
    let report = analyze_one("fn accept(widget: Widget) {}");

    assert_eq!(report.input_state_space, 1);
    assert_eq!(report.diagnostics.unresolved, 1);
}

#[test]
fn test_aggregate_parameter_multiplies_fields() {
    let reports = analyze(indoc! {r#"
        struct Toggle {
            enabled: bool,
            label: String,
        }

        fn apply(toggle: Toggle) {}
    "#});

    assert_eq!(reports[0].input_state_space, 20);
}

#[test]
fn test_loop_with_nested_conditionals() {
    let report = analyze_one(indoc! {r#"
        fn scan(items: &[u8]) {
            for item in items {
                if *item > 10 {
                    if *item < 20 {
                        hits += 1;
                    }
                }
            }
        }
    "#});

    assert_eq!(report.input_state_space, 1000);
    assert_eq!(report.branching_factor, 3);
    // two comparisons and one compound assignment
    assert_eq!(report.operational_complexity, 3);
    assert_eq!(report.local_assignment_count, 1);
}

#[test]
fn test_functions_reported_in_declaration_order() {
    let reports = analyze(indoc! {r#"
        fn zeta() {}
        fn alpha() {}
        struct Meter { reading: u64 }
        impl Meter {
            fn reset(&mut self) { self.reading = 0; }
            fn read(&self) -> u64 { self.reading }
        }
    "#});

    let names: Vec<_> = reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "Meter::reset", "Meter::read"]);
    // receivers are not parameters
    assert_eq!(reports[2].input_state_space, 1);
    assert_eq!(reports[2].local_assignment_count, 1);
    assert_eq!(reports[3].output_state_space, 10);
}

#[test]
fn test_process_data_example() {
    let reports = analyze(indoc! {r#"
        pub fn process_data(data: Vec<i64>) -> Result<Vec<i64>, String> {
            if data.is_empty() {
                return Err("no data provided".to_string());
            }

            let mut result = vec![0; data.len()];
            for (i, value) in data.iter().enumerate() {
                let processed;
                processed = process_single_value(*value)?;
                result[i] = processed;
            }

            Ok(result)
        }

        fn process_single_value(value: i64) -> Result<i64, String> {
            match value {
                v if v > 100 => Ok(v - 100),
                v if v > 50 => Ok(v * 2),
                v if v > 0 => Ok(v * 3),
                _ => Err(format!("invalid data value: {}", value)),
            }
        }
    "#});

    let process = &reports[0];
    assert_eq!(process.name, "process_data");
    assert_eq!(process.input_state_space, 1000);
    // Result is not part of the type taxonomy
    assert_eq!(process.output_state_space, 1);
    assert_eq!(process.branching_factor, 2);
    // is_empty, Err, to_string, vec!, let result, iter, enumerate,
    // processed =, process_single_value, result[i] =, Ok
    assert_eq!(process.operational_complexity, 11);
    assert_eq!(process.local_assignment_count, 3);

    let single = &reports[1];
    assert_eq!(single.input_state_space, 10);
    assert_eq!(single.branching_factor, 1);
    // three guard comparisons, three arithmetic ops, four constructor
    // calls and format!
    assert_eq!(single.operational_complexity, 11);
    assert_eq!(single.local_assignment_count, 0);
}

#[test]
fn test_assignments_never_exceed_operations() {
    let reports = analyze(indoc! {r#"
        fn busy(a: u8, b: u8) -> (u8, bool) {
            let x = a;
            let mut y = b;
            y -= x;
            y = y ^ x;
            (y, y > x)
        }
    "#});

    let report = &reports[0];
    assert_eq!(report.input_state_space, 100);
    assert_eq!(report.output_state_space, 20);
    assert_eq!(report.local_assignment_count, 4);
    assert!(report.local_assignment_count <= report.operational_complexity);
}

#[test]
fn test_cyclic_types_do_not_hang() {
    let report = analyze_one(indoc! {r#"
        struct Tree { label: String, children: Vec<Tree> }
        type Forest = Vec<Tree>;

        fn walk(forest: Forest) {}
    "#});

    // Forest = [Tree{label}] = 10 * 100
    assert_eq!(report.input_state_space, 1000);
    assert_eq!(report.diagnostics.cyclic, 1);
    assert_eq!(report.diagnostics.skipped_fields, 1);
}

#[test]
fn test_custom_weights_change_estimates() {
    let file = syn::parse_file("fn f(flags: Vec<bool>) -> String { todo!() }").unwrap();
    let snapshot = SymbolSnapshot::from_file(&file);
    let weights = StateSpaceWeights {
        boolean: 3,
        string: 1_000,
        sequence_length: 5,
        ..StateSpaceWeights::default()
    };

    let reports = analyze_file(&file, &snapshot, &weights);
    assert_eq!(reports[0].input_state_space, 15);
    assert_eq!(reports[0].output_state_space, 1_000);
}
