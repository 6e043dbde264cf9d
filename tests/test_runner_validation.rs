use test_utils::{build_test_resolver, get_test_file_paths, run_test_for_file};

const TEST_RUNNER_VALIDATION_FILES_DIRECTORY: &str = "tests/test_runner_validation_files";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_reports_wrong_expectations() {
        let resolver = build_test_resolver();

        let test_file_paths = get_test_file_paths(TEST_RUNNER_VALIDATION_FILES_DIRECTORY);
        assert!(!test_file_paths.is_empty(), "No validation files found");

        for test_file_path in test_file_paths {
            let evaluation_result = run_test_for_file(&test_file_path, &resolver, false);

            assert!(
                !evaluation_result.is_pass(),
                "{} - Expected the runner to report a failure",
                test_file_path.display()
            );
        }
    }

    #[test]
    fn test_runner_classifies_failures() {
        let resolver = build_test_resolver();

        let wrong_symbol = run_test_for_file(
            std::path::Path::new("tests/test_runner_validation_files/wrong_symbol.txt"),
            &resolver,
            false,
        );
        assert!(wrong_symbol.is_false_positive());
        assert!(!wrong_symbol.is_false_negative());

        let missed_symbol = run_test_for_file(
            std::path::Path::new("tests/test_runner_validation_files/missed_symbol.txt"),
            &resolver,
            false,
        );
        assert!(missed_symbol.is_false_negative());
        assert!(!missed_symbol.is_false_positive());
    }

    #[test]
    #[should_panic]
    fn test_runner_asserts_on_failure() {
        let resolver = build_test_resolver();

        run_test_for_file(
            std::path::Path::new("tests/test_runner_validation_files/wrong_symbol.txt"),
            &resolver,
            true,
        );
    }
}
