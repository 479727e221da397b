/////////////////////////////TESTS////////////////////////////////////////////////////
#[cfg(test)]
mod tests1 {
    use crate::Utils::task_parser::{
        TaskDocument, Value, filter_comments, parse_document, parse_key, parse_key_value_pair,
        parse_section, parse_title, parse_value, parse_value_list,
    };
    use crate::numerical::Cauchy::Cauchy_api::CauchyMethod;
    use crate::numerical::ODE_errors::OdeError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TASK: &str = "
// demo overrides
cauchy
  x_bounds: 1.0, 2.0
  step: 0.05
boundary
  left: 0, 1, 0
  right: 1.0, 1.0, -0.75
  tolerance: 1e-6
  max_iterations: 20
  integrator: rk4
# output switches
output
  plots: false
  log_level: debug
";

    #[test]
    fn test_parse_title() {
        let (remaining, title) = parse_title("cauchy\n step: 0.1").unwrap();
        assert_eq!(title, "cauchy");
        assert_eq!(remaining, "step: 0.1");

        let (remaining, title) = parse_title("section_2 key: 1").unwrap();
        assert_eq!(title, "section_2");
        assert_eq!(remaining, "key: 1");
    }

    #[test]
    fn test_parse_key() {
        let (remaining, key) = parse_key("x_bounds: 1.0, 2.0").unwrap();
        assert_eq!(key, "x_bounds");
        assert_eq!(remaining, ": 1.0, 2.0");
        assert!(parse_key("1abc: 2").is_err());
    }

    #[test]
    fn test_parse_value() {
        let (remaining, value) = parse_value("adams4, next").unwrap();
        assert_eq!(value, Value::String("adams4".to_string()));
        assert_eq!(remaining, ", next");

        assert_eq!(parse_value("50").unwrap().1, Value::Integer(50));
        assert_eq!(parse_value("-0.75").unwrap().1, Value::Float(-0.75));
        assert_eq!(parse_value("1e-3").unwrap().1, Value::Float(1e-3));
        assert_eq!(parse_value("false").unwrap().1, Value::Boolean(false));
    }

    #[test]
    fn test_parse_value_list() {
        let (remaining, values) = parse_value_list("1.0 ,2, true").unwrap();
        assert_eq!(
            values,
            vec![Value::Float(1.0), Value::Integer(2), Value::Boolean(true)]
        );
        assert_eq!(remaining, "");

        let (_, values) = parse_value_list("").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_parse_key_value_pair() {
        let (remaining, (key, values)) =
            parse_key_value_pair("right : 1.0, 1.0, -0.75\n  step: 0.1").unwrap();
        assert_eq!(key, "right");
        assert_eq!(values.len(), 3);
        assert_eq!(remaining, "step: 0.1");
    }

    #[test]
    fn test_parse_section() {
        let (remaining, (title, section)) =
            parse_section("boundary\n  step: 0.1\n  integrator: euler\noutput\n  csv: true").unwrap();
        assert_eq!(title, "boundary");
        assert_eq!(section.len(), 2);
        assert_eq!(
            section[1],
            ("integrator".to_string(), vec![Value::String("euler".to_string())])
        );
        assert_eq!(remaining, "output\n  csv: true");
    }

    #[test]
    fn test_filter_comments() {
        let filtered = filter_comments("// a\ncauchy\n\n  # b\n  step: 0.1\n% c\n; d");
        assert_eq!(filtered, "cauchy\n  step: 0.1");
    }

    #[test]
    fn test_parse_document() {
        let filtered = filter_comments(TASK);
        let (remaining, doc) = parse_document(&filtered).unwrap();
        assert!(remaining.trim().is_empty());
        let titles: Vec<&str> = doc.iter().map(|(title, _)| title.as_str()).collect();
        assert_eq!(titles, vec!["cauchy", "boundary", "output"]);
        assert_eq!(doc[1].1.len(), 5);
    }

    #[test]
    fn typed_access() {
        let doc: TaskDocument = TASK.parse().unwrap();
        assert!(doc.has_section("cauchy"));
        assert_eq!(doc.floats("cauchy", "x_bounds", 2).unwrap(), Some(vec![1.0, 2.0]));
        // integers are valid numbers
        assert_eq!(
            doc.floats("boundary", "left", 3).unwrap(),
            Some(vec![0.0, 1.0, 0.0])
        );
        assert_eq!(doc.float("boundary", "tolerance").unwrap(), Some(1e-6));
        assert_eq!(doc.usize("boundary", "max_iterations").unwrap(), Some(20));
        assert_eq!(doc.boolean("output", "plots").unwrap(), Some(false));
        assert_eq!(doc.word("output", "log_level").unwrap(), Some("debug".to_string()));
        assert_eq!(
            doc.parsed::<CauchyMethod>("boundary", "integrator").unwrap(),
            Some(CauchyMethod::RungeKutta4)
        );
        // absent keys and sections are not errors
        assert_eq!(doc.float("cauchy", "initial").unwrap(), None);
        assert_eq!(doc.boolean("missing", "csv").unwrap(), None);
    }

    #[test]
    fn wrong_arity_or_type_is_rejected() {
        let doc: TaskDocument = TASK.parse().unwrap();
        assert!(matches!(
            doc.floats("cauchy", "x_bounds", 3),
            Err(OdeError::InvalidConfig(_))
        ));
        assert!(doc.usize("cauchy", "step").is_err());
        assert!(doc.boolean("output", "log_level").is_err());
        assert!(doc.float("boundary", "integrator").is_err());

        let doc: TaskDocument = "boundary\n  integrator: bdf".parse().unwrap();
        assert!(doc.parsed::<CauchyMethod>("boundary", "integrator").is_err());
        let doc: TaskDocument = "boundary\n  max_iterations: -3".parse().unwrap();
        assert!(doc.usize("boundary", "max_iterations").is_err());
    }

    #[test]
    fn unknown_names_are_reported() {
        let doc: TaskDocument = TASK.parse().unwrap();
        let known: &[(&str, &[&str])] = &[
            ("cauchy", &["x_bounds", "step"]),
            ("boundary", &["left", "right", "tolerance", "max_iterations", "integrator"]),
            ("output", &["plots", "log_level"]),
        ];
        assert!(doc.check_known(known).is_ok());
        let without_output = &known[..2];
        assert!(doc.check_known(without_output).is_err());

        let doc: TaskDocument = "cauchy\n  stepp: 0.1".parse().unwrap();
        assert!(doc.check_known(known).is_err());
    }

    #[test]
    fn empty_and_malformed_documents() {
        let doc: TaskDocument = "// only a comment\n\n".parse().unwrap();
        assert_eq!(doc, TaskDocument::default());
        let res: Result<TaskDocument, _> = "cauchy\n  step 0.1".parse();
        assert!(matches!(res, Err(OdeError::InvalidConfig(_))));
    }

    #[test]
    fn repeated_sections_and_keys_are_rejected() {
        let res: Result<TaskDocument, _> = "cauchy\n  step: 0.1\ncauchy\n  step: 0.2".parse();
        match res {
            Err(OdeError::InvalidConfig(msg)) => assert!(msg.contains("'cauchy'"), "{}", msg),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
        let res: Result<TaskDocument, _> = "boundary\n  step: 0.1\n  step: 0.05".parse();
        match res {
            Err(OdeError::InvalidConfig(msg)) => assert!(msg.contains("'step'"), "{}", msg),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn document_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", TASK).unwrap();
        let doc = TaskDocument::from_file(file.path()).unwrap();
        assert_eq!(doc.float("cauchy", "step").unwrap(), Some(0.05));
        assert!(TaskDocument::from_file(std::path::Path::new("/no/such/task.txt")).is_err());
    }
}
