#[cfg(test)]
mod tests {
    use batch_logger::sink::DailyFileSink;
    use batch_logger::ConfigUpdate;
    use batch_logger_macros::log;
    use std::fs;
    use std::path::Path;

    #[log(debug)]
    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    #[log(verbose)]
    fn shout(word: &str) -> String {
        word.to_uppercase()
    }

    #[log(debug)]
    fn early_return(flag: bool) -> &'static str {
        if flag {
            return "early";
        }
        "late"
    }

    #[test]
    fn wrapped_functions_still_return_their_values() {
        let dir = "target/macro-test-logs";
        let _ = fs::remove_dir_all(dir);
        batch_logger::configure(ConfigUpdate {
            file_path: Some(dir.to_string()),
            ..Default::default()
        });

        assert_eq!(add(2, 3), 5);
        assert_eq!(shout("hi"), "HI");
        assert_eq!(early_return(true), "early");
        assert_eq!(early_return(false), "late");

        batch_logger::flush().unwrap();

        let content = fs::read_to_string(DailyFileSink::file_path(Path::new(dir))).unwrap();
        assert!(content.contains("Function call"));
        assert!(content.contains("add"));
        assert!(content.contains("(a: i32, b: i32)"));
        assert!(content.contains("returned."));

        let _ = fs::remove_dir_all(dir);
    }
}
