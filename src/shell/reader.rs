use crate::error::Error;
use crate::shell::Phonebook;

fn command_error(message: String) -> Error {
    Error::Command(message)
}

/// Blank lines are skipped without dispatching anything.
pub fn read_shell_line(line: &str, dispatch: &mut dyn Phonebook) -> Result<(), Error> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(());
    };
    match command {
        "put" => {
            let Some(key) = words.next() else {
                return Err(command_error(format!("Missing key in: {line}")));
            };
            let value = words.collect::<Vec<_>>().join(" ");
            if value.is_empty() {
                return Err(command_error(format!("Missing value in: {line}")));
            }
            dispatch.put(key, &value)
        }
        "get" | "delete" => {
            let Some(key) = words.next() else {
                return Err(command_error(format!("Missing key in: {line}")));
            };
            if words.next().is_some() {
                return Err(command_error(format!("Trailing arguments in: {line}")));
            }
            match command {
                "get" => dispatch.get(key),
                _ => dispatch.delete(key),
            }
        }
        "dump" => dispatch.dump(),
        "stats" => dispatch.stats(),
        "new" => dispatch.new_book(),
        "options" => dispatch.options(),
        "setoption" => {
            let Some(name_literal) = words.next() else {
                return Err(command_error(format!("Invalid setoption line: {line}")));
            };
            if name_literal != "name" {
                return Err(command_error(format!("Missing 'name' parameter in: {line}")));
            }
            let Some(option_name) = words.next() else {
                return Err(command_error(format!("Missing 'name' value in: {line}")));
            };
            let Some(value_literal) = words.next() else {
                return Err(command_error(format!("Missing 'value' parameter in: {line}")));
            };
            if value_literal != "value" {
                return Err(command_error(format!("Invalid 'value' parameter in: {line}")));
            }
            let Some(value) = words.next() else {
                return Err(command_error(format!("Missing 'value' value in: {line}")));
            };
            dispatch.set_option(option_name, value)
        }
        "fib" => {
            let n = words
                .next()
                .ok_or(command_error(format!("Missing fib index in: {line}")))?;
            let n: usize = n
                .parse()
                .map_err(|e| command_error(format!("Invalid fib index: {e}")))?;
            dispatch.fib(n)
        }
        "quit" => dispatch.quit(),
        _ => Err(command_error(format!("Invalid command: {line}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Phonebook for Recorder {
        fn put(&mut self, key: &str, value: &str) -> Result<(), Error> {
            self.calls.push(format!("put {key}={value}"));
            Ok(())
        }
        fn get(&mut self, key: &str) -> Result<(), Error> {
            self.calls.push(format!("get {key}"));
            Ok(())
        }
        fn delete(&mut self, key: &str) -> Result<(), Error> {
            self.calls.push(format!("delete {key}"));
            Ok(())
        }
        fn dump(&mut self) -> Result<(), Error> {
            self.calls.push("dump".to_string());
            Ok(())
        }
        fn stats(&mut self) -> Result<(), Error> {
            self.calls.push("stats".to_string());
            Ok(())
        }
        fn new_book(&mut self) -> Result<(), Error> {
            self.calls.push("new".to_string());
            Ok(())
        }
        fn options(&mut self) -> Result<(), Error> {
            self.calls.push("options".to_string());
            Ok(())
        }
        fn set_option(&mut self, name: &str, value: &str) -> Result<(), Error> {
            self.calls.push(format!("setoption {name}={value}"));
            Ok(())
        }
        fn fib(&mut self, n: usize) -> Result<(), Error> {
            self.calls.push(format!("fib {n}"));
            Ok(())
        }
        fn quit(&mut self) -> Result<(), Error> {
            Err(Error::Quit)
        }
    }

    #[test]
    fn dispatches_commands() {
        let mut recorder = Recorder::default();
        let lines = [
            "put 54 Marina",
            "put 347   Ziuta  Nowak\n",
            "get 54",
            "delete 15",
            "dump",
            "stats",
            "new",
            "options",
            "setoption name Lookup value full",
            "fib 5",
        ];
        for line in lines {
            read_shell_line(line, &mut recorder).expect("valid line");
        }
        assert_eq!(
            recorder.calls,
            vec![
                "put 54=Marina",
                "put 347=Ziuta Nowak",
                "get 54",
                "delete 15",
                "dump",
                "stats",
                "new",
                "options",
                "setoption Lookup=full",
                "fib 5",
            ]
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        let mut recorder = Recorder::default();
        for line in [
            "frobnicate",
            "put",
            "put 54",
            "get",
            "get 54 55",
            "setoption Lookup full",
            "setoption name Lookup",
            "setoption name Lookup option full",
            "setoption name Lookup value",
            "fib",
            "fib -1",
        ] {
            assert!(
                matches!(read_shell_line(line, &mut recorder), Err(Error::Command(_))),
                "{line:?} should be rejected"
            );
        }
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut recorder = Recorder::default();
        for line in ["", "\n", "   \t\r\n"] {
            assert_eq!(read_shell_line(line, &mut recorder), Ok(()));
        }
        assert!(recorder.calls.is_empty());
        read_shell_line("dump", &mut recorder).expect("valid line");
        assert_eq!(recorder.calls, vec!["dump"]);
    }

    #[test]
    fn quit_ends_the_session() {
        let mut recorder = Recorder::default();
        assert_eq!(read_shell_line("quit", &mut recorder), Err(Error::Quit));
    }
}
