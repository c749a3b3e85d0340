#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use assert_cmd::Command;
    use pagedb::{Row, TABLE_MAX_ROWS};
    use predicates::prelude::*;
    use tempfile::NamedTempFile;

    // Helper to run the binary against a throwaway database file
    fn run_commands<T: AsRef<str>>(commands: &[T]) -> Command {
        let db_path = create_db_path();
        run_commands_with_args(commands, &db_path)
    }

    fn create_db_path() -> PathBuf {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        temp_file.path().to_path_buf()
    }

    fn run_commands_with_args<T: AsRef<str>>(commands: &[T], db_path: &Path) -> Command {
        let mut cmd = Command::cargo_bin("pagedb").expect("Failed to run command");
        cmd.arg(db_path.to_str().expect("Invalid path"));

        let input = commands
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        cmd.write_stdin(input);
        cmd
    }

    fn banner(db_path: &Path) -> String {
        format!("Welcome to db: {}", db_path.display())
    }

    #[test]
    fn it_inserts_and_retrieves_a_row() {
        let db_path = create_db_path();
        let mut cmd = run_commands_with_args(
            &["insert 1 user1 person1@example.com", "select", ".exit"],
            &db_path,
        );

        let expected = [
            banner(&db_path),
            "db > Executed.".into(),
            "db > (1, user1, person1@example.com)".into(),
            "Executed.".into(),
            "db > ".into(),
        ]
        .join("\n");

        cmd.assert().success().stdout(expected);
    }

    #[test]
    fn it_prints_rows_in_insertion_order() {
        let db_path = create_db_path();
        let mut cmd = run_commands_with_args(
            &[
                "insert 3 user3 person3@example.com",
                "insert 1 user1 person1@example.com",
                "insert 2 user2 person2@example.com",
                "select",
                ".exit",
            ],
            &db_path,
        );

        let expected = [
            banner(&db_path),
            "db > Executed.".into(),
            "db > Executed.".into(),
            "db > Executed.".into(),
            "db > (3, user3, person3@example.com)".into(),
            "(1, user1, person1@example.com)".into(),
            "(2, user2, person2@example.com)".into(),
            "Executed.".into(),
            "db > ".into(),
        ]
        .join("\n");

        cmd.assert().success().stdout(expected);
    }

    #[test]
    fn it_accepts_id_zero() {
        let mut cmd = run_commands(&["insert 0 user0 person0@example.com", "select", ".exit"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("(0, user0, person0@example.com)"));
    }

    #[test]
    fn it_reports_an_empty_table_on_select() {
        let mut cmd = run_commands(&["select", ".exit"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("db > Error: table is empty."));
    }

    #[test]
    fn it_prints_error_message_when_table_is_full() {
        let mut commands = Vec::new();
        for i in 0..TABLE_MAX_ROWS as u32 + 1 {
            commands.push(format!("insert {i} user{i} person{i}@example.com"));
        }
        commands.push(String::from(".exit"));

        let mut cmd = run_commands(&commands);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("db > Error: table is full."));
    }

    #[test]
    fn it_allows_inserting_strings_that_are_the_maximum_length() {
        let long_username = "a".repeat(Row::USERNAME_CAPACITY);
        let long_email = "b".repeat(Row::EMAIL_CAPACITY);

        let db_path = create_db_path();
        let commands = [
            format!("insert 1 {long_username} {long_email}"),
            String::from("select"),
            String::from(".exit"),
        ];
        let mut cmd = run_commands_with_args(&commands, &db_path);

        let expected = [
            banner(&db_path),
            "db > Executed.".into(),
            format!("db > (1, {long_username}, {long_email})"),
            "Executed.".into(),
            "db > ".into(),
        ]
        .join("\n");

        cmd.assert().success().stdout(expected);
    }

    #[test]
    fn it_prints_error_message_if_strings_are_too_long() {
        let long_username = "a".repeat(Row::USERNAME_CAPACITY + 1);

        let commands = [
            format!("insert 1 {long_username} short@example.com"),
            String::from("select"),
            String::from(".exit"),
        ];
        let mut cmd = run_commands(&commands);

        // The oversized insert is rejected, so the select still sees an
        // empty table
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("db > Error: string is too long."))
            .stdout(predicate::str::contains("db > Error: table is empty."));
    }

    #[test]
    fn it_prints_error_message_if_id_is_negative() {
        let mut cmd = run_commands(&["insert -1 user1 person1@example.com", ".exit"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("db > ID must be positive."));
    }

    #[test]
    fn it_prints_syntax_error_for_missing_fields() {
        let mut cmd = run_commands(&["insert 1 user1", ".exit"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("db > Syntax error."));
    }

    #[test]
    fn it_rejects_unrecognized_statements() {
        let mut cmd = run_commands(&["delete 1", ".exit"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("db > Unrecognized command 'delete 1'."));
    }

    #[test]
    fn it_rejects_unrecognized_meta_commands() {
        let mut cmd = run_commands(&[".tables", ".exit"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("db > Unrecognized command '.tables'."));
    }

    #[test]
    fn it_rejects_select_with_arguments() {
        let mut cmd = run_commands(&["select 1", ".exit"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("db > Unrecognized command 'select 1'."));
    }

    #[test]
    fn it_keeps_data_after_closing_connection() {
        let db_path = create_db_path();

        let mut cmd =
            run_commands_with_args(&["insert 1 user1 person1@example.com", ".exit"], &db_path);
        cmd.assert().success();

        let mut cmd = run_commands_with_args(&["select", ".exit"], &db_path);
        let expected = [
            banner(&db_path),
            "db > (1, user1, person1@example.com)".into(),
            "Executed.".into(),
            "db > ".into(),
        ]
        .join("\n");
        cmd.assert().success().stdout(expected);
    }

    #[test]
    fn it_fills_and_saves_a_full_table() {
        let mut commands = Vec::new();
        let mut expected = Vec::new();
        for i in 0..TABLE_MAX_ROWS as u32 {
            commands.push(format!("insert {i} user{i} person{i}@example.com"));
            expected.push(format!("({i}, user{i}, person{i}@example.com)"));
        }
        commands.push(String::from(".exit"));

        let db_path = create_db_path();
        let mut cmd = run_commands_with_args(&commands, &db_path);
        cmd.assert()
            .success()
            .stdout(predicate::str::ends_with("db > "));

        let mut cmd = run_commands_with_args(&["select", ".exit"], &db_path);
        let expected = expected.join("\n");
        cmd.assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }

    #[test]
    fn it_treats_end_of_input_like_exit() {
        let db_path = create_db_path();

        // No .exit; stdin just ends
        let mut cmd = run_commands_with_args(&["insert 1 user1 person1@example.com"], &db_path);
        cmd.assert().success();

        let mut cmd = run_commands_with_args(&["select", ".exit"], &db_path);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("(1, user1, person1@example.com)"));
    }

    #[test]
    fn it_fails_without_a_database_path() {
        let mut cmd = Command::cargo_bin("pagedb").expect("Failed to run command");
        cmd.assert().failure();
    }
}
