//! `todo` executable.
//!
//! # Responsibility
//! - Resolve configuration, start logging, read argv.
//! - Drive one core dispatch and own the single exit/report boundary.
//!
//! # Invariants
//! - Pending mutations are committed before any error is reported, so
//!   steps that completed before a failure persist.

mod prompt;
mod render;

use log::{error, info};
use std::process::ExitCode;
use todo_core::db::{commit_and_close, open_db};
use todo_core::{
    core_version, dispatch, init_logging, CommandError, Config, ConfirmDelete, DispatchError,
    Invocation, RepoError, SqliteListRepository, TodoService,
};

fn main() -> ExitCode {
    let config = Config::from_env();
    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("todo: logging disabled: {err}");
        }
    }

    let tokens: Vec<String> = std::env::args().skip(1).collect();
    match run(&config, &tokens, &mut prompt::TerminalConfirm) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(
                "event=cli_exit module=cli status=error error_code={}",
                err.code()
            );
            render::error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(
    config: &Config,
    tokens: &[String],
    confirm: &mut dyn ConfirmDelete,
) -> Result<(), CommandError> {
    let invocation = Invocation::parse(tokens)?;
    info!(
        "event=cli_start module=cli status=ok version={} flags={}",
        core_version(),
        invocation.flags.len()
    );

    let conn = open_db(&config.db_path).map_err(|err| CommandError::Repo(RepoError::from(err)))?;
    let dispatched = {
        let service = TodoService::new(SqliteListRepository::new(&conn));
        dispatch(&service, &invocation, confirm)
    };

    let (outcomes, failure) = match dispatched {
        Ok(outcomes) => (outcomes, None),
        Err(DispatchError { completed, error }) => (completed, Some(error)),
    };
    render::outcomes(&outcomes);

    commit_and_close(conn).map_err(|err| CommandError::Repo(RepoError::from(err)))?;
    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::prompt::LineConfirm;
    use std::io::{self, Cursor};
    use todo_core::db::open_db;
    use todo_core::{CommandError, Config, ListName, ListRepository, SqliteListRepository};

    fn config_in(dir: &tempfile::TempDir) -> Config {
        Config {
            db_path: dir.path().join("lists.db"),
            log_level: "info".to_string(),
            log_dir: None,
        }
    }

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn stored_lists(config: &Config) -> Vec<ListName> {
        let conn = open_db(&config.db_path).unwrap();
        SqliteListRepository::new(&conn).list_collections().unwrap()
    }

    fn no_answers() -> LineConfirm<Cursor<&'static str>, io::Sink> {
        LineConfirm::new(Cursor::new(""), io::sink())
    }

    #[test]
    fn steps_before_a_failure_are_committed() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        run(&config, &tokens(&["-N", "Work"]), &mut no_answers()).unwrap();
        let err = run(&config, &tokens(&["-N", "Home", "Work"]), &mut no_answers()).unwrap_err();
        assert!(matches!(err, CommandError::ListAlreadyExists(_)));

        let lists = stored_lists(&config);
        assert_eq!(
            lists,
            vec![
                ListName::parse("Work").unwrap(),
                ListName::parse("Home").unwrap()
            ]
        );
    }

    #[test]
    fn piped_confirmation_deletes_the_list() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        run(&config, &tokens(&["-N", "Home", "Work"]), &mut no_answers()).unwrap();
        let mut confirm = LineConfirm::new(Cursor::new("y\n"), io::sink());
        run(&config, &tokens(&["-d", "Home"]), &mut confirm).unwrap();

        assert_eq!(stored_lists(&config), vec![ListName::parse("Work").unwrap()]);
    }

    #[test]
    fn usage_errors_never_create_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let err = run(&config, &tokens(&["-S", "a", "b", "c", "d"]), &mut no_answers()).unwrap_err();
        assert!(matches!(err, CommandError::TooManyArguments { .. }));
        assert!(!config.db_path.exists());
    }
}
