use crate::*;
use bucketsh::dispatch::Dispatcher;
use bucketsh::error::Result;
use bucketsh::messages::{HELP, Issue, PROMPT};
use bucketsh::shell::Shell;
use bucketsh::storage::{ObjectStore, StorageClient};
use predicates::prelude::*;
use std::io::Cursor;

pub fn tests(client: &StorageClient, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        client,
        test_shell_help_and_exit,
        test_shell_collapses_whitespace,
        test_shell_survives_backend_error,
        test_shell_stops_at_end_of_input,
        test_shell_reports_unreadable_line
    ));

    tests.extend(async_trials!(
        client,
        e2e_test_shell_session,
        e2e_test_unsupported_provider
    ));
}

async fn run_shell<S: ObjectStore>(shell: &Shell<S>, input: &[u8]) -> Result<String> {
    let mut output = Vec::new();
    shell.run(Cursor::new(input.to_vec()), &mut output).await?;
    Ok(String::from_utf8_lossy(&output).to_string())
}

async fn test_shell_help_and_exit(client: StorageClient) -> Result<()> {
    let shell = Shell::new(Dispatcher::new(client));

    let output = run_shell(&shell, b"help\nexit\nlistdir\n").await?;

    for line in HELP {
        assert!(output.contains(line), "missing help line {line:?}");
    }
    assert!(output.trim_end().ends_with("Goodbye!"));
    // Nothing after exit is read
    assert_eq!(output.matches(PROMPT).count(), 2);
    Ok(())
}

async fn test_shell_collapses_whitespace(client: StorageClient) -> Result<()> {
    let bucket = TEST_FIXTURE.new_bucket(&client).await?;
    TEST_FIXTURE.new_object(&client, &bucket, "only.txt").await?;
    let shell = Shell::new(Dispatcher::new(client));

    let input = format!("   listdir  \t {bucket}   \n   exit  \n");
    let output = run_shell(&shell, input.as_bytes()).await?;

    assert!(output.contains("only.txt"), "unexpected output: {output}");
    assert!(!output.contains("Command not recognized."));
    assert!(output.contains("Goodbye!"));
    Ok(())
}

async fn test_shell_survives_backend_error(client: StorageClient) -> Result<()> {
    let bucket = TEST_FIXTURE.new_bucket_name();
    let store = RecordingStore::with_fault(client, Fault::CreateFails);
    let shell = Shell::new(Dispatcher::new(store));

    let input = format!("createdir {bucket}\nfoobar\nexit\n");
    let output = run_shell(&shell, input.as_bytes()).await?;

    assert!(output.contains("disk on fire"), "unexpected output: {output}");
    assert!(output.contains("Command not recognized."));
    assert!(output.contains("Goodbye!"));
    Ok(())
}

async fn test_shell_stops_at_end_of_input(client: StorageClient) -> Result<()> {
    let shell = Shell::new(Dispatcher::new(client));

    let output = run_shell(&shell, b"foobar\n").await?;

    assert!(output.contains("Command not recognized."));
    assert!(output.contains("Goodbye!"));
    Ok(())
}

async fn test_shell_reports_unreadable_line(client: StorageClient) -> Result<()> {
    let shell = Shell::new(Dispatcher::new(client));

    let output = run_shell(&shell, b"\xff\xfe\nexit\n").await?;

    assert!(output.contains(Issue::UnknownError.message()));
    assert!(output.contains("Goodbye!"));
    Ok(())
}

async fn e2e_test_shell_session(_client: StorageClient) -> Result<()> {
    let bucket = TEST_FIXTURE.new_bucket_name();

    bucketsh_cmd()
        .write_stdin(format!(
            "help\ncreatedir {bucket}\ncreatedir {bucket}\nfind txt {bucket}\ndeletedir {bucket}\nexit\n"
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Supported Commands:"))
        .stdout(predicate::str::contains(format!("Directory {bucket} created.")))
        .stdout(predicate::str::contains(Issue::BucketNameExists.message()))
        .stdout(predicate::str::contains(Issue::NotImplemented.message()))
        .stdout(predicate::str::contains(format!("Deleted bucket {bucket}.")))
        .stdout(predicate::str::contains("Goodbye!"));

    assert!(!storage_root().join(&bucket).exists());
    Ok(())
}

async fn e2e_test_unsupported_provider(_client: StorageClient) -> Result<()> {
    bucketsh_cmd()
        .env("STORAGE_PROVIDER", "tape")
        .write_stdin("exit\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unsupported storage provider: tape"));
    Ok(())
}
