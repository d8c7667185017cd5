use crate::*;
use bucketsh::dispatch::Dispatcher;
use bucketsh::error::Result;
use bucketsh::messages::Issue;
use bucketsh::storage::{ObjectStore, StorageClient};

pub fn tests(client: &StorageClient, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        client,
        test_delete_object,
        test_delete_missing_object,
        test_delete_missing_directory,
        test_delete_without_enough_arguments,
        test_delete_backend_failure_is_reported,
        test_delete_outside_storage_root,
        test_delete_object_refuses_escaping_key
    ));
}

async fn test_delete_object(client: StorageClient) -> Result<()> {
    let bucket = TEST_FIXTURE.new_bucket(&client).await?;
    TEST_FIXTURE.new_object(&client, &bucket, "obj.txt").await?;

    let reply = dispatch(&client, &format!("delete obj.txt {bucket}")).await?;

    assert_eq!(reply, format!("Object obj.txt deleted from bucket {bucket}."));
    let result = client.operator().stat(&format!("{bucket}/obj.txt")).await;
    assert!(
        matches!(result.unwrap_err().kind(), opendal::ErrorKind::NotFound),
        "object should be gone"
    );
    assert!(client.container_exists(&bucket).await?);
    Ok(())
}

async fn test_delete_missing_object(client: StorageClient) -> Result<()> {
    let bucket = TEST_FIXTURE.new_bucket(&client).await?;

    let reply = dispatch(&client, &format!("delete obj.txt {bucket}")).await?;

    assert_eq!(reply, Issue::NonExistentObject.message());
    Ok(())
}

async fn test_delete_missing_directory(client: StorageClient) -> Result<()> {
    let bucket = TEST_FIXTURE.new_bucket_name();

    let reply = dispatch(&client, &format!("delete obj.txt {bucket}")).await?;

    assert_eq!(reply, Issue::NonExistentBucket.message());
    Ok(())
}

async fn test_delete_without_enough_arguments(client: StorageClient) -> Result<()> {
    let reply = dispatch(&client, "delete obj.txt").await?;

    assert_eq!(reply, Issue::IncorrectParameterNumber.message());
    Ok(())
}

async fn test_delete_backend_failure_is_reported(client: StorageClient) -> Result<()> {
    let bucket = TEST_FIXTURE.new_bucket(&client).await?;
    TEST_FIXTURE.new_object(&client, &bucket, "obj.txt").await?;
    let dispatcher = Dispatcher::new(RecordingStore::with_fault(client.clone(), Fault::DeleteFails));

    let reply = dispatcher.dispatch(&format!("delete obj.txt {bucket}")).await?;

    assert_eq!(
        reply,
        format!("Failed to delete obj.txt from directory {bucket}: IO error: disk on fire")
    );
    assert!(client.object_exists(&bucket, "obj.txt").await?);
    Ok(())
}

async fn test_delete_outside_storage_root(client: StorageClient) -> Result<()> {
    let bucket = TEST_FIXTURE.new_bucket(&client).await?;
    let (outside, path) = TEST_FIXTURE.new_outside_file();

    let reply = dispatch(&client, &format!("delete {outside} ..")).await?;
    assert_eq!(reply, Issue::NonExistentBucket.message());

    let reply = dispatch(&client, &format!("delete ../../{outside} {bucket}")).await?;
    assert_eq!(reply, Issue::NonExistentObject.message());

    assert_eq!(std::fs::read(&path)?, b"keep me");
    Ok(())
}

async fn test_delete_object_refuses_escaping_key(client: StorageClient) -> Result<()> {
    let bucket = TEST_FIXTURE.new_bucket(&client).await?;
    let (outside, path) = TEST_FIXTURE.new_outside_file();

    let result = client
        .delete_object(&bucket, &format!("../../{outside}"))
        .await;
    assert!(result.is_err(), "escaping key should be refused");

    let result = client.delete_object("..", &outside).await;
    assert!(result.is_err(), "parent directory should be refused");

    assert!(path.is_file());
    Ok(())
}
