//! Tests for async task runtime primitives.

use twitch_mcp::runtime::AsyncTask;

#[tokio::test]
async fn test_async_task_spawn_async() {
    let task = AsyncTask::spawn_async(async { 42 });
    let result = task.await.unwrap();
    assert_eq!(result, 42);
}

#[tokio::test]
async fn test_async_task_ready() {
    let task = AsyncTask::ready("done");
    assert_eq!(task.await.unwrap(), "done");
}

#[tokio::test]
async fn test_async_task_carries_results() {
    let task: AsyncTask<Result<u32, String>> = AsyncTask::spawn_async(async { Err("boom".into()) });
    assert_eq!(task.await.unwrap(), Err("boom".to_string()));
}
