use anyhow::Result;
use memsnap_types::StoreError;
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sleep_sync(millis: u64) {
    std::thread::sleep(Duration::from_millis(millis))
}

/// First join all tasks. Then evaluate `Result<_>`s.
pub async fn join_tasks<T>(tasks: Vec<JoinHandle<Result<T>>>) -> Result<Vec<T>> {
    let mut join_results = vec![];
    for task in tasks.into_iter() {
        let join_res: Result<Result<T>, JoinError> = task.await;
        join_results.push(join_res);
    }

    let mut ret_items = vec![];
    for join_res in join_results.into_iter() {
        let ret_item = join_res??;
        ret_items.push(ret_item);
    }
    Ok(ret_items)
}

pub fn expect_store_err<T>(res: Result<T>) -> Option<StoreError> {
    res.err()
        .and_then(|err| err.downcast_ref::<StoreError>().cloned())
}
