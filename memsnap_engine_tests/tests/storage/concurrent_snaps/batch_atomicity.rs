use super::super::helpers::{
    etc::{join_tasks, sleep_sync},
    gen,
};
use anyhow::{anyhow, Result};
use memsnap_engine_common::{ReadOnlyStore, Snapshot, Store};
use memsnap_engine_mem::MemoryStore;
use memsnap_types::types::TableId;
use tokio::task::{self, JoinHandle};

/// Within one table, a snapshot observes a commit either entirely or not at all.
pub async fn no_torn_table(store: &MemoryStore) -> Result<()> {
    let objs_ct = 10;
    let w_commits_ct = 50;
    let r_snaps_ct = 8;
    let tables = [TableId::from(2), TableId::from(3)];
    let mut w_tasks = vec![];
    let mut r_tasks = vec![];

    let gen_key_str = |obj_i: u64| format!("torn_test:item{}", obj_i);

    /* Every commit sets every obj in both tables to the same value. */
    let write_all = move |store: &MemoryStore, val: String| -> Result<()> {
        let mut snap = store.get_snapshot();
        for t in tables {
            for obj_i in 0..objs_ct {
                snap.put(t, &gen::gen_str_key(gen_key_str(obj_i)), val.as_bytes())?;
            }
        }
        snap.commit()
    };

    write_all(store, String::from("initial"))?;

    {
        let store = store.clone();
        let task_fn = move || -> Result<()> {
            for commit_i in 0..w_commits_ct {
                write_all(&store, format!("from commit {}", commit_i))?;
                sleep_sync(1);
            }
            Ok(())
        };
        let task: JoinHandle<Result<()>> = task::spawn_blocking(task_fn);
        w_tasks.push(task);
    }

    for _ in 0..r_snaps_ct {
        let store = store.clone();
        let task_fn = move || -> Result<()> {
            for _ in 0..w_commits_ct {
                let snap = store.get_snapshot();
                for t in tables {
                    let vals = snap.find(t, b"torn_test:")?.map(|(_k, v)| v).collect::<Vec<_>>();
                    if vals.len() != objs_ct as usize {
                        return Err(anyhow!("Expected {objs_ct} objs; found {}", vals.len()));
                    }
                    if vals.iter().any(|v| v != &vals[0]) {
                        return Err(anyhow!("Torn commit observed in table {t}"));
                    }
                }
                sleep_sync(1);
            }
            Ok(())
        };
        let task: JoinHandle<Result<()>> = task::spawn_blocking(task_fn);
        r_tasks.push(task);
    }

    let w_res = join_tasks(w_tasks).await;
    let r_res = join_tasks(r_tasks).await;
    w_res?;
    r_res?;

    let last_val = gen::gen_str_val(format!("from commit {}", w_commits_ct - 1));
    for t in tables {
        for obj_i in 0..objs_ct {
            let key = gen::gen_str_key(gen_key_str(obj_i));
            assert_eq!(store.try_get(t, &key)?, last_val);
        }
    }

    Ok(())
}
