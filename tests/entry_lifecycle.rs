use chrono::{Duration, Local, NaiveDate, TimeZone, Utc};
use mood_tracker::models::{MOODS, Mood};
use mood_tracker::stats::{build_stats_at, total_count};
use mood_tracker::{EntryStore, FileStore, PersistenceStore};
use tempfile::TempDir;

fn noon_local(day: NaiveDate) -> chrono::DateTime<Utc> {
    Local
        .from_local_datetime(&day.and_hms_opt(12, 0, 0).unwrap())
        .single()
        .expect("noon is never ambiguous")
        .with_timezone(&Utc)
}

#[tokio::test]
async fn history_survives_restart_and_streak_skips_gap() {
    let temp = TempDir::new().unwrap();
    let today = Local::now().date_naive();
    let good = Mood::find("good").unwrap();

    {
        let mut store = EntryStore::load(FileStore::new(temp.path())).await;
        for back in [4, 2, 1, 0] {
            let day = today - Duration::days(back);
            store
                .create_at(Some(&good), &format!("day -{back}"), noon_local(day))
                .await
                .unwrap();
        }

        let stats = build_stats_at(today, &Local, store.list());
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.total_count, 4);
    }

    let reopened = EntryStore::load(FileStore::new(temp.path())).await;
    let notes: Vec<&str> = reopened.list().iter().map(|e| e.note.as_str()).collect();
    assert_eq!(notes, vec!["day -0", "day -1", "day -2", "day -4"]);
    assert_eq!(build_stats_at(today, &Local, reopened.list()).current_streak, 3);
}

#[tokio::test]
async fn remove_and_clear_are_flushed_to_disk() {
    let temp = TempDir::new().unwrap();
    let now = Utc::now();

    let mut store = EntryStore::load(FileStore::new(temp.path())).await;
    let first = store.create_at(Some(&MOODS[0]), "", now).await.unwrap();
    let second = store.create_at(Some(&MOODS[4]), "rough", now).await.unwrap();

    assert!(store.remove(first.id).await.unwrap());
    let reopened = EntryStore::load(FileStore::new(temp.path())).await;
    assert_eq!(reopened.list(), &[second]);

    store.clear().await.unwrap();
    let reopened = EntryStore::load(FileStore::new(temp.path())).await;
    assert_eq!(total_count(reopened.list()), 0);
}

#[tokio::test]
async fn corrupt_file_starts_empty_and_is_replaced_on_write() {
    let temp = TempDir::new().unwrap();
    let files = FileStore::new(temp.path());
    files.set("moodLogs", "[{\"id\": \"oops\"").await.unwrap();

    let mut store = EntryStore::load(files).await;
    assert!(store.list().is_empty());

    store.create_at(Some(&MOODS[1]), "", Utc::now()).await.unwrap();
    let reopened = EntryStore::load(FileStore::new(temp.path())).await;
    assert_eq!(reopened.list().len(), 1);
}
