use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use engine::{Engine, EngineError, Storage, UserRecord, Users};
use serde_json::{Value, json};
use tokio::task::JoinSet;
use uuid::Uuid;

const USER: &str = "864914211";

fn seed() -> Users {
    let mut users = Users::new();
    users.insert(
        USER.to_string(),
        UserRecord::with_entries([
            "17-May-2023,Transport,50.0,$",
            "17-May-2023,Groceries,400.0,$",
        ]),
    );
    users
}

fn selector(date: &str, category: &str, amount: &str) -> Vec<String> {
    vec![
        format!("Date={date}"),
        format!("Category={category}"),
        format!("Amount={amount}"),
    ]
}

async fn engine_with_memory() -> Engine {
    Engine::builder().users(seed()).build().await.unwrap()
}

fn test_stores() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_stores")
}

fn store_file(contents: &str) -> PathBuf {
    let root = test_stores();
    std::fs::create_dir_all(&root).unwrap();

    let path = root.join(format!("store_{}.json", Uuid::new_v4()));
    std::fs::write(&path, contents).unwrap();
    path
}

async fn open(path: &Path) -> Engine {
    Engine::builder()
        .storage(Storage::Json(path.to_path_buf()))
        .build()
        .await
        .unwrap()
}

async fn engine_with_file() -> (Engine, PathBuf) {
    let path = store_file(&serde_json::to_string(&seed()).unwrap());
    (open(&path).await, path)
}

#[tokio::test]
async fn edit_cost_rewrites_only_the_amount() {
    let engine = engine_with_memory().await;

    let entry = engine
        .edit_cost(USER, &selector("17-May-2023", "Groceries", "400.0"), "55")
        .await
        .unwrap();
    assert_eq!(entry.to_string(), "17-May-2023,Groceries,55.0,$");

    let history = engine.history(USER).await.unwrap();
    assert_eq!(history[0].to_string(), "17-May-2023,Transport,50.0,$");
    assert_eq!(history[1].to_string(), "17-May-2023,Groceries,55.0,$");
}

#[tokio::test]
async fn edit_category_keeps_other_fields() {
    let engine = engine_with_memory().await;

    engine
        .edit_category(USER, &selector("2023-05-17", "transport", "50"), "Travel")
        .await
        .unwrap();

    let history = engine.history(USER).await.unwrap();
    assert_eq!(history[0].to_string(), "17-May-2023,Travel,50.0,$");
}

#[tokio::test]
async fn no_match_leaves_store_untouched() {
    let engine = engine_with_memory().await;

    let err = engine
        .edit_cost(USER, &selector("17-May-2023", "Transport", "51.0"), "10")
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::EntryNotFound);

    let history = engine.history(USER).await.unwrap();
    assert_eq!(history[0].amount, "50.0");
}

#[tokio::test]
async fn rejected_costs() {
    let engine = engine_with_memory().await;
    let selected = selector("17-May-2023", "Transport", "50.0");

    for cost in ["-10.0", "0.0", "0", "abc", "1.234"] {
        let err = engine.edit_cost(USER, &selected, cost).await.unwrap_err();
        assert_eq!(err, EngineError::InvalidAmount, "cost {cost:?}");
    }
}

#[tokio::test]
async fn history_of_unknown_user() {
    let engine = engine_with_memory().await;
    assert_eq!(
        engine.history("999999").await.unwrap_err(),
        EngineError::UserNotFound
    );
}

#[tokio::test]
async fn file_store_persists_edits() {
    let (engine, path) = engine_with_file().await;

    engine
        .edit_date(USER, &selector("17-May-2023", "Transport", "50.0"), "2023-05-20")
        .await
        .unwrap();
    drop(engine);

    let reopened = open(&path).await;
    let history = reopened.history(USER).await.unwrap();
    assert_eq!(history[0].to_string(), "20-May-2023,Transport,50.0,$");

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn missing_file_is_an_empty_store() {
    let path = test_stores().join(format!("missing_{}.json", Uuid::new_v4()));

    let engine = Engine::builder()
        .storage(Storage::Json(path))
        .build()
        .await
        .unwrap();
    assert_eq!(
        engine.history(USER).await.unwrap_err(),
        EngineError::UserNotFound
    );
}

#[tokio::test]
async fn unsupported_date_format_fails_build() {
    let err = Engine::builder()
        .date_format("%m/%d/%Y")
        .build()
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::UnsupportedDateFormat("%m/%d/%Y".to_string())
    );
    assert_eq!(
        err.to_string(),
        r#"unsupported date format "%m/%d/%Y", expected "%d-%b-%Y" or "%Y-%m-%d""#
    );
}

#[tokio::test]
async fn new_date_must_be_a_bare_date() {
    let mut users = Users::new();
    users.insert(
        USER.to_string(),
        UserRecord::with_entries(["17-May-2023 14:30,Transport,50.0,$"]),
    );
    let engine = Engine::builder().users(users).build().await.unwrap();
    let selected = selector("17-May-2023", "Transport", "50.0");

    for new_date in ["2023-06-01 not-a-time", "2023-06-01 09:00"] {
        let err = engine
            .edit_date(USER, &selected, new_date)
            .await
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidDate, "new_date {new_date:?}");
    }
    let history = engine.history(USER).await.unwrap();
    assert_eq!(history[0].to_string(), "17-May-2023 14:30,Transport,50.0,$");

    let entry = engine
        .edit_date(USER, &selected, "2023-06-01")
        .await
        .unwrap();
    assert_eq!(entry.to_string(), "01-Jun-2023 14:30,Transport,50.0,$");
}

#[tokio::test]
async fn first_of_several_matches_is_edited() {
    let mut users = Users::new();
    users.insert(
        USER.to_string(),
        UserRecord::with_entries([
            "17-May-2023,Transport,50.0,$",
            "17-May-2023,transport,50,$",
        ]),
    );
    let engine = Engine::builder().users(users).build().await.unwrap();
    let selected = selector("2023-05-17", "TRANSPORT", "50.00");

    engine.edit_cost(USER, &selected, "60").await.unwrap();
    let history = engine.history(USER).await.unwrap();
    assert_eq!(history[0].to_string(), "17-May-2023,Transport,60.0,$");
    assert_eq!(history[1].to_string(), "17-May-2023,transport,50,$");

    // The first entry no longer matches, so the next edit reaches the second.
    engine.edit_cost(USER, &selected, "70").await.unwrap();
    let history = engine.history(USER).await.unwrap();
    assert_eq!(history[0].to_string(), "17-May-2023,Transport,60.0,$");
    assert_eq!(history[1].to_string(), "17-May-2023,transport,70.0,$");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_edits_all_land() {
    let entries: Vec<String> = (1..=8)
        .map(|day| format!("{day:02}-May-2023,Item{day},10.0,$"))
        .collect();
    let mut users = Users::new();
    users.insert(USER.to_string(), UserRecord::with_entries(entries));
    let path = store_file(&serde_json::to_string(&users).unwrap());
    let engine = Arc::new(open(&path).await);

    let mut tasks = JoinSet::new();
    for day in 1..=8u32 {
        let engine = engine.clone();
        tasks.spawn(async move {
            let selected = selector(&format!("2023-05-{day:02}"), &format!("Item{day}"), "10");
            if day % 2 == 0 {
                engine
                    .edit_cost(USER, &selected, &format!("{day}.5"))
                    .await
            } else {
                engine
                    .edit_category(USER, &selected, &format!("Renamed{day}"))
                    .await
            }
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }
    drop(engine);

    let history = open(&path).await.history(USER).await.unwrap();
    assert_eq!(history.len(), 8);
    for (entry, day) in history.iter().zip(1..=8u32) {
        let expected = if day % 2 == 0 {
            format!("{day:02}-May-2023,Item{day},{day}.5,$")
        } else {
            format!("{day:02}-May-2023,Renamed{day},10.0,$")
        };
        assert_eq!(entry.to_string(), expected);
    }

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn edit_keeps_the_rest_of_the_document() {
    let document = json!({
        "864914211": {
            "data": [
                "17-May-2023,Transport,50.0,$",
                "broken entry",
                "17-May-2023,Groceries,400.0,$"
            ],
            "budget": {"overall": "1000.0", "category": {"Food": "200.0"}}
        },
        "555": {"data": ["garbage"], "note": "keep me"}
    });
    let path = store_file(&document.to_string());
    let engine = open(&path).await;

    engine
        .edit_cost(USER, &selector("17-May-2023", "Groceries", "400.0"), "55")
        .await
        .unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        written[USER]["data"],
        json!([
            "17-May-2023,Transport,50.0,$",
            "broken entry",
            "17-May-2023,Groceries,55.0,$"
        ])
    );
    assert_eq!(written[USER]["budget"], document[USER]["budget"]);
    assert_eq!(written["555"], document["555"]);

    let _ = std::fs::remove_file(path);
}
