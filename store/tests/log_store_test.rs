//! Integration tests for the daily log store

mod common;

use common::date;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use gymmania_shared::{LogBook, LoggedExercise, LoggedSet, MacroNutrients, MealLogItem, MealType, Mood};

#[tokio::test]
async fn test_logs_survive_reload() {
    let mut app = common::TestApp::new().await;
    let d = date(2024, 1, 8);
    let note: String = Sentence(3..8).fake();

    tokio_test::assert_ok!(app.state.logs.add_set(d, "squat", "Barbell Squat", 140.0, 5, true));
    tokio_test::assert_ok!(app.state.logs.set_workout_notes(d, note.clone()));
    app.state.logs.set_workout_mood(d, Mood::try_from(5).unwrap());
    tokio_test::assert_ok!(app.state.logs.set_body_weight(d, 82.4));
    tokio_test::assert_ok!(app.state.logs.add_food_to_meal_log(
        d,
        MealType::Breakfast,
        MealLogItem {
            food_name: "Oats".to_string(),
            quantity: 1.0,
            macros: MacroNutrients::new(389.0, 17.0, 66.0, 7.0),
        },
    ));

    let reloaded = app.reload().await;
    assert_eq!(reloaded.logs.logs(), app.state.logs.logs());

    let day = reloaded.logs.log(d).unwrap();
    assert_eq!(day.body_weight, Some(82.4));
    assert_eq!(day.workout_log.as_ref().unwrap().notes.as_deref(), Some(note.as_str()));
    assert_eq!(day.diet_log.as_ref().unwrap().total_macros.calories, 389.0);
}

#[tokio::test]
async fn test_stored_document_is_keyed_by_date() {
    let mut app = common::TestApp::new().await;
    tokio_test::assert_ok!(app.state.logs.set_water_intake(date(2024, 2, 29), 3.0));

    let stored = app.stored("@gymmania_logs").await.unwrap();
    assert_eq!(stored["2024-02-29"]["date"], "2024-02-29");
    assert_eq!(stored["2024-02-29"]["dietLog"]["id"], "dl_2024-02-29");
    assert_eq!(stored["2024-02-29"]["dietLog"]["waterIntakeLiters"], 3.0);
}

#[tokio::test]
async fn test_upsert_exercise_keeps_position() {
    let mut app = common::TestApp::new().await;
    let d = date(2024, 1, 8);
    for id in ["bench_press", "row", "curl"] {
        tokio_test::assert_ok!(app.state.logs.upsert_exercise(d, LoggedExercise::new(id, id)));
    }

    let mut row = LoggedExercise::new("row", "Barbell Row");
    row.add_set(70.0, 10, true);
    tokio_test::assert_ok!(app.state.logs.upsert_exercise(d, row));

    let workout = app.state.logs.log(d).unwrap().workout_log.as_ref().unwrap();
    let ids: Vec<&str> = workout.exercises.iter().map(|e| e.exercise_id.as_str()).collect();
    assert_eq!(ids, vec!["bench_press", "row", "curl"]);
    assert_eq!(workout.exercises[1].exercise_name, "Barbell Row");

    app.state.logs.remove_exercise(d, "curl");
    assert_eq!(app.state.logs.log(d).unwrap().workout_log.as_ref().unwrap().exercises.len(), 2);
}

#[tokio::test]
async fn test_negative_set_weight_rejected() {
    let mut app = common::TestApp::new().await;
    let mut bad = LoggedExercise::new("squat", "Barbell Squat");
    bad.sets.push(LoggedSet {
        set_number: 1,
        weight: -10.0,
        reps: 5,
        completed: true,
    });

    assert!(app.state.logs.upsert_exercise(date(2024, 1, 8), bad).is_err());
    assert!(app.state.logs.logs().is_empty());
    assert!(app.stored("@gymmania_logs").await.is_none());
}

#[tokio::test]
async fn test_recent_queries_are_oldest_first() {
    let mut app = common::TestApp::new().await;
    let today = date(2024, 3, 10);
    for (day, kg) in [(10, 80.0), (4, 81.0), (7, 80.5), (1, 82.0)] {
        tokio_test::assert_ok!(app.state.logs.set_body_weight(date(2024, 3, day), kg));
    }

    let weights = app.state.logs.recent_body_weights(7, today);
    let dates: Vec<u32> = weights.iter().map(|w| chrono::Datelike::day(&w.date)).collect();
    assert_eq!(dates, vec![4, 7, 10]);
    assert!(app.state.logs.recent_workout_logs(7, today).is_empty());
}

#[tokio::test]
async fn test_corrupt_log_document_starts_empty() {
    let app = common::TestApp::with_documents(&[("@gymmania_logs", "{\"2024-01-01\": 42}")]).await;
    assert_eq!(app.state.logs.logs(), &LogBook::new());
}
