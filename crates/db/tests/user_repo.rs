//! Integration tests for the users repository.

mod common;

use common::{bootstrapped, insert_class, insert_member, insert_trainer, member_profile, new_user};
use gym_core::roles::{Role, RoleProfile};
use gym_db::repositories::{MembershipRepo, UserRepo, WorkoutClassRepo};
use sqlx::PgPool;

#[sqlx::test(migrations = false)]
async fn test_create_and_find_user(pool: PgPool) {
    let mut conn = bootstrapped(&pool).await;

    let created = insert_member(&mut conn, "alice").await;
    assert!(created.id > 0);
    assert_eq!(created.role, Role::Member);

    let by_id = UserRepo::find_by_id(&mut conn, created.id)
        .await
        .unwrap()
        .expect("user should be found by id");
    assert_eq!(by_id.username, "alice");
    assert_eq!(by_id.profile(), member_profile());

    let by_name = UserRepo::find_by_username(&mut conn, "alice")
        .await
        .unwrap()
        .expect("user should be found by username");
    assert_eq!(by_name.id, created.id);
}

#[sqlx::test(migrations = false)]
async fn test_trainer_profile_round_trips_through_columns(pool: PgPool) {
    let mut conn = bootstrapped(&pool).await;

    let trainer = insert_trainer(&mut conn, "tom").await;
    assert_eq!(
        trainer.profile(),
        RoleProfile::Trainer {
            specialization: Some("Strength".to_string()),
            years_of_experience: 4,
        }
    );
    assert_eq!(trainer.fitness_goals, None);
}

#[sqlx::test(migrations = false)]
async fn test_unknown_user_is_none(pool: PgPool) {
    let mut conn = bootstrapped(&pool).await;

    assert!(UserRepo::find_by_id(&mut conn, 999_999)
        .await
        .unwrap()
        .is_none());
    assert!(UserRepo::find_by_username(&mut conn, "nobody")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = false)]
async fn test_duplicate_username_is_unique_violation(pool: PgPool) {
    let mut conn = bootstrapped(&pool).await;
    insert_member(&mut conn, "bob").await;

    let err = UserRepo::create(&mut conn, &new_user("bob", member_profile()))
        .await
        .unwrap_err();
    assert!(err.is_unique_violation(), "unexpected error: {err}");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = 'bob'")
        .fetch_one(&mut *conn)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = false)]
async fn test_negative_experience_is_check_violation(pool: PgPool) {
    let mut conn = bootstrapped(&pool).await;

    let input = new_user(
        "negative",
        RoleProfile::Trainer {
            specialization: None,
            years_of_experience: -1,
        },
    );
    let err = UserRepo::create(&mut conn, &input).await.unwrap_err();
    assert!(err.is_check_violation(), "unexpected error: {err}");
}

#[sqlx::test(migrations = false)]
async fn test_list_users_in_id_order(pool: PgPool) {
    let mut conn = bootstrapped(&pool).await;
    let a = insert_member(&mut conn, "first").await;
    let b = insert_trainer(&mut conn, "second").await;

    let users = UserRepo::list(&mut conn).await.unwrap();
    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert!(ids.contains(&a.id) && ids.contains(&b.id));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_delete_nonexistent_user_returns_false(pool: PgPool) {
    let mut conn = bootstrapped(&pool).await;
    assert!(!UserRepo::delete(&mut conn, 424_242).await.unwrap());
}

#[sqlx::test(migrations = false)]
async fn test_delete_member_releases_class_places(pool: PgPool) {
    let mut conn = bootstrapped(&pool).await;
    let trainer = insert_trainer(&mut conn, "coach").await;
    let member = insert_member(&mut conn, "leaving").await;
    let class = insert_class(&mut conn, trainer.id, "Boxing", 5).await;

    let outcome = WorkoutClassRepo::enroll_member(&mut conn, member.id, class.id)
        .await
        .unwrap();
    assert!(outcome.is_enrolled());

    assert!(UserRepo::delete(&mut conn, member.id).await.unwrap());

    let class = WorkoutClassRepo::find_by_id(&mut conn, class.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(class.current_enrollment, 0);
    assert_eq!(common::enrollment_rows(&mut conn, class.id).await, 0);
    assert!(MembershipRepo::list_for_user(&mut conn, member.id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = false)]
async fn test_delete_trainer_cascades_to_classes(pool: PgPool) {
    let mut conn = bootstrapped(&pool).await;
    let trainer = insert_trainer(&mut conn, "departing").await;
    let class = insert_class(&mut conn, trainer.id, "Pilates", 8).await;

    assert!(UserRepo::delete(&mut conn, trainer.id).await.unwrap());
    assert!(WorkoutClassRepo::find_by_id(&mut conn, class.id)
        .await
        .unwrap()
        .is_none());
}
