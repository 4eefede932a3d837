use coursebook_db::{CourseStore, PgStore, StoreError, UserStore};
use coursebook_gate::PrincipalSource;
use coursebook_models::{Course, CourseId, NewCourse, NewUser, User, UserId};
use sqlx::PgPool;

fn new_user(email: &str) -> NewUser {
    NewUser {
        first_name: "Joe".to_string(),
        last_name: "Smith".to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$storedhash".to_string(),
    }
}

fn new_course(title: &str) -> NewCourse {
    NewCourse {
        title: title.to_string(),
        description: "Learn by building".to_string(),
        estimated_time: Some("12 hours".to_string()),
        materials_needed: None,
    }
}

async fn owner_course_and_stranger(store: &PgStore) -> (User, Course, User) {
    let owner = store.create_user(new_user("joe@smith.com")).await.unwrap();
    let stranger = store.create_user(new_user("sally@jones.com")).await.unwrap();
    let course = store
        .create_course(owner.id, new_course("Bookcase"))
        .await
        .unwrap();
    (owner, course, stranger)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find_user(pool: PgPool) {
    let store = PgStore::new(pool);

    let created = store.create_user(new_user("joe@smith.com")).await.unwrap();
    let found = store.find_user(created.id).await.unwrap().unwrap();

    assert_eq!(found, created);
    assert!(store.find_user(UserId(999_999)).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_is_unique_violation(pool: PgPool) {
    let store = PgStore::new(pool);
    store.create_user(new_user("joe@smith.com")).await.unwrap();

    let err = store
        .create_user(new_user("joe@smith.com"))
        .await
        .unwrap_err();

    match err {
        StoreError::UniqueViolation(constraint) => assert_eq!(constraint, "users_email_key"),
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_course_with_unknown_owner_is_foreign_key_violation(pool: PgPool) {
    let store = PgStore::new(pool);

    let err = store
        .create_course(UserId(999_999), new_course("Orphan"))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::ForeignKeyViolation(_)));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_principal_lookup_maps_user_and_hash(pool: PgPool) {
    let store = PgStore::new(pool);
    let user = store.create_user(new_user("joe@smith.com")).await.unwrap();

    let stored = store
        .principal_by_email("joe@smith.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stored.principal.id, user.id);
    assert_eq!(stored.principal.email, "joe@smith.com");
    assert_eq!(stored.principal.first_name, "Joe");
    assert_eq!(stored.password_hash, "$2b$04$storedhash");
    assert!(
        store
            .principal_by_email("JOE@smith.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_non_owner_update_and_delete_leave_row_unchanged(pool: PgPool) {
    let store = PgStore::new(pool);
    let (_, course, stranger) = owner_course_and_stranger(&store).await;

    let updated = store
        .update_course(course.id, stranger.id, new_course("Hijacked"))
        .await
        .unwrap();
    let deleted = store.delete_course(course.id, stranger.id).await.unwrap();

    assert!(updated.is_none());
    assert!(!deleted);
    let stored = store.find_course(course.id).await.unwrap().unwrap();
    assert_eq!(stored, course);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_owner_update_keeps_id_and_delete_removes(pool: PgPool) {
    let store = PgStore::new(pool);
    let (owner, course, _) = owner_course_and_stranger(&store).await;

    let updated = store
        .update_course(course.id, owner.id, new_course("Shelf"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, course.id);
    assert_eq!(updated.title, "Shelf");
    assert_eq!(updated.user_id, owner.id);
    assert!(updated.updated_at >= course.updated_at);

    assert!(store.delete_course(course.id, owner.id).await.unwrap());
    assert!(store.find_course(course.id).await.unwrap().is_none());
    assert!(!store.delete_course(course.id, owner.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_course_update_returns_none(pool: PgPool) {
    let store = PgStore::new(pool);
    let (owner, _, _) = owner_course_and_stranger(&store).await;

    let updated = store
        .update_course(CourseId(999_999), owner.id, new_course("Ghost"))
        .await
        .unwrap();

    assert!(updated.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_course_reads_join_owner(pool: PgPool) {
    let store = PgStore::new(pool);
    let (owner, course, stranger) = owner_course_and_stranger(&store).await;
    store
        .create_course(stranger.id, new_course("Birdhouse"))
        .await
        .unwrap();

    let view = store
        .find_course_with_owner(course.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.course, course);
    assert_eq!(view.owner.id, owner.id);
    assert_eq!(view.owner.email, "joe@smith.com");
    assert_eq!(view.owner.first_name, "Joe");

    let mine = store.list_courses_by_owner(owner.id).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].course.title, "Bookcase");
    assert_eq!(mine[0].owner.email, "joe@smith.com");

    let all = store.list_courses().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].owner.email, "sally@jones.com");

    assert!(
        store
            .find_course_with_owner(CourseId(999_999))
            .await
            .unwrap()
            .is_none()
    );
}
