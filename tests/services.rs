use chrono::NaiveDate;
use vetclinic::dto::review::ReviewDto;
use vetclinic::forms::appointment::AppointmentRequest;
use vetclinic::forms::vet::VetRequest;
use vetclinic::repository::DieselRepository;
use vetclinic::services::{ServiceError, appointment, review, vet};

mod common;

fn review_dto(score: i32, content: &str, owner_id: i32) -> ReviewDto {
    ReviewDto {
        id: None,
        score,
        content: content.into(),
        created_at: None,
        vet_id: Some(1),
        owner_id,
    }
}

#[test]
fn test_saved_review_is_listed_for_owner() {
    let test_db = common::TestDb::new("test_saved_review_is_listed_for_owner.db");
    test_db.seed();
    let repo = DieselRepository::new(test_db.pool());

    let mut dto = review_dto(3, "ok", 1);
    dto.vet_id = None;
    let saved = review::save_review(&repo, dto).unwrap();
    assert!(saved.id.is_some());
    assert!(saved.created_at.is_some());
    assert_eq!(saved.vet_id, None);

    let listed = review::list_reviews_by_owner(&repo, 1).unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], saved);
    assert_eq!(listed[0].score, 3);
    assert_eq!(listed[0].content, "ok");
    assert!(review::list_reviews_by_owner(&repo, 2).unwrap().is_empty());
}

#[test]
fn test_invalid_score_writes_nothing() {
    let test_db = common::TestDb::new("test_invalid_score_writes_nothing.db");
    test_db.seed();
    let repo = DieselRepository::new(test_db.pool());

    for score in [0, 6, -3] {
        let result = review::save_review(&repo, review_dto(score, "x", 1));
        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    }
    assert_eq!(test_db.count("reviews"), 0);
}

#[test]
fn test_review_for_unknown_owner_fails_in_store() {
    let test_db = common::TestDb::new("test_review_for_unknown_owner_fails_in_store.db");
    test_db.seed();
    let repo = DieselRepository::new(test_db.pool());

    let result = review::save_review(&repo, review_dto(4, "ghost", 42));
    assert!(matches!(result, Err(ServiceError::Internal(_))));
    assert_eq!(test_db.count("reviews"), 0);
}

#[test]
fn test_foreign_owner_cannot_touch_review() {
    let test_db = common::TestDb::new("test_foreign_owner_cannot_touch_review.db");
    test_db.seed();
    let repo = DieselRepository::new(test_db.pool());

    let saved = review::save_review(&repo, review_dto(2, "meh", 1)).unwrap();
    let id = saved.id.unwrap();

    let update = review::update_review(&repo, id, review_dto(5, "hijacked", 2), 2);
    assert!(matches!(update, Err(ServiceError::Forbidden(_))));
    let delete = review::delete_review(&repo, id, 2);
    assert!(matches!(delete, Err(ServiceError::Forbidden(_))));

    let listed = review::list_reviews_by_owner(&repo, 1).unwrap();
    assert_eq!(listed, vec![saved]);
}

#[test]
fn test_owner_updates_and_deletes_review() {
    let test_db = common::TestDb::new("test_owner_updates_and_deletes_review.db");
    test_db.seed();
    let repo = DieselRepository::new(test_db.pool());

    let saved = review::save_review(&repo, review_dto(2, "meh", 1)).unwrap();
    let id = saved.id.unwrap();

    let bad = review::update_review(&repo, id, review_dto(0, "zero", 1), 1);
    assert!(matches!(bad, Err(ServiceError::InvalidInput(_))));

    let updated = review::update_review(&repo, id, review_dto(5, "much better", 1), 1).unwrap();
    assert_eq!(updated.score, 5);
    assert_eq!(updated.content, "much better");
    assert_eq!(updated.created_at, saved.created_at);

    review::delete_review(&repo, id, 1).unwrap();
    assert!(matches!(
        review::delete_review(&repo, id, 1),
        Err(ServiceError::NotFound)
    ));
}

#[test]
fn test_created_appointment_reads_back_identically() {
    let test_db = common::TestDb::new("test_created_appointment_reads_back_identically.db");
    test_db.seed();
    let repo = DieselRepository::new(test_db.pool());

    let request = AppointmentRequest {
        owner_id: 1,
        vet_id: 2,
        pet_id: 1,
        scheduled_at: NaiveDate::from_ymd_opt(2025, 4, 2)
            .and_then(|d| d.and_hms_opt(14, 30, 0))
            .unwrap(),
        status: None,
        description: Some("Vaccination".into()),
    };

    let created = appointment::create_appointment(&repo, request).unwrap();
    let fetched = appointment::get_appointment(&repo, created.id).unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.status, "PENDING");
    assert!(matches!(
        appointment::get_appointment(&repo, created.id + 100),
        Err(ServiceError::NotFound)
    ));
}

#[test]
fn test_deleting_missing_vet_leaves_store_unchanged() {
    let test_db = common::TestDb::new("test_deleting_missing_vet_leaves_store_unchanged.db");
    test_db.seed();
    let repo = DieselRepository::new(test_db.pool());

    assert!(matches!(
        vet::delete_vet(&repo, 5),
        Err(ServiceError::NotFound)
    ));
    assert_eq!(test_db.count("vets"), 2);
    assert_eq!(vet::list_vets(&repo).unwrap().len(), 2);
}

#[test]
fn test_vet_registration_round_trip() {
    let test_db = common::TestDb::new("test_vet_registration_round_trip.db");
    let repo = DieselRepository::new(test_db.pool());

    let registered = vet::register_vet(
        &repo,
        VetRequest {
            first_name: "Rafael".into(),
            last_name: "Ortega".into(),
            specialties: vec!["surgery".into(), " ".into(), "surgery".into()],
        },
    )
    .unwrap();
    assert_eq!(registered.specialties, vec!["surgery".to_string()]);

    let fetched = vet::get_vet(&repo, registered.id).unwrap();
    assert_eq!(fetched, registered);
    assert!(matches!(vet::get_vet(&repo, 77), Err(ServiceError::NotFound)));
}

#[test]
fn test_vet_with_appointments_cannot_be_deleted() {
    let test_db = common::TestDb::new("test_vet_with_appointments_cannot_be_deleted.db");
    test_db.seed();
    let repo = DieselRepository::new(test_db.pool());

    let request = AppointmentRequest {
        owner_id: 1,
        vet_id: 1,
        pet_id: 1,
        scheduled_at: NaiveDate::from_ymd_opt(2025, 5, 6)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap(),
        status: None,
        description: None,
    };
    appointment::create_appointment(&repo, request).unwrap();

    assert!(matches!(
        vet::delete_vet(&repo, 1),
        Err(ServiceError::Internal(_))
    ));
    assert_eq!(test_db.count("vets"), 2);
    assert!(vet::get_vet(&repo, 1).is_ok());
    assert_eq!(appointment::list_appointments(&repo).unwrap().len(), 1);
}
