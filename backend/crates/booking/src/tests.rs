//! Use case tests for the booking crate, run against the in-memory repository

#[cfg(test)]
mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};
    use kernel::id::{ParentId, SchoolId, StudentId, TourId};

    use crate::domain::entity::{ParentProfile, School, Student, Tour, TourAssignment};

    pub fn school(name: &str, username: &str, code: &str) -> School {
        School {
            school_id: SchoolId::new(),
            name: name.to_string(),
            city: "İstanbul".to_string(),
            district: "Kadıköy".to_string(),
            contact_name: String::new(),
            phone: String::new(),
            username: username.to_string(),
            password: "sifre".to_string(),
            access_code: code.to_string(),
            iban: None,
            assigned_tours: vec![],
            created_at: Utc::now(),
        }
    }

    pub fn assigned(mut school: School, tour_id: TourId, price: f64) -> School {
        school.assigned_tours.push(TourAssignment { tour_id, price });
        school
    }

    pub fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    pub fn tour(title: &str, date: DateTime<Utc>) -> Tour {
        Tour {
            tour_id: TourId::new(),
            title: title.to_string(),
            description: String::new(),
            cover_image: String::new(),
            images: vec![],
            video_url: None,
            tour_type: "Kültür".to_string(),
            date,
            location: "Bursa".to_string(),
            itinerary: vec![],
            price: 500.0,
            location_ids: vec![],
        }
    }

    pub fn student(tc_no: &str, name: &str, school_id: SchoolId) -> Student {
        Student {
            student_id: StudentId::new(),
            tc_no: tc_no.to_string(),
            name: name.to_string(),
            grade: "4-B".to_string(),
            school_no: "101".to_string(),
            allergies: String::new(),
            school_id,
            created_at: Utc::now(),
        }
    }

    pub fn parent(tc_no: &str) -> ParentProfile {
        ParentProfile {
            parent_id: ParentId::new(),
            tc_no: tc_no.to_string(),
            name: None,
            phone: None,
        }
    }
}

#[cfg(test)]
mod schools_tests {
    use std::sync::Arc;

    use auth::{AuthError, Session};
    use kernel::id::{AdminId, ParentId};

    use super::fixtures;
    use crate::application::{SchoolInput, SchoolsUseCase};
    use crate::domain::entity::TourAssignment;
    use crate::error::BookingError;
    use crate::infra::memory::MemoryBookingRepository;

    fn admin() -> Session {
        Session::admin(AdminId::new(), "admin")
    }

    fn input(name: &str, username: &str, code: &str) -> SchoolInput {
        SchoolInput {
            school_id: None,
            name: name.to_string(),
            city: "İzmir".to_string(),
            district: "Bornova".to_string(),
            contact_name: "Ayşe Hanım".to_string(),
            phone: "5551112233".to_string(),
            username: username.to_string(),
            password: "okul123".to_string(),
            access_code: code.to_string(),
            iban: Some("  ".to_string()),
            assigned_tours: None,
        }
    }

    #[tokio::test]
    async fn test_upsert_twice_keeps_one_row() {
        let repo = Arc::new(MemoryBookingRepository::default());
        let use_case = SchoolsUseCase::new(repo.clone());

        let created = use_case
            .upsert(&admin(), input("Ege Koleji", "ege", "ege01"))
            .await
            .unwrap();
        assert_eq!(created.access_code, "EGE01");
        assert_eq!(created.iban, None);

        let mut again = input("Ege Koleji", "ege", "ege01");
        again.school_id = Some(created.school_id);
        let updated = use_case.upsert(&admin(), again).await.unwrap();

        assert_eq!(updated.school_id, created.school_id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(repo.schools.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_assignments_replaced_or_kept() {
        let tour = fixtures::tour("Efes", fixtures::date(2025, 5, 1));
        let tour_id = tour.tour_id;
        let repo = Arc::new(MemoryBookingRepository::default().with_tour(tour));
        let use_case = SchoolsUseCase::new(repo.clone());

        let mut first = input("Ege Koleji", "ege", "EGE01");
        first.assigned_tours = Some(vec![TourAssignment { tour_id, price: 120.0 }]);
        let school = use_case.upsert(&admin(), first).await.unwrap();

        // omitted assignments stay as they are
        let mut rename = input("Ege Koleji Anadolu", "ege", "EGE01");
        rename.school_id = Some(school.school_id);
        let renamed = use_case.upsert(&admin(), rename).await.unwrap();
        assert_eq!(renamed.price_for(tour_id), Some(120.0));

        // an explicit empty list clears them
        let mut clear = input("Ege Koleji Anadolu", "ege", "EGE01");
        clear.school_id = Some(school.school_id);
        clear.assigned_tours = Some(vec![]);
        let cleared = use_case.upsert(&admin(), clear).await.unwrap();
        assert!(cleared.assigned_tours.is_empty());
    }

    #[tokio::test]
    async fn test_code_collision_is_conflict() {
        let repo = Arc::new(MemoryBookingRepository::default());
        let use_case = SchoolsUseCase::new(repo.clone());

        use_case
            .upsert(&admin(), input("Ege Koleji", "ege", "EGE01"))
            .await
            .unwrap();
        let err = use_case
            .upsert(&admin(), input("Başka Okul", "baska", "ege01"))
            .await
            .unwrap_err();

        assert!(matches!(err, BookingError::SchoolConflict));
        assert_eq!(
            err.to_string(),
            "Okul kaydedilemedi. Kod veya Kullanıcı adı çakışıyor olabilir."
        );
    }

    #[tokio::test]
    async fn test_required_fields() {
        let use_case = SchoolsUseCase::new(Arc::new(MemoryBookingRepository::default()));
        let err = use_case
            .upsert(&admin(), input("Ege Koleji", "ege", "   "))
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::MissingField(_)));
    }

    #[tokio::test]
    async fn test_school_with_students_cannot_be_deleted() {
        let school = fixtures::school("Ege Koleji", "ege", "EGE01");
        let student = fixtures::student("11111111111", "Ali", school.school_id);
        let school_id = school.school_id;
        let repo = Arc::new(
            MemoryBookingRepository::default()
                .with_school(school)
                .with_student(student),
        );

        let err = SchoolsUseCase::new(repo)
            .delete(&admin(), &school_id)
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::SchoolHasStudents));
    }

    #[tokio::test]
    async fn test_non_admin_rejected() {
        let use_case = SchoolsUseCase::new(Arc::new(MemoryBookingRepository::default()));
        let parent = Session::parent(ParentId::new(), Default::default());

        let err = use_case.list(&parent).await.unwrap_err();
        assert!(matches!(
            err,
            BookingError::Auth(AuthError::RoleMismatch { .. })
        ));
    }
}

#[cfg(test)]
mod survey_tests {
    use std::sync::Arc;

    use auth::Session;
    use kernel::id::AdminId;

    use crate::application::{BookingConfig, SurveyInput, SurveysUseCase};
    use crate::domain::entity::Survey;
    use crate::error::BookingError;
    use crate::infra::memory::MemoryBookingRepository;

    fn use_case(repo: Arc<MemoryBookingRepository>) -> SurveysUseCase<MemoryBookingRepository> {
        SurveysUseCase::new(repo, Arc::new(BookingConfig::default()))
    }

    fn survey(options: &[&str]) -> Survey {
        Survey::new(
            "Bir sonraki gezi?".to_string(),
            String::new(),
            options.iter().map(|o| o.to_string()).collect(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_requires_two_options() {
        let use_case = use_case(Arc::new(MemoryBookingRepository::default()));
        let admin = Session::admin(AdminId::new(), "admin");

        let err = use_case
            .create(
                &admin,
                SurveyInput {
                    title: "Anket".to_string(),
                    description: String::new(),
                    options: vec!["Kapadokya".to_string(), "  ".to_string()],
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::SurveyOptionsRequired));

        let created = use_case
            .create(
                &admin,
                SurveyInput {
                    title: "Anket".to_string(),
                    description: String::new(),
                    options: vec!["Kapadokya".to_string(), "Efes".to_string()],
                },
            )
            .await
            .unwrap();
        assert!(created.is_active);
        assert_eq!(created.total_votes(), 0);
        assert_eq!(created.votes.len(), 2);
    }

    #[tokio::test]
    async fn test_vote_increments_option() {
        let survey = survey(&["Kapadokya", "Efes"]);
        let id = survey.survey_id;
        let repo = Arc::new(MemoryBookingRepository::default().with_survey(survey));

        use_case(repo.clone()).vote(&id, "Efes").await.unwrap();
        let after = use_case(repo.clone()).vote(&id, " Efes ").await.unwrap();

        let efes = after.votes.iter().find(|v| v.option == "Efes").unwrap();
        assert_eq!(efes.count, 2);
        assert_eq!(after.total_votes(), 2);
        assert_eq!(repo.surveys.lock().unwrap()[0].version, 2);
    }

    #[tokio::test]
    async fn test_vote_appends_missing_tally() {
        let mut survey = survey(&["Kapadokya", "Efes"]);
        survey.votes.retain(|v| v.option != "Efes");
        let id = survey.survey_id;
        let repo = Arc::new(MemoryBookingRepository::default().with_survey(survey));

        let after = use_case(repo).vote(&id, "Efes").await.unwrap();
        let last = after.votes.last().unwrap();
        assert_eq!((last.option.as_str(), last.count), ("Efes", 1));
    }

    #[tokio::test]
    async fn test_vote_retries_after_lost_race() {
        let survey = survey(&["Kapadokya", "Efes"]);
        let id = survey.survey_id;
        let repo = Arc::new(MemoryBookingRepository::default().with_survey(survey));
        repo.lose_vote_races(2);

        let after = use_case(repo.clone()).vote(&id, "Kapadokya").await.unwrap();
        assert_eq!(after.total_votes(), 1);
        assert_eq!(repo.surveys.lock().unwrap()[0].total_votes(), 1);
    }

    #[tokio::test]
    async fn test_vote_gives_up_under_contention() {
        let survey = survey(&["Kapadokya", "Efes"]);
        let id = survey.survey_id;
        let repo = Arc::new(MemoryBookingRepository::default().with_survey(survey));
        repo.lose_vote_races(100);

        let err = use_case(repo).vote(&id, "Efes").await.unwrap_err();
        assert!(matches!(err, BookingError::VoteContention));
    }

    #[tokio::test]
    async fn test_vote_rejects_closed_or_blank() {
        let mut closed = survey(&["Kapadokya", "Efes"]);
        closed.is_active = false;
        let closed_id = closed.survey_id;
        let open = survey(&["Kapadokya", "Efes"]);
        let open_id = open.survey_id;
        let repo = Arc::new(
            MemoryBookingRepository::default()
                .with_survey(closed)
                .with_survey(open),
        );

        let err = use_case(repo.clone()).vote(&closed_id, "Efes").await.unwrap_err();
        assert!(matches!(err, BookingError::SurveyClosed));

        let err = use_case(repo).vote(&open_id, "   ").await.unwrap_err();
        assert!(matches!(err, BookingError::InvalidSurveyOption));
    }

    #[tokio::test]
    async fn test_vote_for_unlisted_option_is_appended() {
        let survey = survey(&["Kapadokya", "Efes"]);
        let id = survey.survey_id;
        let repo = Arc::new(MemoryBookingRepository::default().with_survey(survey));

        let after = use_case(repo.clone()).vote(&id, " Truva ").await.unwrap();
        assert_eq!(after.options, vec!["Kapadokya", "Efes", "Truva"]);

        let stored = repo.surveys.lock().unwrap()[0].clone();
        assert_eq!(stored.options, after.options);
        let last = stored.votes.last().unwrap();
        assert_eq!((last.option.as_str(), last.count), ("Truva", 1));
        assert_eq!(stored.total_votes(), 1);
    }
}

#[cfg(test)]
mod import_tests {
    use std::sync::Arc;

    use auth::Session;

    use super::fixtures;
    use crate::application::StudentImportUseCase;
    use crate::error::BookingError;
    use crate::infra::memory::MemoryBookingRepository;
    use crate::infra::spreadsheet;

    fn workbook(rows: &[[&str; 5]]) -> Vec<u8> {
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        spreadsheet::write_sheet("Öğrenciler", &["TC No", "Ad", "Soyad", "Sınıf", "Okul No"], &rows)
            .unwrap()
    }

    #[tokio::test]
    async fn test_import_skips_incomplete_rows() {
        let old_school = fixtures::school("Eski Okul", "eski", "ESKI");
        let new_school = fixtures::school("Yeni Okul", "yeni", "YENI");
        let mut moved = fixtures::student("11111111111", "Ali Eski", old_school.school_id);
        moved.allergies = "Fıstık".to_string();
        let new_school_id = new_school.school_id;

        let repo = Arc::new(
            MemoryBookingRepository::default()
                .with_school(old_school)
                .with_school(new_school)
                .with_student(moved),
        );

        let file = workbook(&[
            ["11111111111", "Ali", "Yılmaz", "3-A", "12"],
            ["", "Ayşe", "Kara", "3-A", "13"],
            ["33333333333", "", "", "3-B", "14"],
            ["44444444444", "Veli", "", "", ""],
        ]);

        let count = StudentImportUseCase::new(repo.clone())
            .import(&Session::school(new_school_id), Some(file.as_slice()))
            .await
            .unwrap();
        assert_eq!(count, 2);

        let students = repo.students.lock().unwrap();
        assert_eq!(students.len(), 2);

        let ali = students.iter().find(|s| s.tc_no == "11111111111").unwrap();
        assert_eq!(ali.name, "Ali Yılmaz");
        assert_eq!(ali.school_id, new_school_id);
        assert_eq!(ali.allergies, "Fıstık");

        let veli = students.iter().find(|s| s.tc_no == "44444444444").unwrap();
        assert_eq!(veli.name, "Veli");
        assert_eq!(veli.grade, "");
        assert_eq!(veli.school_no, "");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let school = fixtures::school("Okul", "okul", "OKUL");
        let session = Session::school(school.school_id);
        let repo = Arc::new(MemoryBookingRepository::default().with_school(school));
        let use_case = StudentImportUseCase::new(repo);

        let err = use_case.import(&session, None).await.unwrap_err();
        assert!(matches!(err, BookingError::FileMissing));
        assert_eq!(err.to_string(), "Dosya yüklenmedi.");

        let empty: &[u8] = &[];
        let err = use_case.import(&session, Some(empty)).await.unwrap_err();
        assert!(matches!(err, BookingError::FileMissing));
    }
}

#[cfg(test)]
mod registration_tests {
    use std::sync::Arc;

    use auth::Session;
    use chrono::{Duration, Utc};

    use super::fixtures;
    use crate::application::RegistrationsUseCase;
    use crate::domain::entity::Registration;
    use crate::domain::value_object::RegistrationStatus;
    use crate::error::BookingError;
    use crate::infra::memory::MemoryBookingRepository;

    #[tokio::test]
    async fn test_parent_registers_own_school_student() {
        let school = fixtures::school("Okul", "okul", "OKUL");
        let other = fixtures::school("Diğer", "diger", "DIGER");
        let tour = fixtures::tour("Kapadokya", fixtures::date(2025, 6, 1));
        let mine = fixtures::student("11111111111", "Ali", school.school_id);
        let theirs = fixtures::student("22222222222", "Ayşe", other.school_id);
        let parent = fixtures::parent("11111111111");
        let session = Session::parent(parent.parent_id, school.school_id);
        let (tour_id, mine_id, theirs_id) = (tour.tour_id, mine.student_id, theirs.student_id);

        let repo = Arc::new(
            MemoryBookingRepository::default()
                .with_school(school)
                .with_school(other)
                .with_tour(tour)
                .with_student(mine)
                .with_student(theirs)
                .with_parent(parent),
        );
        let use_case = RegistrationsUseCase::new(repo.clone());

        let registration = use_case.register(&session, &mine_id, &tour_id).await.unwrap();
        assert_eq!(registration.status, RegistrationStatus::PendingPayment);

        // duplicates are accepted
        use_case.register(&session, &mine_id, &tour_id).await.unwrap();
        assert_eq!(repo.registrations.lock().unwrap().len(), 2);

        let err = use_case.register(&session, &theirs_id, &tour_id).await.unwrap_err();
        assert!(matches!(err, BookingError::StudentOutsideSchool));
    }

    #[tokio::test]
    async fn test_school_approves_first_registration() {
        let school = fixtures::school("Okul", "okul", "OKUL");
        let tour = fixtures::tour("Kapadokya", fixtures::date(2025, 6, 1));
        let student = fixtures::student("11111111111", "Ali", school.school_id);
        let session = Session::school(school.school_id);

        let older = Registration {
            created_at: Utc::now() - Duration::days(2),
            ..Registration::new(student.student_id, tour.tour_id)
        };
        let newer = Registration::new(student.student_id, tour.tour_id);
        let (older_id, newer_id) = (older.registration_id, newer.registration_id);
        let (student_id, tour_id) = (student.student_id, tour.tour_id);

        let repo = Arc::new(
            MemoryBookingRepository::default()
                .with_school(school)
                .with_tour(tour)
                .with_student(student)
                .with_registration(newer)
                .with_registration(older),
        );

        RegistrationsUseCase::new(repo.clone())
            .update_status(&session, &student_id, &tour_id, RegistrationStatus::Approved)
            .await
            .unwrap();

        let registrations = repo.registrations.lock().unwrap();
        let status_of = |id| {
            registrations
                .iter()
                .find(|r| r.registration_id == id)
                .map(|r| r.status)
        };
        assert_eq!(status_of(older_id), Some(RegistrationStatus::Approved));
        assert_eq!(status_of(newer_id), Some(RegistrationStatus::PendingPayment));
    }

    #[tokio::test]
    async fn test_missing_registration() {
        let school = fixtures::school("Okul", "okul", "OKUL");
        let tour = fixtures::tour("Kapadokya", fixtures::date(2025, 6, 1));
        let student = fixtures::student("11111111111", "Ali", school.school_id);
        let session = Session::school(school.school_id);
        let (student_id, tour_id) = (student.student_id, tour.tour_id);

        let repo = Arc::new(
            MemoryBookingRepository::default()
                .with_school(school)
                .with_tour(tour)
                .with_student(student),
        );

        let err = RegistrationsUseCase::new(repo)
            .update_status(&session, &student_id, &tour_id, RegistrationStatus::Approved)
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::RegistrationNotFound));
        assert_eq!(err.to_string(), "Kayıt bulunamadı");
    }
}

#[cfg(test)]
mod report_tests {
    use std::sync::Arc;

    use auth::Session;
    use kernel::id::AdminId;

    use super::fixtures;
    use crate::application::{ExpensesUseCase, ReportsUseCase};
    use crate::domain::entity::Registration;
    use crate::domain::value_object::RegistrationStatus;
    use crate::infra::memory::MemoryBookingRepository;

    fn approved(registration: Registration) -> Registration {
        Registration {
            status: RegistrationStatus::Approved,
            ..registration
        }
    }

    #[tokio::test]
    async fn test_revenue_and_profit() {
        let tour = fixtures::tour("Kapadokya", fixtures::date(2025, 6, 1));
        let later = fixtures::tour("Efes", fixtures::date(2025, 9, 1));
        let tour_id = tour.tour_id;
        let a = fixtures::assigned(fixtures::school("A", "a", "A"), tour_id, 100.0);
        let b = fixtures::assigned(fixtures::school("B", "b", "B"), tour_id, 150.0);
        let a1 = fixtures::student("1", "A1", a.school_id);
        let a2 = fixtures::student("2", "A2", a.school_id);
        let b1 = fixtures::student("3", "B1", b.school_id);
        let b2 = fixtures::student("4", "B2", b.school_id);

        let repo = Arc::new(
            MemoryBookingRepository::default()
                .with_tour(tour)
                .with_tour(later)
                .with_registration(approved(Registration::new(a1.student_id, tour_id)))
                .with_registration(approved(Registration::new(a2.student_id, tour_id)))
                .with_registration(approved(Registration::new(b1.student_id, tour_id)))
                .with_registration(Registration::new(b2.student_id, tour_id))
                .with_school(a)
                .with_school(b)
                .with_student(a1)
                .with_student(a2)
                .with_student(b1)
                .with_student(b2),
        );
        let admin = Session::admin(AdminId::new(), "admin");
        let expenses = ExpensesUseCase::new(repo.clone());
        let reports = ReportsUseCase::new(repo.clone());

        expenses.add(&admin, &tour_id, "Otobüs", 80.0).await.unwrap();
        expenses.add(&admin, &tour_id, "Rehber", 40.0).await.unwrap();

        let report = reports.tour_reports(&admin).await.unwrap();
        // newest tour first
        assert_eq!(report[0].title, "Efes");
        let kapadokya = &report[1];
        assert_eq!(kapadokya.total_revenue, 350.0);
        assert_eq!(kapadokya.total_expenses, 120.0);
        assert_eq!(kapadokya.profit, 230.0);
        assert_eq!(kapadokya.registered_count, 3);

        expenses.add(&admin, &tour_id, "Yemek", 50.0).await.unwrap();
        let report = reports.tour_reports(&admin).await.unwrap();
        assert_eq!(report[1].profit, 180.0);
        assert_eq!(report[1].expenses.len(), 3);
    }

    #[tokio::test]
    async fn test_expense_validation() {
        let tour = fixtures::tour("Kapadokya", fixtures::date(2025, 6, 1));
        let tour_id = tour.tour_id;
        let repo = Arc::new(MemoryBookingRepository::default().with_tour(tour));
        let admin = Session::admin(AdminId::new(), "admin");
        let expenses = ExpensesUseCase::new(repo);

        assert!(expenses.add(&admin, &tour_id, "Otobüs", -5.0).await.is_err());
        assert!(expenses.add(&admin, &tour_id, "  ", 5.0).await.is_err());
        assert!(
            expenses
                .add(&admin, &Default::default(), "Otobüs", 5.0)
                .await
                .is_err()
        );
    }
}

#[cfg(test)]
mod student_form_tests {
    use std::sync::Arc;

    use auth::Session;

    use super::fixtures;
    use crate::application::{StudentForm, StudentFormUseCase};
    use crate::infra::memory::MemoryBookingRepository;

    fn form(tc_no: Option<&str>) -> StudentForm {
        StudentForm {
            tc_no: tc_no.map(str::to_string),
            name: " Deniz Yıldız ".to_string(),
            grade: "2-C".to_string(),
            school_no: "77".to_string(),
            allergies: "Süt".to_string(),
            parent_name: "Ece Yıldız".to_string(),
            parent_phone: "5550001122".to_string(),
        }
    }

    #[tokio::test]
    async fn test_defaults_to_parent_tc_and_updates_contact() {
        let school = fixtures::school("Okul", "okul", "OKUL");
        let parent = fixtures::parent("12345678901");
        let session = Session::parent(parent.parent_id, school.school_id);
        let school_id = school.school_id;

        let repo = Arc::new(
            MemoryBookingRepository::default()
                .with_school(school)
                .with_parent(parent),
        );

        let student = StudentFormUseCase::new(repo.clone())
            .upsert_student(&session, form(Some("  ")))
            .await
            .unwrap();

        assert_eq!(student.tc_no, "12345678901");
        assert_eq!(student.name, "Deniz Yıldız");
        assert_eq!(student.school_id, school_id);
        assert_eq!(student.allergies, "Süt");

        let parents = repo.parents.lock().unwrap();
        assert_eq!(parents[0].name.as_deref(), Some("Ece Yıldız"));
        assert_eq!(parents[0].phone.as_deref(), Some("5550001122"));
    }

    #[tokio::test]
    async fn test_explicit_tc_updates_existing_student() {
        let school = fixtures::school("Okul", "okul", "OKUL");
        let parent = fixtures::parent("12345678901");
        let existing = fixtures::student("98765432109", "Eski Ad", school.school_id);
        let session = Session::parent(parent.parent_id, school.school_id);

        let repo = Arc::new(
            MemoryBookingRepository::default()
                .with_school(school)
                .with_parent(parent)
                .with_student(existing),
        );

        let student = StudentFormUseCase::new(repo.clone())
            .upsert_student(&session, form(Some("98765432109")))
            .await
            .unwrap();

        assert_eq!(student.name, "Deniz Yıldız");
        assert_eq!(repo.students.lock().unwrap().len(), 1);
    }
}

#[cfg(test)]
mod dashboard_tests {
    use std::sync::Arc;

    use auth::Session;
    use kernel::id::AdminId;

    use super::fixtures;
    use crate::application::DashboardsUseCase;
    use crate::domain::entity::Registration;
    use crate::domain::value_object::RegistrationStatus;
    use crate::infra::memory::MemoryBookingRepository;

    #[tokio::test]
    async fn test_home_lists_school_pairs_and_unassigned_tours() {
        let early = fixtures::tour("Bursa", fixtures::date(2025, 4, 1));
        let late = fixtures::tour("Efes", fixtures::date(2025, 10, 1));
        let school = fixtures::assigned(fixtures::school("Okul", "okul", "OKUL"), late.tour_id, 250.0);
        let student = fixtures::student("1", "Ali", school.school_id);
        let registration = Registration {
            status: RegistrationStatus::Approved,
            ..Registration::new(student.student_id, late.tour_id)
        };
        let (early_id, late_id) = (early.tour_id, late.tour_id);

        let repo = Arc::new(
            MemoryBookingRepository::default()
                .with_tour(late)
                .with_tour(early)
                .with_school(school)
                .with_student(student)
                .with_registration(registration),
        );

        let home = DashboardsUseCase::new(repo).home().await.unwrap();
        assert_eq!(home.tours.len(), 2);
        assert_eq!(home.tours[0].tour_id, early_id);
        assert!(home.tours[0].school.is_none());
        assert_eq!(home.tours[1].tour_id, late_id);
        assert_eq!(home.tours[1].price, Some(250.0));
        assert_eq!(home.tours[1].registered_count, 1);
        assert!(home.site_config.stats.is_empty());
    }

    #[tokio::test]
    async fn test_admin_counters() {
        let school = fixtures::school("Okul", "okul", "OKUL");
        let tour = fixtures::tour("Efes", fixtures::date(2025, 10, 1));
        let s1 = fixtures::student("1", "Ali", school.school_id);
        let s2 = fixtures::student("2", "Ayşe", school.school_id);
        let pending = Registration::new(s1.student_id, tour.tour_id);

        let repo = Arc::new(
            MemoryBookingRepository::default()
                .with_school(school)
                .with_tour(tour)
                .with_student(s1)
                .with_student(s2)
                .with_registration(pending),
        );

        let dashboard = DashboardsUseCase::new(repo)
            .admin_dashboard(&Session::admin(AdminId::new(), "admin"))
            .await
            .unwrap();

        assert_eq!(dashboard.total_schools, 1);
        assert_eq!(dashboard.total_students, 2);
        assert_eq!(dashboard.total_registrations, 1);
        assert_eq!(dashboard.pending_payments, 1);
        assert_eq!(dashboard.school_stats[0].total_students, 2);
        assert_eq!(dashboard.school_stats[0].registered_students, 1);
    }

    #[tokio::test]
    async fn test_parent_dashboard_links_student_by_tc() {
        let school = fixtures::assigned(
            fixtures::school("Okul", "okul", "OKUL"),
            Default::default(),
            100.0,
        );
        let parent = fixtures::parent("55555555555");
        let student = fixtures::student("55555555555", "Can", school.school_id);
        let session = Session::parent(parent.parent_id, school.school_id);

        let repo = Arc::new(
            MemoryBookingRepository::default()
                .with_school(school)
                .with_parent(parent)
                .with_student(student),
        );

        let dashboard = DashboardsUseCase::new(repo).parent_dashboard(&session).await.unwrap();
        assert_eq!(dashboard.parent_tc, "55555555555");
        assert_eq!(dashboard.student.map(|s| s.student.name).as_deref(), Some("Can"));
        // assignments pointing at unknown tours are not shown
        assert!(dashboard.tours.is_empty());
    }
}

#[cfg(test)]
mod request_body_tests {
    use std::sync::Arc;

    use auth::Session;
    use axum::body::Body;
    use axum::extract::{Extension, FromRequest, State};
    use axum::http::{Request, StatusCode, header};
    use axum::response::{IntoResponse, Response};
    use kernel::id::AdminId;
    use serde_json::Value;

    use crate::application::BookingConfig;
    use crate::error::BookingError;
    use crate::infra::memory::MemoryBookingRepository;
    use crate::presentation::dto::SchoolRequest;
    use crate::presentation::extract::ApiJson;
    use crate::presentation::handlers::{self, BookingAppState};

    fn state() -> BookingAppState<MemoryBookingRepository> {
        BookingAppState {
            repo: Arc::new(MemoryBookingRepository::default()),
            config: Arc::new(BookingConfig::default()),
        }
    }

    fn json_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/admin/schools")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn envelope(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_school_without_name_reaches_validation() {
        let request = json_request(r#"{"city":"İzmir"}"#);
        let ApiJson(req) = ApiJson::<SchoolRequest>::from_request(request, &())
            .await
            .unwrap();

        let result = handlers::upsert_school(
            State(state()),
            Extension(Session::admin(AdminId::new(), "admin")),
            ApiJson(req),
        )
        .await;
        let err = match result {
            Err(err) => err,
            Ok(_) => panic!("school without a name was saved"),
        };
        assert!(matches!(err, BookingError::MissingField("Okul adı")));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = envelope(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Okul adı zorunludur.");
    }

    #[tokio::test]
    async fn test_mistyped_body_renders_envelope() {
        let request = json_request(r#"{"assignedTours":5}"#);
        let err = ApiJson::<SchoolRequest>::from_request(request, &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, BookingError::InvalidBody(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = envelope(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Gönderilen bilgiler eksik veya hatalı.");
    }

    #[tokio::test]
    async fn test_non_json_body_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/admin/schools")
            .body(Body::from("name=Ege"))
            .unwrap();
        let err = ApiJson::<SchoolRequest>::from_request(request, &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, BookingError::MalformedBody(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope(response).await["success"], false);
    }
}
