use gtsapp::{
    app::route::Route,
    form::{
        EntityForm,
        PersonForm,
    },
    state::{
        Navigation,
        SubmitState,
        ViewState,
    },
    view::{
        DROPDOWN_FAILED,
        create::CreateView,
        edit::EditView,
    },
};
use gtscore::{
    error::BackendError,
    kind::EntityKind,
    thesis::Thesis,
    university::UniversityInput,
};
use test_gts::{
    core::{
        MockPlatform,
        bad_request,
        expect_entities,
        not_found,
    },
    fixture,
};

fn navigated(notice: &str) -> SubmitState {
    SubmitState::Navigated(Navigation {
        route: Route::Dashboard,
        notice: notice.to_string(),
    })
}

#[tokio::test]
async fn create_university() {
    let mut platform = MockPlatform::new();
    expect_entities(&mut platform);
    platform.expect_add_university()
        .times(1)
        .withf(|input| input == &UniversityInput {
            university_name: "Tech U".to_string(),
            location: "Springfield".to_string(),
        })
        .returning(|_| Ok(3));

    let mut view = CreateView::new(&platform);
    view.mount().await;
    view.select_kind(EntityKind::University);
    let EntityForm::University(form) = view.form_mut() else {
        panic!("expected the university form");
    };
    form.university_name = "Tech U".to_string();
    form.location = " Springfield ".to_string();
    assert_eq!(view.submit().await, &navigated("University added successfully!"));
}

#[tokio::test]
async fn create_validation() {
    let mut platform = MockPlatform::new();
    expect_entities(&mut platform);
    platform.expect_add_person().never();

    let mut view = CreateView::new(&platform);
    view.mount().await;
    assert_eq!(view.kind(), EntityKind::Person);
    let EntityForm::Person(form) = view.form_mut() else {
        panic!("expected the person form");
    };
    form.second_name = "Lovelace".to_string();
    assert_eq!(
        view.submit().await,
        &SubmitState::Failed("First name is required".to_string()),
    );
    assert_eq!(view.form(), &EntityForm::Person(PersonForm {
        second_name: "Lovelace".to_string(),
        ..Default::default()
    }));
    assert!(view.render().ends_with("Error: First name is required"));
}

#[tokio::test]
async fn create_thesis_server_error() {
    let mut platform = MockPlatform::new();
    expect_entities(&mut platform);
    platform.expect_add_thesis()
        .times(1)
        .withf(|input| input.topics == ["Computation"] && input.keywords.is_empty())
        .returning(|_| Err(bad_request("Author does not exist")));

    let mut view = CreateView::new(&platform);
    view.mount().await;
    view.select_kind(EntityKind::Thesis);
    let EntityForm::Thesis(form) = view.form_mut() else {
        panic!("expected the thesis form");
    };
    form.title = "Analytical Engines".to_string();
    form.abstract_text = "Notes on the engine.".to_string();
    form.author_id = "9".to_string();
    form.thesis_year = "2023".to_string();
    form.thesis_type = "PhD".to_string();
    form.university_id = "1".to_string();
    form.institute_id = "7".to_string();
    form.page_count = "120".to_string();
    form.language = "English".to_string();
    form.submission_date = "2024-05-01".to_string();
    form.topics.update(0, "Computation ");
    form.topics.add();
    form.keywords.add();
    let draft = view.form().clone();

    assert_eq!(
        view.submit().await,
        &SubmitState::Failed("Author does not exist".to_string()),
    );
    assert_eq!(view.form(), &draft);
    assert!(view.render().contains("Authors: 1 Ada Lovelace; 2 Alan Turing; 3 Grace Hopper"));
}

#[tokio::test]
async fn create_transport_error() {
    let mut platform = MockPlatform::new();
    expect_entities(&mut platform);
    platform.expect_add_person()
        .times(1)
        .returning(|_| Err(BackendError::Transport("connection refused".to_string())));

    let mut view = CreateView::new(&platform);
    view.mount().await;
    *view.form_mut() = EntityForm::Person(PersonForm {
        first_name: "Ada".to_string(),
        second_name: "Lovelace".to_string(),
        phone_number: "555".to_string(),
    });
    assert_eq!(
        view.submit().await.error(),
        Some("Failed to add person."),
    );
}

#[tokio::test]
async fn create_dropdown_failure() {
    let mut platform = MockPlatform::new();
    platform.expect_list_persons()
        .times(1)
        .returning(|| Err(BackendError::Transport("connection refused".to_string())));
    platform.expect_list_universities()
        .times(1)
        .returning(|| Ok(fixture::universities()));
    platform.expect_list_institutes()
        .times(1)
        .returning(|| Ok(fixture::institutes()));

    let mut view = CreateView::new(&platform);
    view.mount().await;
    assert_eq!(view.options(), &ViewState::Error(DROPDOWN_FAILED.to_string()));

    // the form stays usable and keeps its kind across reselection
    view.select_kind(EntityKind::Institute);
    if let EntityForm::Institute(form) = view.form_mut() {
        form.institute_name = "Institute of Computing".to_string();
    }
    view.select_kind(EntityKind::Institute);
    assert!(matches!(
        view.form(),
        EntityForm::Institute(form) if form.institute_name == "Institute of Computing",
    ));
    view.select_kind(EntityKind::Person);
    assert_eq!(view.form(), &EntityForm::new(EntityKind::Person));
}

#[tokio::test]
async fn edit_thesis_keeps_author() {
    let mut platform = MockPlatform::new();
    platform.expect_get_thesis()
        .times(1)
        .withf(|id| *id == 12)
        .returning(|_| Ok(fixture::thesis()));
    platform.expect_list_universities()
        .times(1)
        .returning(|| Ok(fixture::universities()));
    platform.expect_list_institutes()
        .times(1)
        .returning(|| Ok(fixture::institutes()));
    platform.expect_update_thesis()
        .times(1)
        .withf(|id, input| *id == 12
            && input.author_id == 1
            && input.title == "Analytical Engines, Revised"
            && input.topics == ["Computation", "History"])
        .returning(|_, _| Ok(true));

    let mut view = EditView::new(&platform, EntityKind::Thesis, 12);
    view.mount().await;
    let Some(EntityForm::Thesis(form)) = view.form_mut() else {
        panic!("expected the thesis form");
    };
    form.author_id = "2".to_string();
    form.title = "Analytical Engines, Revised".to_string();
    assert_eq!(view.submit().await, &navigated("Thesis updated successfully!"));
}

#[tokio::test]
async fn edit_empty_lists() {
    let mut platform = MockPlatform::new();
    platform.expect_get_thesis()
        .times(1)
        .returning(|_| Ok(Thesis {
            topics: vec![],
            keywords: vec![],
            ..fixture::thesis()
        }));
    platform.expect_list_universities()
        .times(1)
        .returning(|| Err(BackendError::Transport("connection refused".to_string())));
    platform.expect_list_institutes()
        .times(1)
        .returning(|| Ok(fixture::institutes()));
    platform.expect_update_thesis()
        .times(1)
        .withf(|_, input| input.topics.is_empty() && input.keywords.is_empty())
        .returning(|_, _| Ok(true));

    let mut view = EditView::new(&platform, EntityKind::Thesis, 12);
    view.mount().await;
    let editing = view.state().ready().expect("loaded");
    assert!(editing.options.universities.is_empty());
    assert_eq!(editing.options.institutes.len(), 2);
    let EntityForm::Thesis(form) = &editing.form else {
        panic!("expected the thesis form");
    };
    assert_eq!(form.topics.rows(), [""]);
    assert_eq!(form.keywords.rows(), [""]);
    assert!(view.render().contains("Author: Ada Lovelace [/details/person/1] (cannot be changed)"));
    assert!(view.submit().await.navigation().is_some());
}

#[tokio::test]
async fn edit_load_errors() {
    let mut platform = MockPlatform::new();
    platform.expect_get_person()
        .times(1)
        .returning(|_| Err(not_found("Person")));
    platform.expect_get_university()
        .times(1)
        .returning(|_| Err(BackendError::Decode("expected value".to_string())));
    platform.expect_update_person().never();

    let mut view = EditView::new(&platform, EntityKind::Person, 40);
    view.mount().await;
    assert_eq!(view.state(), &ViewState::Error("Person not found".to_string()));
    assert_eq!(view.submit().await, &SubmitState::Idle);
    assert!(view.render().ends_with("Back to dashboard [/]"));

    let mut view = EditView::new(&platform, EntityKind::University, 41);
    view.mount().await;
    assert_eq!(view.state(), &ViewState::Error("Failed to load university.".to_string()));
}

#[tokio::test]
async fn edit_failure_inline() {
    let mut platform = MockPlatform::new();
    platform.expect_get_university()
        .times(1)
        .returning(|_| Ok(fixture::universities()[0].clone()));
    platform.expect_update_university()
        .times(1)
        .withf(|id, input| *id == 1 && input.location == "Shelbyville")
        .returning(|_, _| Err(bad_request("University already exists")));

    let mut view = EditView::new(&platform, EntityKind::University, 1);
    view.mount().await;
    if let Some(EntityForm::University(form)) = view.form_mut() {
        form.location = "Shelbyville".to_string();
    }
    assert_eq!(
        view.submit().await,
        &SubmitState::Failed("University already exists".to_string()),
    );
    assert!(matches!(
        view.state().ready().map(|editing| &editing.form),
        Some(EntityForm::University(form)) if form.location == "Shelbyville",
    ));
    assert!(view.render().ends_with("Error: University already exists"));
}
