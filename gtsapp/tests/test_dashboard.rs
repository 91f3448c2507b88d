use gtsapp::view::{
    DELETE_FAILED,
    ENTITIES_FAILED,
    THESES_FAILED,
    dashboard::Dashboard,
};
use gtscore::{
    error::BackendError,
    kind::EntityKind,
    university::Universities,
};
use test_gts::{
    core::{
        MockPlatform,
        bad_request,
        expect_entities,
    },
    fixture,
};
use textwrap_macros::dedent;

fn expect_theses(platform: &mut MockPlatform) {
    platform.expect_list_theses()
        .times(1)
        .returning(|| Ok(fixture::thesis_listings()));
}

#[tokio::test]
async fn mount_and_tabs() {
    let mut platform = MockPlatform::new();
    expect_theses(&mut platform);
    expect_entities(&mut platform);

    let mut dashboard = Dashboard::new(&platform);
    assert_eq!(dashboard.render(), "Loading...");
    dashboard.mount().await;

    assert_eq!(dashboard.tab(), EntityKind::Thesis);
    assert_eq!(dashboard.render(), dedent!(r#"
        [Theses (2)] | People (3) | Universities (2) | Institutes (2)

        ID  Title                      Author        Year  Type
        11  Turing Machines Revisited  Alan Turing   2021  PhD     /details/thesis/11
        12  Analytical Engines         Ada Lovelace  2023  Master  /details/thesis/12
    "#).trim());

    // tab switches are local; each listing is expected exactly once
    dashboard.select_tab(EntityKind::Institute);
    assert_eq!(dashboard.table().to_string(), dedent!(r#"
        ID  Name                                 University
        7   Institute of Computing               Tech U             /details/institute/7
        8   Graduate School of Natural Sciences  Ankara University  /details/institute/8
    "#).trim());
    dashboard.select_tab(EntityKind::Person);
    assert_eq!(dashboard.table().rows.len(), 3);
    assert_eq!(dashboard.count(EntityKind::University), 2);
    assert_eq!(dashboard.error(EntityKind::Person), None);
}

#[tokio::test]
async fn auxiliary_failure_collapses() {
    let mut platform = MockPlatform::new();
    expect_theses(&mut platform);
    platform.expect_list_persons()
        .times(1)
        .returning(|| Ok(fixture::persons()));
    platform.expect_list_universities()
        .times(1)
        .returning(|| Err(BackendError::Transport("connection reset".to_string())));
    platform.expect_list_institutes()
        .times(1)
        .returning(|| Ok(fixture::institutes()));

    let mut dashboard = Dashboard::new(&platform);
    dashboard.mount().await;
    assert_eq!(dashboard.error(EntityKind::Thesis), None);
    assert_eq!(dashboard.count(EntityKind::Thesis), 2);
    for kind in [EntityKind::Person, EntityKind::University, EntityKind::Institute] {
        assert_eq!(dashboard.error(kind), Some(ENTITIES_FAILED));
    }
    dashboard.select_tab(EntityKind::Person);
    assert!(dashboard.render().contains(
        "Error: Failed to load people, universities, and institutes from the API."
    ));
}

#[tokio::test]
async fn theses_failure() {
    let mut platform = MockPlatform::new();
    platform.expect_list_theses()
        .times(1)
        .returning(|| Err(bad_request("broken query")));
    expect_entities(&mut platform);

    let mut dashboard = Dashboard::new(&platform);
    dashboard.mount().await;
    assert_eq!(dashboard.error(EntityKind::Thesis), Some(THESES_FAILED));
    assert_eq!(dashboard.error(EntityKind::Person), None);
    assert!(dashboard.table().is_empty());
    assert!(dashboard.render().ends_with("No data available"));
}

#[tokio::test]
async fn delete_reloads_affected_collection() {
    let mut platform = MockPlatform::new();
    expect_theses(&mut platform);
    platform.expect_list_persons()
        .times(1)
        .returning(|| Ok(fixture::persons()));
    platform.expect_list_institutes()
        .times(1)
        .returning(|| Ok(fixture::institutes()));
    let mut calls = 0;
    platform.expect_list_universities()
        .times(2)
        .returning(move || {
            calls += 1;
            let universities = fixture::universities();
            Ok(if calls == 1 {
                universities
            } else {
                Universities::from(vec![universities[0].clone()])
            })
        });
    platform.expect_delete_university()
        .times(1)
        .withf(|id| *id == 2)
        .returning(|_| Ok(true));

    let mut dashboard = Dashboard::new(&platform);
    dashboard.mount().await;
    dashboard.select_tab(EntityKind::University);
    let dialog = dashboard.request_delete(EntityKind::University, 2)
        .expect("university 2 is listed");
    assert_eq!(
        dialog.to_string(),
        "Are you sure you want to delete \"Ankara University\"? This action cannot be undone.",
    );
    dashboard.confirm_delete().await;
    assert_eq!(dashboard.dialog(), None);
    assert_eq!(dashboard.count(EntityKind::University), 1);
    assert_eq!(dashboard.count(EntityKind::Thesis), 2);
    assert_eq!(dashboard.error(EntityKind::University), None);
}

#[tokio::test]
async fn delete_failure_keeps_data() {
    let mut platform = MockPlatform::new();
    expect_theses(&mut platform);
    expect_entities(&mut platform);
    platform.expect_delete_thesis()
        .times(1)
        .returning(|_| Err(bad_request("Thesis is locked")));
    platform.expect_delete_person()
        .times(1)
        .returning(|_| Err(BackendError::Transport("connection refused".to_string())));

    let mut dashboard = Dashboard::new(&platform);
    dashboard.mount().await;

    dashboard.request_delete(EntityKind::Thesis, 11)
        .expect("thesis 11 is listed");
    dashboard.confirm_delete().await;
    assert_eq!(dashboard.dialog(), None);
    assert_eq!(dashboard.error(EntityKind::Thesis), Some("Thesis is locked"));
    assert_eq!(dashboard.count(EntityKind::Thesis), 2);

    let dialog = dashboard.request_delete(EntityKind::Person, 3)
        .expect("person 3 is listed");
    assert_eq!(dialog.title, "Grace Hopper");
    dashboard.confirm_delete().await;
    assert_eq!(dashboard.error(EntityKind::Person), Some(DELETE_FAILED));
    assert_eq!(dashboard.count(EntityKind::Person), 3);
}

#[tokio::test]
async fn cancel_delete() {
    let mut platform = MockPlatform::new();
    expect_theses(&mut platform);
    expect_entities(&mut platform);
    platform.expect_delete_institute().never();

    let mut dashboard = Dashboard::new(&platform);
    dashboard.mount().await;
    assert!(dashboard.request_delete(EntityKind::Institute, 99).is_none());

    dashboard.request_delete(EntityKind::Institute, 7)
        .expect("institute 7 is listed");
    assert!(dashboard.render().ends_with(
        "Are you sure you want to delete \"Institute of Computing\"? This action cannot be undone."
    ));
    dashboard.cancel_delete();
    dashboard.confirm_delete().await;
    assert_eq!(dashboard.count(EntityKind::Institute), 2);
}
