use clinic_queries::core::service_manager::CostGroup;
use clinic_queries::{
    Placement, Report, SeedConfig, Service, ServiceInput, ServiceManager, UserRegistry,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::Path;

fn load_fixture() -> (ServiceManager, UserRegistry) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/seed.toml");
    let seed = SeedConfig::from_file(path).unwrap();
    seed.validate_config().unwrap();
    seed.into_collections().unwrap()
}

fn raw_service(toml_record: &str) -> ServiceInput {
    let seed = SeedConfig::from_toml_str(&format!("[[services]]\n{}", toml_record)).unwrap();
    seed.services.into_iter().next().unwrap()
}

#[test]
fn test_fixture_cost_groups() {
    let (services, _) = load_fixture();
    let groups = services.sort_by_cost_with_average_duration();

    let expected: Vec<(Decimal, f64)> = vec![
        (dec!(1100), 70.0),
        (dec!(1350), 80.0),
        (dec!(1400), 60.0),
        (dec!(1500), 65.0),
        (dec!(1600), 40.0),
        (dec!(1800), 50.0),
        (dec!(2200), 55.0),
        (dec!(2600), 40.0),
        (dec!(2800), 30.0),
    ];
    let actual: Vec<(Decimal, f64)> = groups
        .iter()
        .map(|group| (group.cost.unwrap(), group.average_duration.unwrap()))
        .collect();
    assert_eq!(actual, expected);

    let total: usize = groups.iter().map(|group: &CostGroup| group.services).sum();
    assert_eq!(total, services.len());
}

#[test]
fn test_fixture_most_read_service() {
    let (services, _) = load_fixture();
    assert_eq!(services.find_most_read_service_month1().unwrap().id(), Some(9));
}

#[test]
fn test_fixture_insertions() {
    let (mut services, _) = load_fixture();

    let complete = services
        .add_service(raw_service(
            r#"id = 11
name = "Express консалтинг"
doctor = "Олег Жук"
usersMonth1 = 50
usersMonth2 = 60
cost = 1250
durationMinutes = 25"#,
        ))
        .unwrap();
    assert_eq!(complete.placement, Placement::Sorted);
    assert_eq!(complete.index, 5);

    let incomplete = services
        .add_service(raw_service("id = 12\nname = \"Без назви\""))
        .unwrap();
    assert_eq!(incomplete.placement, Placement::Appended);
    assert_eq!(incomplete.index, 11);

    // Zero usage still counts as complete.
    let zero_usage = Service::try_from(raw_service(
        r#"id = 13
name = "Майстерня сну"
doctor = "Софія Нікітюк"
usersMonth1 = 0
usersMonth2 = 5
cost = 900
durationMinutes = 20"#,
    ))
    .unwrap();
    let boundary = services.add_service(zero_usage).unwrap();
    assert_eq!(boundary.placement, Placement::Sorted);
    assert_eq!(boundary.index, 11);
    assert_eq!(services.services()[12].id(), Some(12));
}

#[test]
fn test_fixture_updated_costs() {
    let (services, _) = load_fixture();
    let updated: Vec<Decimal> = services
        .compute_updated_costs()
        .into_iter()
        .map(|entry| entry.updated_cost.unwrap())
        .collect();
    assert_eq!(
        updated,
        vec![
            dec!(2070),
            dec!(1330),
            dec!(1840),
            dec!(1520),
            dec!(2530),
            dec!(1265),
            dec!(2990),
            dec!(1725),
            dec!(2660),
            dec!(1552.50),
        ]
    );
}

#[test]
fn test_fixture_user_queries() {
    let (_, users) = load_fixture();

    let january: Vec<String> = users
        .list_by_month_and_exact_time(1, "09:15")
        .into_iter()
        .map(|user| user.full_name())
        .collect();
    assert_eq!(january, vec!["Коваль Олена", "Петренко Олег"]);

    let early: Vec<&str> = users
        .list_by_month_and_exact_time(1, "07:45")
        .into_iter()
        .map(|user| user.last_name())
        .collect();
    assert_eq!(early, vec!["Савчук"]);

    let youngest = users.find_youngest_user_info().unwrap();
    assert_eq!(youngest.last_name, "Синюк");
    assert_eq!(youngest.age, 19);
    assert_eq!(youngest.education, "College");

    let summary = users.classify_by_working_hours();
    assert_eq!(summary.working.count, 7);
    assert_eq!(summary.working.average_age, 33.71);
    assert_eq!(summary.off.count, 3);
    assert_eq!(summary.off.average_age, 28.0);
}

#[test]
fn test_fixture_directory_order() {
    let (_, users) = load_fixture();
    let names: Vec<String> = users
        .sort_users_alphabetically()
        .into_iter()
        .map(|entry| entry.full_name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Гнатюк Руслан",
            "Гуменюк Артем",
            "Данилюк Марія",
            "Іващенко Лілія",
            "Коваль Олена",
            "Лисенко Наталія",
            "Мельник Ірина",
            "Петренко Олег",
            "Савчук Ілля",
            "Синюк Ганна",
        ]
    );
}

#[test]
fn test_fixture_report_json() {
    let (services, users) = load_fixture();
    let report = Report::run(&services, &users, 1, "09:15").unwrap();
    assert_eq!(report.most_read_service_month1, Some(9));
    assert_eq!(report.directory.len(), 10);

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["youngestUser"]["firstName"], "Ганна");
    assert_eq!(json["workingHours"]["off"]["count"], 3);
    assert_eq!(json["exactTimeRequests"]["users"][1], "Петренко Олег");
}
