//! Behavioural tests for the registration pipeline.
//!
//! Scenarios drive [`RegistrationService`] against the in-memory gateways and
//! check the report line and what each gateway observed.

use std::sync::Arc;

use futures::future::join_all;
use registration::domain::ports::AccountRepository;
use registration::domain::{RegistrationRecord, RegistrationService, report_line};
use registration::outbound::GatewaySimulation;
use registration::outbound::notification::TracingWelcomeNotifier;
use registration::outbound::persistence::InMemoryAccountRepository;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Builder;

#[derive(Default, ScenarioState)]
struct World {
    accounts: Slot<Arc<InMemoryAccountRepository>>,
    notifier: Slot<Arc<TracingWelcomeNotifier>>,
    record: Slot<RegistrationRecord>,
    lines: Slot<Vec<String>>,
}

#[fixture]
fn world() -> World {
    World::default()
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("create Tokio runtime")
        .block_on(future)
}

fn install_gateways(
    world: &World,
    persistence: GatewaySimulation,
    notification: GatewaySimulation,
) {
    world
        .accounts
        .set(Arc::new(InMemoryAccountRepository::with_simulation(persistence)));
    world
        .notifier
        .set(Arc::new(TracingWelcomeNotifier::with_simulation(notification)));
}

fn accounts(world: &World) -> Arc<InMemoryAccountRepository> {
    world.accounts.get().expect("gateways installed")
}

fn notifier(world: &World) -> Arc<TracingWelcomeNotifier> {
    world.notifier.get().expect("gateways installed")
}

fn service(
    world: &World,
) -> RegistrationService<InMemoryAccountRepository, TracingWelcomeNotifier> {
    RegistrationService::new(accounts(world), notifier(world))
}

fn lines(world: &World) -> Vec<String> {
    world.lines.get().expect("registration has run")
}

#[given("healthy gateways")]
fn healthy_gateways(world: &World) {
    install_gateways(world, GatewaySimulation::default(), GatewaySimulation::default());
}

#[given("a persistence gateway that is down")]
fn a_persistence_gateway_that_is_down(world: &World) {
    install_gateways(
        world,
        GatewaySimulation::default().failing(),
        GatewaySimulation::default(),
    );
}

#[given("a notification gateway that is down")]
fn a_notification_gateway_that_is_down(world: &World) {
    install_gateways(
        world,
        GatewaySimulation::default(),
        GatewaySimulation::default().failing(),
    );
}

#[given("a record for \"{username}\" with email \"{email}\" and password \"{password}\"")]
fn a_record(world: &World, username: String, email: String, password: String) {
    world
        .record
        .set(RegistrationRecord::new(username, email, password));
}

#[given("a record for \"{username}\" with email \"{email}\" and an empty password")]
fn a_record_with_an_empty_password(world: &World, username: String, email: String) {
    world.record.set(RegistrationRecord::new(username, email, ""));
}

fn register_times(world: &World, count: usize) {
    let record = world.record.get().expect("record prepared");
    let service = service(world);
    let lines = block_on(async {
        let mut lines = Vec::with_capacity(count);
        for _ in 0..count {
            lines.push(report_line(&service.register(&record).await));
        }
        lines
    });
    world.lines.set(lines);
}

#[when("the record is registered")]
fn the_record_is_registered(world: &World) {
    register_times(world, 1);
}

#[when("the record is registered {count:usize} times")]
fn the_record_is_registered_repeatedly(world: &World, count: usize) {
    register_times(world, count);
}

#[when("{count:usize} distinct records are registered concurrently")]
fn distinct_records_are_registered_concurrently(world: &World, count: usize) {
    let service = Arc::new(service(world));
    let records: Vec<RegistrationRecord> = (0..count)
        .map(|n| {
            RegistrationRecord::new(
                format!("user_{n}"),
                format!("user{n}@example.com"),
                "securepassword",
            )
        })
        .collect();
    let lines = block_on(async {
        let runs = records.iter().map(|record| {
            let service = Arc::clone(&service);
            async move { report_line(&service.register(record).await) }
        });
        join_all(runs).await
    });
    world.lines.set(lines);
}

#[then("the report line is \"{expected}\"")]
fn the_report_line_is(world: &World, expected: String) {
    let lines = lines(world);
    assert_eq!(lines.last().map(String::as_str), Some(expected.as_str()));
}

#[then("every report line is \"{expected}\"")]
fn every_report_line_is(world: &World, expected: String) {
    let lines = lines(world);
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|line| *line == expected), "lines: {lines:?}");
}

#[then("the persistence gateway was called {count:usize} times")]
fn the_persistence_gateway_was_called(world: &World, count: usize) {
    assert_eq!(accounts(world).save_calls(), count);
}

#[then("the notification gateway was called {count:usize} times")]
fn the_notification_gateway_was_called(world: &World, count: usize) {
    assert_eq!(notifier(world).attempts(), count);
}

#[then("the account \"{username}\" is persisted")]
fn the_account_is_persisted(world: &World, username: String) {
    let repo = accounts(world);
    let stored = block_on(async { repo.find_by_username(&username).await })
        .expect("lookup succeeds");
    assert!(stored.is_some(), "{username} should be stored");
}

#[then("the repository holds {count:usize} accounts")]
fn the_repository_holds(world: &World, count: usize) {
    let repo = accounts(world);
    assert_eq!(block_on(async { repo.len().await }), count);
}

#[scenario(path = "tests/features/registration_pipeline.feature", index = 0)]
fn valid_record_is_registered(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/registration_pipeline.feature", index = 1)]
fn malformed_email_is_rejected(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/registration_pipeline.feature", index = 2)]
fn short_password_is_rejected(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/registration_pipeline.feature", index = 3)]
fn empty_password_is_rejected(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/registration_pipeline.feature", index = 4)]
fn persistence_outage_skips_welcome_email(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/registration_pipeline.feature", index = 5)]
fn notification_outage_keeps_saved_account(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/registration_pipeline.feature", index = 6)]
fn repeated_failures_classify_identically(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/registration_pipeline.feature", index = 7)]
fn duplicate_username_is_a_database_error(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/registration_pipeline.feature", index = 8)]
fn concurrent_registrations_all_succeed(world: World) {
    drop(world);
}
