//! Run the registration pipeline against in-process gateways and print one
//! report line per run.
//!
//! Without arguments the five demo scenarios run in order. Passing
//! `--username`, `--email` and `--password` runs a single record instead.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use registration::domain::{RegistrationRecord, RegistrationService, report_line};
use registration::outbound::GatewaySimulation;
use registration::outbound::notification::TracingWelcomeNotifier;
use registration::outbound::persistence::InMemoryAccountRepository;

/// `register-demo` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "register-demo",
    about = "Register accounts against simulated gateways and print the outcome",
    version
)]
struct CliArgs {
    /// Username for a single run.
    #[arg(long, requires_all = ["email", "password"])]
    username: Option<String>,
    /// Email address for a single run.
    #[arg(long, requires_all = ["username", "password"])]
    email: Option<String>,
    /// Password for a single run.
    #[arg(long, requires_all = ["username", "email"])]
    password: Option<String>,
    /// Artificial delay per gateway call, in milliseconds.
    #[arg(long = "latency-ms", value_name = "ms", default_value_t = 0)]
    latency_ms: u64,
    /// Make the persistence gateway fail (single run only).
    #[arg(long)]
    fail_persistence: bool,
    /// Make the notification gateway fail (single run only).
    #[arg(long)]
    fail_notification: bool,
}

/// One record plus the gateway behaviour it runs against.
#[derive(Debug)]
struct DemoRun {
    record: RegistrationRecord,
    persistence: GatewaySimulation,
    notification: GatewaySimulation,
}

impl DemoRun {
    fn healthy(record: RegistrationRecord, latency: Duration) -> Self {
        let simulation = GatewaySimulation::default().with_latency(latency);
        Self {
            record,
            persistence: simulation,
            notification: simulation,
        }
    }

    fn with_failing_persistence(mut self) -> Self {
        self.persistence = self.persistence.failing();
        self
    }

    fn with_failing_notification(mut self) -> Self {
        self.notification = self.notification.failing();
        self
    }

    async fn execute(self) -> String {
        let accounts = Arc::new(InMemoryAccountRepository::with_simulation(self.persistence));
        let notifier = Arc::new(TracingWelcomeNotifier::with_simulation(self.notification));
        let service = RegistrationService::new(accounts, notifier);
        report_line(&service.register(&self.record).await)
    }
}

fn demo_runs(latency: Duration) -> Vec<DemoRun> {
    vec![
        DemoRun::healthy(
            RegistrationRecord::new("john_doe", "john@example.com", "securepassword"),
            latency,
        ),
        DemoRun::healthy(
            RegistrationRecord::new("jane_doe", "jane_at_example.com", "securepassword"),
            latency,
        ),
        DemoRun::healthy(
            RegistrationRecord::new("alice", "alice@example.com", "123"),
            latency,
        ),
        DemoRun::healthy(
            RegistrationRecord::new("bob", "bob@example.com", "securepassword"),
            latency,
        )
        .with_failing_persistence(),
        DemoRun::healthy(
            RegistrationRecord::new("charlie", "charlie@example.com", "securepassword"),
            latency,
        )
        .with_failing_notification(),
    ]
}

fn runs_for(args: CliArgs) -> Vec<DemoRun> {
    let latency = Duration::from_millis(args.latency_ms);
    match (args.username, args.email, args.password) {
        (Some(username), Some(email), Some(password)) => {
            let run = DemoRun::healthy(RegistrationRecord::new(username, email, password), latency);
            let run = if args.fail_persistence {
                run.with_failing_persistence()
            } else {
                run
            };
            let run = if args.fail_notification {
                run.with_failing_notification()
            } else {
                run
            };
            vec![run]
        }
        _ => {
            if args.fail_persistence || args.fail_notification {
                warn!("failure flags only apply to a single run; ignoring them");
            }
            demo_runs(latency)
        }
    }
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;

    runtime.block_on(async {
        for run in runs_for(args) {
            println!("{}", run.execute().await);
        }
    });
    Ok(())
}
