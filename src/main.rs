use std::time::Duration;

use log::*;
use simple_logger::SimpleLogger;
use tokio::time::sleep;

use demo_client::client::DemoClient;
use demo_client::readiness::{wait_for_targets, GrpcProbe, ServiceTarget};

const MAX_RETRIES: u32 = 30;
const RETRY_DELAY: Duration = Duration::from_secs(2);
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pause between scripted example calls.
const CALL_PAUSE: Duration = Duration::from_secs(1);
/// Interval of the continuous demo loop.
const LOOP_PAUSE: Duration = Duration::from_secs(10);

const GREETER_SCENARIOS: [(&str, &str); 4] = [
    ("Alice", "en"),
    ("João", "pt"),
    ("Carlos", "es"),
    ("Marie", "fr"),
];

const CALCULATOR_SCENARIOS: [(f64, f64); 4] = [
    (10.0, 5.0),
    (7.0, 3.0),
    // division by zero, answered by the server
    (15.0, 0.0),
    (100.0, 25.0),
];

#[tokio::main]
async fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    info!("Starting demo client...");

    let targets = [
        ServiceTarget::new("csharp-service", 50051),
        ServiceTarget::new("go-service", 50052),
    ];

    if !wait_for_targets(
        &mut GrpcProbe,
        &targets,
        MAX_RETRIES,
        RETRY_DELAY,
        PROBE_TIMEOUT,
    )
    .await
    {
        error!("Failed to connect to required services");
        return;
    }

    let mut client = match DemoClient::connect(targets[0].uri(), targets[1].uri()).await {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to open service channels: {e}");
            return;
        }
    };

    // run_demo never returns on its own; Ctrl-C unwinds it and the client
    // drops on the way out of main, closing both channels.
    tokio::select! {
        _ = run_demo(&mut client) => {}
        _ = tokio::signal::ctrl_c() => info!("Shutting down..."),
    }
}

async fn run_demo(client: &mut DemoClient) {
    info!("=== Testing Greeter Service ===");
    for (name, language) in GREETER_SCENARIOS {
        if let Err(e) = client.greet(name, language).await {
            error!("gRPC error calling greeter service: {e}");
        }
        sleep(CALL_PAUSE).await;
    }

    info!("=== Testing Calculator Service ===");
    for (a, b) in CALCULATOR_SCENARIOS {
        if let Err(e) = client.calculate(a, b).await {
            error!("gRPC error calling calculator service: {e}");
        }
        sleep(CALL_PAUSE).await;
    }

    info!("=== Demo completed successfully! ===");
    info!("Continuing with periodic calls, press Ctrl+C to stop");

    loop {
        sleep(LOOP_PAUSE).await;

        if let Err(e) = client.greet("Demo User", "en").await {
            error!("gRPC error calling greeter service: {e}");
        }
        if let Err(e) = client.calculate(42.0, 8.0).await {
            error!("gRPC error calling calculator service: {e}");
        }
    }
}
