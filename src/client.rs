//! Long-lived clients for the two demo services and the example calls
//! issued against them.

use std::collections::HashMap;
use std::fmt;

use log::info;
use tonic::transport::Channel;
use tonic::{Request, Status};

use crate::pb::calculator::calculator_client::CalculatorClient;
use crate::pb::calculator::CalculateRequest;
use crate::pb::greeter::greeter_client::GreeterClient;
use crate::pb::greeter::HelloRequest;

/// The four calculator rpcs, in the order the demo exercises them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Wire name, carried as the request's operation selector.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One channel per remote service, opened once after the readiness gate and
/// held for the process lifetime. Dropping the client closes both channels.
pub struct DemoClient {
    greeter: GreeterClient<Channel>,
    calculator: CalculatorClient<Channel>,
}

impl DemoClient {
    pub async fn connect(
        greeter_uri: String,
        calculator_uri: String,
    ) -> Result<Self, tonic::transport::Error> {
        let greeter = GreeterClient::connect(greeter_uri).await?;
        let calculator = CalculatorClient::connect(calculator_uri).await?;

        Ok(Self {
            greeter,
            calculator,
        })
    }

    /// Says hello twice with the same request and returns both messages.
    ///
    /// All-or-nothing: if either rpc fails, the error is returned and no
    /// partial pair survives.
    pub async fn greet(&mut self, name: &str, language: &str) -> Result<(String, String), Status> {
        info!("Testing Greeter service with name: {name}, language: {language}");

        let request = HelloRequest {
            name: name.to_string(),
            language: language.to_string(),
        };

        let first = self
            .greeter
            .say_hello(Request::new(request.clone()))
            .await?
            .into_inner();
        info!("Greeter response: {}", first.message);

        let second = self
            .greeter
            .say_hello_again(Request::new(request))
            .await?
            .into_inner();
        info!("Greeter again response: {}", second.message);

        Ok((first.message, second.message))
    }

    /// Runs every operation over the same operand pair and collects the
    /// results keyed by operation.
    ///
    /// All-or-nothing: the first failing rpc discards everything collected
    /// so far. Division by zero is answered by the server inside a normal
    /// response and lands in the map like any other result.
    pub async fn calculate(&mut self, a: f64, b: f64) -> Result<HashMap<Operation, f64>, Status> {
        info!("Testing Calculator service with a={a}, b={b}");

        let mut results = HashMap::new();
        for op in Operation::ALL {
            let request = CalculateRequest {
                a,
                b,
                operation: op.name().to_string(),
            };

            let response = match op {
                Operation::Add => self.calculator.add(Request::new(request)).await,
                Operation::Subtract => self.calculator.subtract(Request::new(request)).await,
                Operation::Multiply => self.calculator.multiply(Request::new(request)).await,
                Operation::Divide => self.calculator.divide(Request::new(request)).await,
            }?
            .into_inner();

            info!("{op} result: {} - {}", response.result, response.message);
            results.insert(op, response.result);
        }

        Ok(results)
    }
}
