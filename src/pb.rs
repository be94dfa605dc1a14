//! Generated bindings for the remote service contracts.

pub mod common {
    tonic::include_proto!("common");
}

pub mod greeter {
    tonic::include_proto!("greeter");
}

pub mod calculator {
    tonic::include_proto!("calculator");
}
