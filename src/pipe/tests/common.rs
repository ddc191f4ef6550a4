use courier_packet::JsonPacketSerializer;
use courier_pipe::{Pipe, PipeConfig};
use env_logger::Target;

#[allow(dead_code)] // rust_analyzer for some reason does not see the usage in integration tests ¯\_(ツ)_/¯
pub fn setup_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .target(Target::Stderr)
        .try_init();
}

pub fn build_json_pipe(accepted_types: &[&str]) -> Pipe<JsonPacketSerializer> {
    let config = PipeConfig {
        fail_fast: false,
        accepted_types: accepted_types.iter().map(|t| t.to_string()).collect(),
    };

    Pipe::new(config, JsonPacketSerializer::default())
}
