use neurograd_core::Value;

// Installs the test logger once per test binary; later calls are no-ops.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper to create a batch of learnable leaves for testing.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn parameters(values: &[f64]) -> Vec<Value> {
    values.iter().map(|&v| Value::parameter(v)).collect()
}
