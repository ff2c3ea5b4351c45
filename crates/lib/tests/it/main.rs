/*! Integration tests for dotmap.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - map: Tests for DotMap dotted-path semantics and auto-vivification
 * - proxy: Tests for the Proxy wrapper and the MapStore seam
 * - json: Tests for serde round-trips and plain-mapping conversion
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotmap=debug".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod map;
mod proxy;
