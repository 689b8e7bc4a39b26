/*! Integration tests for omap.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - map: Tests for the Map container, construction, mutation and reordering
 * - iter: Tests for the forward and backward iterators
 * - key: Tests for member-name conversion into native key types
 * - json: Tests for ordered JSON encode/decode and the serde impls
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("omap=info".parse().unwrap()))
        .with_test_writer()
        .try_init();
}

mod helpers;
