//! # Topograph - spatially embedded network layers
//!
//! Topograph arranges nodes on geometric layouts, connects layouts with
//! named synapse models, and writes node positions and connection records to
//! flat text files that external analysis tools read.
//!
//! ## Components
//!
//! - **`layout`**: positions, extents, periodic displacement, layer geometry
//! - **`connectivity`**: connection specs, synapse models, [`NetworkManager`]
//! - **`dump`**: `.lyr` node dumps and `.cnn` connection dumps
//! - **`config`**: `topograph.toml` loading with env/CLI overrides
//! - **`observability`** (feature, default): logging initialization
//!
//! ## Example
//!
//! ```rust,no_run
//! use topograph::prelude::*;
//!
//! let mut network = NetworkManager::new();
//! let layer = network.create_layer(
//!     "iaf_psc_alpha",
//!     GridSpec::new(1, 2, [2.0, 2.0], true),
//! )?;
//! network.connect(layer, layer, &ConnectionSpec::divergent())?;
//!
//! dump_layer_nodes(&network, layer, "grid.lyr")?;
//! dump_layer_connections(&network, layer, layer, "static_synapse", "grid.cnn")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use topograph_config as config;
pub use topograph_connectivity as connectivity;
pub use topograph_dump as dump;
pub use topograph_layout as layout;

#[cfg(feature = "observability")]
pub use topograph_observability as observability;

pub use topograph_connectivity::NetworkManager;

/// Build a network and a dump target from one loaded configuration
pub fn from_config(
    config: &config::TopographConfig,
) -> (NetworkManager, dump::DumpTarget) {
    (
        NetworkManager::from_config(config),
        dump::DumpTarget::from_config(config),
    )
}

/// Install console logging at `config.system.log_level`
///
/// `--debug-<crate>` arguments and `TOPOGRAPH_DEBUG` raise individual crates
/// to `debug`; `RUST_LOG` overrides both.
#[cfg(feature = "observability")]
pub fn init_logging(config: &config::TopographConfig) -> anyhow::Result<()> {
    observability::init_logging(&observability::parse_debug_flags(), &config.system.log_level)
}

/// Build a connection spec from a JSON object of options
///
/// Non-object values are rejected as an invalid `connection_type` option.
pub fn spec_from_json(
    options: &serde_json::Value,
) -> connectivity::ConnectivityResult<connectivity::ConnectionSpec> {
    match options.as_object() {
        Some(map) => connectivity::ConnectionSpec::from_options(map),
        None => Err(connectivity::ConnectivityError::InvalidOption {
            key: "connection_type".to_string(),
            reason: format!("expected an options object, got {}", options),
        }),
    }
}

/// Commonly used items
pub mod prelude {
    pub use topograph_config::{load_config, TopographConfig};
    pub use topograph_connectivity::{
        ConnectionSpec, ConnectionType, ConnectivityError, KernelStatus, NetworkManager,
        DEFAULT_SYNAPSE_MODEL,
    };
    pub use topograph_dump::{
        dump_layer_connections, dump_layer_nodes, DumpError, DumpTarget,
    };
    pub use topograph_layout::{
        Extent, FreeSpec, GridSpec, LayerId, LayoutError, NodeId, Position, Positions,
    };
}
