// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Topograph Connectivity

Builds directed connections between spatial layers:
- Connection specs (connection type, synapse model, weight/delay, flags)
- Synapse model registry (built-in models plus derived copies)
- Connection rules (divergent, convergent)
- The [`NetworkManager`] context owning layers, nodes and connections

## Usage

```rust
use topograph_connectivity::{ConnectionSpec, NetworkManager};
use topograph_layout::GridSpec;

let mut network = NetworkManager::new();
let layer = network
    .create_layer("iaf_psc_alpha", GridSpec::new(1, 2, [2.0, 2.0], true))
    .unwrap();
let created = network
    .connect(layer, layer, &ConnectionSpec::divergent())
    .unwrap();
assert_eq!(created, 4);
```
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod network_manager;
pub mod registry;
pub mod rules;
pub mod spec;
pub mod synapse_models;
pub mod types;

pub use network_manager::{KernelStatus, NetworkDefaults, NetworkManager};
pub use registry::{Connection, ConnectionRegistry};
pub use spec::{ConnectionDefaults, ConnectionSpec, ConnectionType, ResolvedSpec};
pub use synapse_models::{
    SynapseKind, SynapseModel, SynapseModelId, SynapseModelRegistry, DEFAULT_SYNAPSE_MODEL,
    MAX_SYNAPSE_MODELS,
};
pub use types::{ConnectivityError, ConnectivityResult};
