// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Layer-to-layer connection tests through the public NetworkManager API

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use topograph_connectivity::{
    ConnectionSpec, ConnectivityError, NetworkDefaults, NetworkManager, DEFAULT_SYNAPSE_MODEL,
    MAX_SYNAPSE_MODELS,
};
use topograph_layout::{GridSpec, LayerId, NodeId};

fn options(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("test options must be an object"),
    }
}

fn grid(network: &mut NetworkManager, rows: usize, columns: usize) -> LayerId {
    network
        .create_layer("iaf_psc_alpha", GridSpec::new(rows, columns, [2.0, 2.0], true))
        .unwrap()
}

fn pairs(network: &NetworkManager, source: LayerId, target: LayerId, model: &str) -> Vec<(u64, u64)> {
    network
        .connections(source, target, model)
        .unwrap()
        .into_iter()
        .map(|c| (c.source.0, c.target.0))
        .collect()
}

#[test]
fn test_chain_of_unit_layers() {
    let mut network = NetworkManager::new();
    let l1 = grid(&mut network, 1, 1);
    let l2 = grid(&mut network, 1, 1);
    let l3 = grid(&mut network, 1, 1);

    let divergent = ConnectionSpec::from_options(&options(json!({
        "connection_type": "divergent",
    })))
    .unwrap();
    let stdp = ConnectionSpec::from_options(&options(json!({
        "connection_type": "divergent",
        "synapse_model": "stdp_synapse",
    })))
    .unwrap();

    assert_eq!(network.connect(l1, l2, &divergent).unwrap(), 1);
    assert_eq!(network.connect(l2, l3, &stdp).unwrap(), 1);

    assert_eq!(pairs(&network, l1, l2, DEFAULT_SYNAPSE_MODEL), vec![(1, 2)]);
    assert_eq!(pairs(&network, l2, l3, "stdp_synapse"), vec![(2, 3)]);
    assert!(pairs(&network, l1, l2, "stdp_synapse").is_empty());
    assert!(pairs(&network, l2, l1, DEFAULT_SYNAPSE_MODEL).is_empty());
}

#[test]
fn test_divergent_and_convergent_ordering() {
    let mut network = NetworkManager::new();
    let a = grid(&mut network, 1, 2);
    let b = grid(&mut network, 1, 2);

    network.connect(a, b, &ConnectionSpec::divergent()).unwrap();
    assert_eq!(
        pairs(&network, a, b, DEFAULT_SYNAPSE_MODEL),
        vec![(1, 3), (1, 4), (2, 3), (2, 4)]
    );

    network.reset();
    let a = grid(&mut network, 1, 2);
    let b = grid(&mut network, 1, 2);
    network.connect(a, b, &ConnectionSpec::convergent()).unwrap();
    assert_eq!(
        pairs(&network, a, b, DEFAULT_SYNAPSE_MODEL),
        vec![(1, 3), (2, 3), (1, 4), (2, 4)]
    );
}

#[test]
fn test_flags_from_options() {
    let mut network = NetworkManager::new();
    let layer = grid(&mut network, 1, 3);

    let spec = ConnectionSpec::from_options(&options(json!({
        "connection_type": "divergent",
        "allow_autapses": false,
        "allow_multapses": false,
        "weight": 2.5,
    })))
    .unwrap();

    assert_eq!(network.connect(layer, layer, &spec).unwrap(), 6);
    assert_eq!(network.connect(layer, layer, &spec).unwrap(), 0);

    let connections = network.connections(layer, layer, DEFAULT_SYNAPSE_MODEL).unwrap();
    assert!(connections.iter().all(|c| c.source != c.target));
    assert!(connections.iter().all(|c| c.weight == 2.5 && c.delay == 1.0));
}

#[test]
fn test_bad_options_are_rejected() {
    let unknown = ConnectionSpec::from_options(&options(json!({
        "connection_type": "divergent",
        "mask": {"circular": {"radius": 0.5}},
    })));
    assert!(matches!(unknown, Err(ConnectivityError::UnknownOption(key)) if key == "mask"));

    let missing = ConnectionSpec::from_options(&options(json!({"synapse_model": "stdp_synapse"})));
    assert!(matches!(missing, Err(ConnectivityError::InvalidOption { .. })));

    let wrong_type = ConnectionSpec::from_options(&options(json!({
        "connection_type": "divergent",
        "weight": "heavy",
    })));
    assert!(matches!(wrong_type, Err(ConnectivityError::InvalidOption { key, .. }) if key == "weight"));
}

#[test]
fn test_failed_connect_creates_nothing() {
    let mut network = NetworkManager::new();
    let layer = grid(&mut network, 2, 2);

    let negative_delay = ConnectionSpec::divergent().with_delay(-1.0);
    assert!(network.connect(layer, layer, &negative_delay).is_err());

    let missing_layer = network.connect(layer, LayerId(7), &ConnectionSpec::divergent());
    assert!(matches!(missing_layer, Err(ConnectivityError::Layout(_))));

    assert_eq!(network.kernel_status().num_connections, 0);
}

#[test]
fn test_config_defaults_apply() {
    let mut config = topograph_config::TopographConfig::default();
    config.connectivity.allow_autapses = false;

    let mut network = NetworkManager::with_defaults(NetworkDefaults::from(&config));
    let layer = grid(&mut network, 2, 2);
    assert_eq!(network.connect(layer, layer, &ConnectionSpec::divergent()).unwrap(), 12);

    // an explicit flag overrides the configured default
    let spec = ConnectionSpec::divergent().with_autapses(true);
    assert_eq!(network.connect(layer, layer, &spec).unwrap(), 16);
}

#[test]
fn test_spatial_queries_across_layers() {
    let mut network = NetworkManager::new();
    let a = grid(&mut network, 3, 3);
    let b = grid(&mut network, 1, 2);

    assert_eq!(network.find_center_element(a).unwrap(), NodeId(5));
    assert_eq!(network.layer_of(NodeId(10)).unwrap(), b);
    assert_eq!(network.layer_nodes(b).unwrap(), vec![NodeId(10), NodeId(11)]);
    assert!(network.position(NodeId(12)).is_err());
}

proptest! {
    #[test]
    fn prop_connection_counts(
        source_rows in 1usize..4,
        source_columns in 1usize..4,
        target_rows in 1usize..4,
        target_columns in 1usize..4,
        convergent in any::<bool>(),
    ) {
        let mut network = NetworkManager::new();
        let source = grid(&mut network, source_rows, source_columns);
        let target = grid(&mut network, target_rows, target_columns);
        let spec = if convergent {
            ConnectionSpec::convergent()
        } else {
            ConnectionSpec::divergent()
        };

        let created = network.connect(source, target, &spec).unwrap();
        prop_assert_eq!(created, source_rows * source_columns * target_rows * target_columns);
        prop_assert_eq!(
            network.connections(source, target, DEFAULT_SYNAPSE_MODEL).unwrap().len(),
            created
        );
        prop_assert!(network.connections(target, source, DEFAULT_SYNAPSE_MODEL).unwrap().is_empty());
    }
}

#[test]
fn test_full_registry_keeps_models_apart() {
    let mut network = NetworkManager::new();
    let layer = grid(&mut network, 1, 1);

    for n in network.synapse_models().len()..MAX_SYNAPSE_MODELS {
        network
            .copy_synapse_model("stdp_synapse", &format!("custom_{}", n), Some(7.0), None)
            .unwrap();
    }
    let last = format!("custom_{}", MAX_SYNAPSE_MODELS - 1);
    assert!(matches!(
        network.copy_synapse_model("stdp_synapse", "overflow", Some(7.0), None),
        Err(ConnectivityError::SynapseModelLimit(_))
    ));

    let spec = ConnectionSpec::divergent().with_synapse_model(last.as_str());
    assert_eq!(network.connect(layer, layer, &spec).unwrap(), 1);

    assert!(pairs(&network, layer, layer, DEFAULT_SYNAPSE_MODEL).is_empty());
    let connections = network.connections(layer, layer, &last).unwrap();
    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].weight, 7.0);
}
