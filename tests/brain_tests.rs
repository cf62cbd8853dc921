#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::{Array1, array};
use pond::simulation::brain::{Network, sigmoid, weight_count};
use pond::simulation::error::NetworkError;
use proptest::prelude::*;

const WEIGHT_RANGE: f32 = 20.0;

#[test]
fn test_weight_count_includes_bias_neurons() {
    // (15 + 1) * 2 + (2 + 1) * 2
    assert_eq!(weight_count(&[15, 2, 2]), 38);
    assert_eq!(weight_count(&[3, 4, 4, 1]), 16 + 20 + 5);
}

#[test]
fn test_topology_needs_two_layers() {
    assert_eq!(
        Network::new(&[3]).unwrap_err(),
        NetworkError::InvalidTopology { layers: 1 }
    );
}

#[test]
fn test_bias_neuron_is_pinned() {
    let network = Network::new(&[3, 2, 1]).unwrap();
    let layers = network.layers();

    assert_eq!(layers[0].outputs.len(), 4);
    assert_eq!(layers[0].outputs[3], 1.0);
    assert_eq!(layers[1].outputs.len(), 3);
    assert_eq!(layers[1].outputs[2], 1.0);
    // output layer has no bias
    assert_eq!(layers[2].outputs.len(), 1);
}

#[test]
fn test_weights_are_consumed_from_the_tail() {
    // [1, 1]: input neuron and bias each own one connection
    let genes = array![0.5, 1.0];
    let network = Network::from_weights(&[1, 1], genes.view(), WEIGHT_RANGE).unwrap();
    let weights = &network.layers()[0].weights;

    // the input neuron pops the last gene, the bias the one before it
    assert_eq!(weights[[0, 0]], WEIGHT_RANGE);
    assert_eq!(weights[[1, 0]], 0.0);
    assert_eq!(network.layers()[0].connection_weights(0).to_vec(), vec![WEIGHT_RANGE]);
}

#[test]
fn test_leading_genes_are_ignored() {
    let exact = Network::from_weights(&[1, 1], array![0.75, 0.5].view(), WEIGHT_RANGE).unwrap();
    let padded =
        Network::from_weights(&[1, 1], array![0.1, 0.9, 0.75, 0.5].view(), WEIGHT_RANGE).unwrap();

    assert_eq!(exact.layers()[0].weights, padded.layers()[0].weights);
}

#[test]
fn test_insufficient_weights() {
    let err = Network::from_weights(&[2, 2], array![0.5, 0.5].view(), WEIGHT_RANGE).unwrap_err();
    assert_eq!(
        err,
        NetworkError::InsufficientWeights {
            required: 6,
            available: 2
        }
    );
}

#[test]
fn test_feed_forward_uses_bias() {
    // input weight decodes to 0, bias weight to 10
    let mut network =
        Network::from_weights(&[1, 1], array![0.75, 0.5].view(), WEIGHT_RANGE).unwrap();

    network.feed_forward(&array![0.3]).unwrap();

    let results = network.results();
    assert_eq!(results.len(), 1);
    assert!((results[0] - sigmoid(10.0)).abs() < 1e-6);
}

#[test]
fn test_feed_forward_weighted_sum() {
    // two inputs, one output: weights in pop order are input0, input1, bias
    // genes 1.0 -> +20, 0.25 -> -10, 0.5 -> 0
    let genes = array![0.5, 0.25, 1.0];
    let mut network = Network::from_weights(&[2, 1], genes.view(), WEIGHT_RANGE).unwrap();

    network.feed_forward(&array![0.5, 0.2]).unwrap();

    let expected = sigmoid(0.5 * 20.0 + 0.2 * -10.0);
    assert!((network.results()[0] - expected).abs() < 1e-6);
}

#[test]
fn test_zero_weights_give_half() {
    let mut network = Network::new(&[4, 3, 2]).unwrap();
    network.feed_forward(&array![1.0, 0.0, 0.5, 0.25]).unwrap();

    assert_eq!(network.results().to_vec(), vec![0.5, 0.5]);
}

#[test]
fn test_invalid_input_size() {
    let mut network = Network::new(&[4, 3, 2]).unwrap();
    let err = network.feed_forward(&array![1.0, 0.0]).unwrap_err();

    assert_eq!(
        err,
        NetworkError::InvalidInputSize {
            expected: 4,
            actual: 2
        }
    );
}

proptest! {
    #[test]
    fn prop_results_are_sigmoid_outputs(
        genes in prop::collection::vec(0.0f32..1.0, 38),
        inputs in prop::collection::vec(0.0f32..1.0, 15),
    ) {
        let genes = Array1::from(genes);
        let mut network = Network::from_weights(&[15, 2, 2], genes.view(), WEIGHT_RANGE).unwrap();
        network.feed_forward(&Array1::from(inputs)).unwrap();

        let results = network.results();
        prop_assert_eq!(results.len(), 2);
        for &value in results {
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }
}
