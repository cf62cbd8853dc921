#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use geo::coord;
use ndarray::Array1;
use pond::simulation::food::Food;
use pond::simulation::genome::{Genome, TRAIT_CLOCK_SPEED, TRAIT_CLOCK_SPEED_2, TRAIT_FOV};
use pond::simulation::organism::{Organism, Proprioception, Sense, Vision};
use pond::simulation::params::{NUM_EXTRA_INPUTS, Params};

fn create_test_params() -> Params {
    Params {
        num_eyes: 5,
        sight_length: 300.0,
        food_radius: 16.0,
        population_size: 4,
        ..Params::default()
    }
}

/// Organism at the center of the world facing +x, with a quarter-turn field of view.
fn create_test_organism(params: &Params) -> Organism {
    let mut genes = Array1::from_elem(params.genome_length(), 0.5);
    genes[TRAIT_FOV] = 0.5;
    let mut organism = Organism::new(Genome::new(genes), params).unwrap();
    organism.pos = coord! { x: 500.0, y: 500.0 };
    organism.heading = 0.0;
    organism
}

#[test]
fn test_vision_sense_size() {
    let params = create_test_params();
    let vision = Vision::new();

    assert_eq!(vision.input_size(&params), params.num_eyes);
    assert_eq!(vision.name(), "Vision");
}

#[test]
fn test_proprioception_sense_size() {
    let params = create_test_params();
    let proprio = Proprioception::new();

    assert_eq!(proprio.input_size(&params), NUM_EXTRA_INPUTS);
    assert_eq!(proprio.name(), "Proprioception");
    assert_eq!(
        Vision::new().input_size(&params) + proprio.input_size(&params),
        params.num_inputs()
    );
}

#[test]
fn test_senses_fill_their_own_slots() {
    for num_eyes in [1, 4, 7] {
        let params = Params {
            num_eyes,
            ..create_test_params()
        };
        let mut organism = create_test_organism(&params);
        let foods = vec![Food::new(coord! { x: 600.0, y: 500.0 })];

        let vision = Vision::new().sense(&organism, &foods, &params);
        assert_eq!(vision.len(), Vision::new().input_size(&params));

        organism.perceive(&foods, &params).unwrap();

        let sensors = organism.sensors();
        assert_eq!(sensors.len(), params.num_inputs());
        assert_eq!(sensors.slice(ndarray::s![..num_eyes]), vision);
        // energy input sits third among the proprioceptive slots
        assert_eq!(sensors[num_eyes + 2], 1.0);
    }
}

#[test]
fn test_food_straight_ahead_hits_center_eye() {
    let params = create_test_params();
    let mut organism = create_test_organism(&params);
    let foods = vec![Food::new(coord! { x: 600.0, y: 500.0 })];

    organism.perceive(&foods, &params).unwrap();

    let sensors = organism.sensors();
    let expected = 1.0 - 100.0 / params.sight_length;
    assert!((sensors[2] - expected).abs() < 1e-5);
    for eye in [0, 1, 3, 4] {
        assert_eq!(sensors[eye], 0.0, "eye {eye} should see nothing");
    }
}

#[test]
fn test_food_behind_is_invisible() {
    let params = create_test_params();
    let mut organism = create_test_organism(&params);
    let foods = vec![Food::new(coord! { x: 400.0, y: 500.0 })];

    organism.perceive(&foods, &params).unwrap();

    assert!(organism.sensors().iter().take(params.num_eyes).all(|&s| s == 0.0));
}

#[test]
fn test_food_out_of_range_is_invisible() {
    let params = create_test_params();
    let mut organism = create_test_organism(&params);
    let foods = vec![Food::new(coord! { x: 850.0, y: 500.0 })];

    organism.perceive(&foods, &params).unwrap();

    assert_eq!(organism.sensors()[2], 0.0);
}

#[test]
fn test_nearest_food_wins() {
    let params = create_test_params();
    let mut organism = create_test_organism(&params);
    let foods = vec![
        Food::new(coord! { x: 700.0, y: 500.0 }),
        Food::new(coord! { x: 550.0, y: 505.0 }),
    ];

    organism.perceive(&foods, &params).unwrap();

    let near = 1.0 - (50.0_f32.hypot(5.0)) / params.sight_length;
    assert!((organism.sensors()[2] - near).abs() < 1e-5);
}

#[test]
fn test_side_eye_sees_food_off_axis() {
    let params = create_test_params();
    let mut organism = create_test_organism(&params);
    // eye 4 looks fov / eyes * 2 radians to the left of the heading
    let angle = 2.0 * organism.fov / params.num_eyes as f32;
    let food = coord! { x: 500.0 + 200.0 * angle.cos(), y: 500.0 + 200.0 * angle.sin() };

    organism.perceive(&[Food::new(food)], &params).unwrap();

    let sensors = organism.sensors();
    assert!((sensors[4] - (1.0 - 200.0 / params.sight_length)).abs() < 1e-4);
    assert_eq!(sensors[2], 0.0);
}

#[test]
fn test_consumed_food_is_invisible() {
    let params = create_test_params();
    let mut organism = create_test_organism(&params);
    let mut food = Food::new(coord! { x: 600.0, y: 500.0 });
    food.consume();

    organism.perceive(&[food], &params).unwrap();

    assert_eq!(organism.sensors()[2], 0.0);
}

#[test]
fn test_proprioception_reads_organism_state() {
    let params = create_test_params();
    let mut organism = create_test_organism(&params);
    organism.heading = std::f32::consts::PI;
    organism.speed = params.max_speed / 2.0;
    organism.energy = params.initial_energy * 3.0;

    let outputs = Proprioception::new().sense(&organism, &[], &params);

    assert_eq!(outputs.len(), NUM_EXTRA_INPUTS);
    assert!((outputs[0] - 0.5).abs() < 1e-6);
    assert!((outputs[1] - 0.5).abs() < 1e-6);
    // energy is capped at the initial level
    assert_eq!(outputs[2], 1.0);
    assert_eq!(outputs[3], 0.0);
    assert_eq!(outputs[4], 0.0);
}

#[test]
fn test_clocks_follow_clock_genes() {
    let params = Params {
        generation_lifespan: 100,
        ..create_test_params()
    };
    let mut genes = Array1::from_elem(params.genome_length(), 0.5);
    genes[TRAIT_CLOCK_SPEED] = 0.25;
    genes[TRAIT_CLOCK_SPEED_2] = 0.75;
    let mut organism = Organism::new(Genome::new(genes), &params).unwrap();
    organism.age = 150;

    let outputs = Proprioception::new().sense(&organism, &[], &params);

    // 150 * 0.25 = 37.5 -> 0.5
    assert!((outputs[3] - 0.5).abs() < 1e-5);
    // 150 * 0.75 = 112.5 -> 12.5 / 100
    assert!((outputs[4] - 0.125).abs() < 1e-5);
}

#[test]
fn test_dead_organism_does_not_perceive() {
    let params = create_test_params();
    let mut organism = create_test_organism(&params);
    organism.energy = 0.0;
    organism.update(&params).unwrap();
    assert!(!organism.is_alive());

    organism.perceive(&[Food::new(coord! { x: 600.0, y: 500.0 })], &params).unwrap();

    assert_eq!(organism.sensors()[2], 0.0);
}
