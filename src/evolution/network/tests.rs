use super::*;
use crate::evolution::helper::testing::FixedRandomSource;
use crate::evolution::parameter::ParameterRange;

fn ppi_kind() -> InteractionKind {
    InteractionKind::ProteinProteinInteraction {
        association_rate: 0.4,
        dissociation_rate: 0.1,
    }
}

fn tf_hill_kind() -> InteractionKind {
    InteractionKind::TranscriptionFactorHill {
        hill_coefficient: 2.0,
        threshold: 0.5,
        production_rate: 1.2,
    }
}

/// Creates a network with two input species, an output species and two
/// removable interactions connecting them.
fn test_network() -> MutableNetwork {
    let mut network = MutableNetwork::new();
    let first_input = network.new_species(vec![SpeciesTag::Input(0)]);
    let second_input = network.new_species(vec![SpeciesTag::Input(1)]);
    let output = network.new_species(vec![SpeciesTag::Output(0)]);
    network
        .add_node(Node::Interaction(Interaction::new(
            ppi_kind(),
            vec![first_input, second_input],
            vec![output],
            true,
        )))
        .unwrap();
    network
        .add_node(Node::Interaction(Interaction::new(
            tf_hill_kind(),
            vec![second_input],
            vec![output],
            true,
        )))
        .unwrap();
    network
}

#[test]
/// Tests if the function `new_species` of the [`MutableNetwork`] struct
/// correctly registers species under unique identifiers.
fn test_new_species() {
    let mut network = MutableNetwork::new();
    let first = network.new_species(vec![SpeciesTag::Input(0)]);
    let second = network.new_species(vec![SpeciesTag::Output(0)]);
    let third = network.new_species(Vec::new());
    assert_eq!(network.number_of_nodes(), 3);
    assert_eq!(network.species_identifiers(), vec![first, second, third]);
    assert_ne!(first, second);
    assert_ne!(second, third);
    assert!(network.contains(first));
    assert!(network.node(first).unwrap().as_species().unwrap().is_input());
    assert!(network.node(second).unwrap().as_species().unwrap().is_output());
}

#[test]
/// Tests if the function `seeded` of the [`MutableNetwork`] struct correctly
/// creates the minimal input and output species.
fn test_seeded() {
    let network = MutableNetwork::seeded(2, 1);
    assert_eq!(network.number_of_nodes(), 3);
    let inputs: Vec<bool> = network
        .nodes()
        .iter()
        .map(|node| node.as_species().unwrap().is_input())
        .collect();
    assert_eq!(inputs, vec![true, true, false]);
    assert!(network.nodes()[2].as_species().unwrap().is_output());
}

#[test]
/// Tests if the function `add_node` of the [`MutableNetwork`] struct correctly
/// rejects already registered nodes.
fn test_add_node_duplicate() {
    let mut network = test_network();
    let registered = network.nodes()[3].clone();
    let identifier = registered.identifier().unwrap();
    assert_eq!(
        network.add_node(registered),
        Err(NetworkError::DuplicateNode(identifier))
    );
    assert_eq!(network.number_of_nodes(), 5);
}

#[test]
/// Tests if the function `add_node` of the [`MutableNetwork`] struct correctly
/// rejects nodes referencing unowned nodes.
fn test_add_node_dangling_reference() {
    let mut network = MutableNetwork::new();
    let species = network.new_species(vec![SpeciesTag::Input(0)]);
    let interaction = Interaction::new(ppi_kind(), vec![species, 7], vec![species], true);
    assert_eq!(
        network.add_node(Node::Interaction(interaction)),
        Err(NetworkError::DanglingReference(7))
    );
    assert_eq!(network.number_of_nodes(), 1);
}

#[test]
/// Tests if the function `add_interaction` of the [`MutableNetwork`] struct
/// correctly constructs, wires and parameterises the named variant.
fn test_add_interaction() {
    let mut network = MutableNetwork::seeded(1, 1);
    let ranges = RangeRegistry::with_defaults();
    let mut random_source = FixedRandomSource::new(0.5);
    let identifier = network
        .add_interaction(
            TYPE_NAME_TF_HILL,
            vec![0],
            vec![1],
            &ranges,
            &mut random_source,
        )
        .unwrap();
    let interaction = network.node(identifier).unwrap().as_interaction().unwrap();
    assert!(interaction.is_removable());
    assert_eq!(interaction.inputs(), &[0]);
    assert_eq!(interaction.outputs(), &[1]);
    match interaction.kind() {
        InteractionKind::TranscriptionFactorHill {
            hill_coefficient,
            threshold,
            production_rate,
        } => {
            assert_ulps_eq!(*hill_coefficient, 3.0);
            assert_ulps_eq!(*threshold, 0.5);
            assert_ulps_eq!(*production_rate, 1.0);
        }
        kind => panic!("A transcription factor regulation was expected, but {:?} was created.", kind),
    }
}

#[test]
/// Tests if the function `add_interaction` of the [`MutableNetwork`] struct
/// correctly rejects unknown type names.
fn test_add_interaction_unknown_type() {
    let mut network = MutableNetwork::seeded(1, 1);
    let ranges = RangeRegistry::with_defaults();
    assert_eq!(
        network.add_interaction(
            "Phosphorylation",
            vec![0],
            vec![1],
            &ranges,
            &mut FixedRandomSource::new(0.5),
        ),
        Err(NetworkError::UnknownType("Phosphorylation".to_string()))
    );
}

#[test]
/// Tests if the function `add_interaction` of the [`MutableNetwork`] struct
/// correctly rejects unowned endpoints.
fn test_add_interaction_dangling_reference() {
    let mut network = MutableNetwork::seeded(1, 1);
    let ranges = RangeRegistry::with_defaults();
    assert_eq!(
        network.add_interaction(
            TYPE_NAME_TF_HILL,
            vec![5],
            vec![1],
            &ranges,
            &mut FixedRandomSource::new(0.5),
        ),
        Err(NetworkError::DanglingReference(5))
    );
    assert_eq!(network.number_of_nodes(), 2);
}

#[test]
/// Tests if the function `remove_interaction` of the [`MutableNetwork`]
/// struct correctly removes the interaction and its edges while retaining the
/// connected species.
fn test_remove_interaction() {
    let mut network = test_network();
    let removed = network.remove_interaction(3).unwrap();
    assert_eq!(removed.type_name(), TYPE_NAME_PPI);
    assert_eq!(network.number_of_nodes(), 4);
    assert!(!network.contains(3));
    // All species persist and remain reachable.
    assert_eq!(network.species_identifiers(), vec![0, 1, 2]);
    // The remaining interaction is untouched.
    let remaining = network.node(4).unwrap().as_interaction().unwrap();
    assert_eq!(remaining.inputs(), &[1]);
    assert_eq!(remaining.outputs(), &[2]);
    // Renumbering afterwards yields unique, gap free identities.
    network.write_id();
    let identifiers: Vec<usize> = network
        .nodes()
        .iter()
        .map(|node| node.identifier().unwrap())
        .collect();
    assert_eq!(identifiers, vec![0, 1, 2, 3]);
}

#[test]
/// Tests if the function `remove_interaction` of the [`MutableNetwork`]
/// struct correctly rejects interactions not flagged as removable.
fn test_remove_interaction_not_removable() {
    let mut network = MutableNetwork::new();
    let input = network.new_species(vec![SpeciesTag::Input(0)]);
    let output = network.new_species(vec![SpeciesTag::Output(0)]);
    let identifier = network
        .add_node(Node::Interaction(Interaction::new(
            tf_hill_kind(),
            vec![input],
            vec![output],
            false,
        )))
        .unwrap();
    assert_eq!(
        network.remove_interaction(identifier),
        Err(NetworkError::NotRemovable(identifier))
    );
    assert!(network.contains(identifier));
}

#[test]
/// Tests if the function `remove_interaction` of the [`MutableNetwork`]
/// struct correctly rejects species targets and unowned identifiers.
fn test_remove_interaction_invalid_target() {
    let mut network = test_network();
    assert_eq!(
        network.remove_interaction(0),
        Err(NetworkError::NotRemovable(0))
    );
    assert_eq!(
        network.remove_interaction(99),
        Err(NetworkError::DanglingReference(99))
    );
    assert_eq!(network.number_of_nodes(), 5);
}

#[test]
/// Tests if the function `remove_interaction` of the [`MutableNetwork`]
/// struct correctly detaches edges of other interactions referencing the
/// removed node.
fn test_remove_interaction_detaches_edges() {
    let mut network = MutableNetwork::new();
    let input = network.new_species(vec![SpeciesTag::Input(0)]);
    let output = network.new_species(vec![SpeciesTag::Output(0)]);
    let first = network
        .add_node(Node::Interaction(Interaction::new(
            tf_hill_kind(),
            vec![input],
            vec![output],
            true,
        )))
        .unwrap();
    let second = network
        .add_node(Node::Interaction(Interaction::new(
            tf_hill_kind(),
            vec![first],
            vec![output],
            true,
        )))
        .unwrap();
    network.remove_interaction(first).unwrap();
    let remaining = network.node(second).unwrap().as_interaction().unwrap();
    assert!(remaining.inputs().is_empty());
    assert_eq!(remaining.outputs(), &[output]);
}

#[test]
/// Tests if the function `write_id` of the [`MutableNetwork`] struct
/// correctly renumbers identities and rewires the adjacency.
fn test_write_id() {
    let mut network = test_network();
    network.remove_interaction(3).unwrap();
    network.write_id();
    let identifiers: Vec<usize> = network
        .nodes()
        .iter()
        .map(|node| node.identifier().unwrap())
        .collect();
    assert_eq!(identifiers, vec![0, 1, 2, 3]);
    let interaction = network.node(3).unwrap().as_interaction().unwrap();
    assert_eq!(interaction.inputs(), &[1]);
    assert_eq!(interaction.outputs(), &[2]);
    // New identifiers are assigned after the renumbered range.
    let species = network.new_species(Vec::new());
    assert_eq!(species, 4);
}

#[test]
/// Tests if the function `write_id` of the [`MutableNetwork`] struct is
/// idempotent without intervening mutation.
fn test_write_id_idempotent() {
    let mut network = test_network();
    network.remove_interaction(4).unwrap();
    network.write_id();
    let first_pass = network.clone();
    network.write_id();
    assert_eq!(first_pass, network);
}

#[test]
/// Tests if the function `remove_orphaned_species` of the [`MutableNetwork`]
/// struct correctly removes unconnected species while retaining the external
/// interface.
fn test_remove_orphaned_species() {
    let mut network = test_network();
    let orphan = network.new_species(vec![SpeciesTag::Complexable]);
    let removed = network.remove_orphaned_species();
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].identifier(), Some(orphan));
    assert!(!network.contains(orphan));
    // Input and output species persist even without incident edges.
    network.remove_interaction(3).unwrap();
    network.remove_interaction(4).unwrap();
    assert!(network.remove_orphaned_species().is_empty());
    assert_eq!(network.species_identifiers(), vec![0, 1, 2]);
}

#[test]
/// Tests if the function `resample_node_parameters` of the [`MutableNetwork`]
/// struct correctly redraws species and interaction parameters.
fn test_resample_node_parameters() {
    let mut network = MutableNetwork::new();
    let mut ranges = RangeRegistry::with_defaults();
    ranges.register("Species.degradation", ParameterRange::Continuous(2.0));
    let species = network.new_species(vec![SpeciesTag::Degradable(0.0)]);
    network
        .resample_node_parameters(species, &ranges, &mut FixedRandomSource::new(0.5))
        .unwrap();
    match network.node(species).unwrap().as_species().unwrap().tags()[0] {
        SpeciesTag::Degradable(rate) => assert_ulps_eq!(rate, 1.0),
        tag => panic!("A degradation tag was expected, but {:?} was found.", tag),
    }
    let interaction = network
        .add_node(Node::Interaction(Interaction::new(
            ppi_kind(),
            vec![species, species],
            vec![species],
            true,
        )))
        .unwrap();
    network
        .resample_node_parameters(interaction, &ranges, &mut FixedRandomSource::new(0.5))
        .unwrap();
    match network.node(interaction).unwrap().as_interaction().unwrap().kind() {
        InteractionKind::ProteinProteinInteraction {
            association_rate,
            dissociation_rate,
        } => {
            assert_ulps_eq!(*association_rate, 0.5);
            assert_ulps_eq!(*dissociation_rate, 0.5);
        }
        kind => panic!("A protein protein interaction was expected, but {:?} was found.", kind),
    }
    assert_eq!(
        network.resample_node_parameters(99, &ranges, &mut FixedRandomSource::new(0.5)),
        Err(NetworkError::DanglingReference(99))
    );
}

#[test]
/// Tests if the function `random` of the [`InteractionKind`] enum correctly
/// constructs all catalogued kinds and rejects unknown names.
fn test_interaction_kind_random() {
    let ranges = RangeRegistry::with_defaults();
    for type_name in InteractionKind::TYPE_NAMES {
        let kind =
            InteractionKind::random(type_name, &ranges, &mut FixedRandomSource::new(0.5)).unwrap();
        assert_eq!(kind.type_name(), type_name);
    }
    let delay_kind =
        InteractionKind::random(TYPE_NAME_CORE_PROMOTER, &ranges, &mut FixedRandomSource::new(0.5))
            .unwrap();
    assert_eq!(delay_kind, InteractionKind::CorePromoter { delay: 5 });
    assert_eq!(
        InteractionKind::random("Degradation", &ranges, &mut FixedRandomSource::new(0.5)),
        Err(NetworkError::UnknownType("Degradation".to_string()))
    );
}

#[test]
/// Tests if the function `random` of the [`InteractionKind`] enum correctly
/// surfaces missing parameter ranges.
fn test_interaction_kind_random_unknown_parameter() {
    let ranges = RangeRegistry::new();
    assert_eq!(
        InteractionKind::random(TYPE_NAME_PPI, &ranges, &mut FixedRandomSource::new(0.5)),
        Err(NetworkError::UnknownParameter(UnknownParameterError::new(
            "PPI.association"
        )))
    );
}

#[test]
#[should_panic]
/// Tests if the function `new` of the [`Interaction`] struct correctly
/// enforces the arity of the kind.
fn test_interaction_new_arity_mismatch() {
    Interaction::new(ppi_kind(), vec![0], vec![1], true);
}

#[test]
/// Tests if the function `type_name` of the [`Node`] enum correctly reports
/// the rate table type names.
fn test_node_type_name() {
    let network = test_network();
    assert_eq!(network.nodes()[0].type_name(), TYPE_NAME_SPECIES);
    assert_eq!(network.nodes()[3].type_name(), TYPE_NAME_PPI);
    assert_eq!(network.nodes()[4].type_name(), TYPE_NAME_TF_HILL);
}

#[test]
/// Tests if the function `transcription_factor_identifiers` of the
/// [`MutableNetwork`] struct correctly filters for transcription factors.
fn test_transcription_factor_identifiers() {
    let mut network = test_network();
    assert!(network.transcription_factor_identifiers().is_empty());
    let factor =
        network.new_species(vec![SpeciesTag::TranscriptionFactor(0.8), SpeciesTag::Complexable]);
    assert_eq!(network.transcription_factor_identifiers(), vec![factor]);
}
