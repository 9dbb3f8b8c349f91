//! The `network` module contains the typed reaction network graph that is the
//! target of mutation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;

use super::helper::RandomSource;
use super::parameter::{RangeRegistry, UnknownParameterError};

/// The type name of species nodes in rate tables.
pub const TYPE_NAME_SPECIES: &str = "Species";
/// The type name of protein protein interactions in rate tables and range
/// registry keys.
pub const TYPE_NAME_PPI: &str = "PPI";
/// The type name of transcription factor Hill regulations in rate tables and
/// range registry keys.
pub const TYPE_NAME_TF_HILL: &str = "TFHill";
/// The type name of core promoters in rate tables and range registry keys.
pub const TYPE_NAME_CORE_PROMOTER: &str = "CorePromoter";

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
/// A `SpeciesTag` marks the role a [`Species`] plays in the reaction network.
pub enum SpeciesTag {
    /// An externally driven input with the specified index.
    Input(usize),
    /// A reported output with the specified index.
    Output(usize),
    /// Degrades with the specified rate.
    Degradable(f64),
    /// Acts as a transcription factor with the specified activity.
    TranscriptionFactor(f64),
    /// May form complexes with other species.
    Complexable,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
/// A `Species` is a biochemical entity of the reaction network.
pub struct Species {
    identifier: Option<usize>,
    tags: Vec<SpeciesTag>,
}

impl Species {
    /// Creates a new unregistered `Species` carrying the specified tags.
    ///
    /// # Parameters
    ///
    /// * `tags` - the tags marking the roles of the species
    pub fn new(tags: Vec<SpeciesTag>) -> Self {
        Species {
            identifier: None,
            tags,
        }
    }

    /// Returns the identifier of this `Species` if it was assigned one by a
    /// network.
    pub fn identifier(&self) -> Option<usize> {
        self.identifier
    }

    /// Returns the tags of this `Species`.
    pub fn tags(&self) -> &[SpeciesTag] {
        &self.tags
    }

    /// Adds the specified tag to this `Species`.
    ///
    /// # Parameters
    ///
    /// * `tag` - the tag to add
    pub fn add_tag(&mut self, tag: SpeciesTag) {
        self.tags.push(tag);
    }

    /// Returns `true` if this `Species` is an externally driven input.
    pub fn is_input(&self) -> bool {
        self.tags
            .iter()
            .any(|tag| matches!(tag, SpeciesTag::Input(_)))
    }

    /// Returns `true` if this `Species` is a reported output.
    pub fn is_output(&self) -> bool {
        self.tags
            .iter()
            .any(|tag| matches!(tag, SpeciesTag::Output(_)))
    }

    /// Returns `true` if this `Species` acts as a transcription factor.
    pub fn is_transcription_factor(&self) -> bool {
        self.tags
            .iter()
            .any(|tag| matches!(tag, SpeciesTag::TranscriptionFactor(_)))
    }

    /// Redraws the numeric payloads of all parameterised tags from the
    /// supplied registry, consuming one draw per payload.
    ///
    /// # Parameters
    ///
    /// * `ranges` - the registry to sample the payloads from
    /// * `random_source` - the source of randomness for the sampling
    pub fn resample_parameters<R: RandomSource + ?Sized>(
        &mut self,
        ranges: &RangeRegistry,
        random_source: &mut R,
    ) -> Result<(), UnknownParameterError> {
        for tag in &mut self.tags {
            match tag {
                SpeciesTag::Degradable(rate) => {
                    *rate = ranges
                        .sample_attribute(TYPE_NAME_SPECIES, "degradation", random_source)?
                        .as_f64();
                }
                SpeciesTag::TranscriptionFactor(activity) => {
                    *activity = ranges
                        .sample_attribute(TYPE_NAME_SPECIES, "activity", random_source)?
                        .as_f64();
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
/// An `InteractionKind` is a typed reaction together with its kinetic
/// parameters. Each kind declares the arity of its input and output edges and
/// the parameter keys it samples from a [`RangeRegistry`].
pub enum InteractionKind {
    /// A protein protein interaction forming a complex from two species.
    ProteinProteinInteraction {
        /// The rate at which the substrates associate into the complex.
        association_rate: f64,
        /// The rate at which the complex dissociates back into the substrates.
        dissociation_rate: f64,
    },
    /// A transcription factor regulating a target species with Hill type
    /// kinetics.
    TranscriptionFactorHill {
        /// The Hill coefficient of the regulation.
        hill_coefficient: f64,
        /// The substrate concentration of half maximal regulation.
        threshold: f64,
        /// The maximal production rate of the regulated target.
        production_rate: f64,
    },
    /// A core promoter transcribing a gene product after a fixed delay.
    CorePromoter {
        /// The transcriptional delay in simulation steps.
        delay: u64,
    },
}

impl InteractionKind {
    /// The type names of all built in interaction kinds.
    pub const TYPE_NAMES: [&'static str; 3] =
        [TYPE_NAME_PPI, TYPE_NAME_TF_HILL, TYPE_NAME_CORE_PROMOTER];

    /// Constructs the named interaction kind with all parameters drawn from
    /// the supplied registry. An error will be returned if the name is not
    /// part of the known catalog or a parameter key has no registered range.
    ///
    /// # Parameters
    ///
    /// * `type_name` - the name of the kind to construct
    /// * `ranges` - the registry to sample the parameters from
    /// * `random_source` - the source of randomness for the sampling
    pub fn random<R: RandomSource + ?Sized>(
        type_name: &str,
        ranges: &RangeRegistry,
        random_source: &mut R,
    ) -> Result<InteractionKind, NetworkError> {
        let mut kind = match type_name {
            TYPE_NAME_PPI => InteractionKind::ProteinProteinInteraction {
                association_rate: 0.0,
                dissociation_rate: 0.0,
            },
            TYPE_NAME_TF_HILL => InteractionKind::TranscriptionFactorHill {
                hill_coefficient: 0.0,
                threshold: 0.0,
                production_rate: 0.0,
            },
            TYPE_NAME_CORE_PROMOTER => InteractionKind::CorePromoter { delay: 0 },
            _ => return Err(NetworkError::UnknownType(type_name.to_string())),
        };
        kind.resample_parameters(ranges, random_source)?;
        Ok(kind)
    }

    /// Returns the name of this kind as used in rate tables.
    pub fn type_name(&self) -> &'static str {
        match self {
            InteractionKind::ProteinProteinInteraction { .. } => TYPE_NAME_PPI,
            InteractionKind::TranscriptionFactorHill { .. } => TYPE_NAME_TF_HILL,
            InteractionKind::CorePromoter { .. } => TYPE_NAME_CORE_PROMOTER,
        }
    }

    /// Returns the number of input edges this kind requires.
    pub fn input_arity(&self) -> usize {
        match self {
            InteractionKind::ProteinProteinInteraction { .. } => 2,
            InteractionKind::TranscriptionFactorHill { .. } => 1,
            InteractionKind::CorePromoter { .. } => 1,
        }
    }

    /// Returns the number of output edges this kind requires.
    pub fn output_arity(&self) -> usize {
        match self {
            InteractionKind::ProteinProteinInteraction { .. } => 1,
            InteractionKind::TranscriptionFactorHill { .. } => 1,
            InteractionKind::CorePromoter { .. } => 1,
        }
    }

    /// Returns the registry keys of the parameters this kind samples, in the
    /// order they are drawn.
    pub fn parameter_keys(&self) -> &'static [&'static str] {
        match self {
            InteractionKind::ProteinProteinInteraction { .. } => {
                &["PPI.association", "PPI.dissociation"]
            }
            InteractionKind::TranscriptionFactorHill { .. } => {
                &["TFHill.hill", "TFHill.threshold", "TFHill.rate"]
            }
            InteractionKind::CorePromoter { .. } => &["CorePromoter.delay"],
        }
    }

    /// Redraws all kinetic parameters of this kind from the supplied registry,
    /// consuming one draw per parameter in [`parameter_keys`](Self::parameter_keys)
    /// order.
    ///
    /// # Parameters
    ///
    /// * `ranges` - the registry to sample the parameters from
    /// * `random_source` - the source of randomness for the sampling
    pub fn resample_parameters<R: RandomSource + ?Sized>(
        &mut self,
        ranges: &RangeRegistry,
        random_source: &mut R,
    ) -> Result<(), UnknownParameterError> {
        match self {
            InteractionKind::ProteinProteinInteraction {
                association_rate,
                dissociation_rate,
            } => {
                *association_rate = ranges
                    .sample_attribute(TYPE_NAME_PPI, "association", random_source)?
                    .as_f64();
                *dissociation_rate = ranges
                    .sample_attribute(TYPE_NAME_PPI, "dissociation", random_source)?
                    .as_f64();
            }
            InteractionKind::TranscriptionFactorHill {
                hill_coefficient,
                threshold,
                production_rate,
            } => {
                *hill_coefficient = ranges
                    .sample_attribute(TYPE_NAME_TF_HILL, "hill", random_source)?
                    .as_f64();
                *threshold = ranges
                    .sample_attribute(TYPE_NAME_TF_HILL, "threshold", random_source)?
                    .as_f64();
                *production_rate = ranges
                    .sample_attribute(TYPE_NAME_TF_HILL, "rate", random_source)?
                    .as_f64();
            }
            InteractionKind::CorePromoter { delay } => {
                *delay = ranges
                    .sample_attribute(TYPE_NAME_CORE_PROMOTER, "delay", random_source)?
                    .as_u64();
            }
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
/// An `Interaction` is a typed reaction node wired to its substrate and
/// product nodes by directed edges. The edges exist only as the adjacency
/// recorded here and carry no identity of their own.
pub struct Interaction {
    identifier: Option<usize>,
    kind: InteractionKind,
    removable: bool,
    inputs: Vec<usize>,
    outputs: Vec<usize>,
}

impl Interaction {
    /// Creates a new unregistered `Interaction` of the specified kind wired to
    /// the specified input and output node identifiers.
    ///
    /// # Parameters
    ///
    /// * `kind` - the kind of the interaction
    /// * `inputs` - the identifiers of the input nodes
    /// * `outputs` - the identifiers of the output nodes
    /// * `removable` - whether the mutation engine may delete the interaction
    ///
    /// # Panics
    ///
    /// If the number of inputs or outputs does not match the arity of the
    /// kind.
    pub fn new(
        kind: InteractionKind,
        inputs: Vec<usize>,
        outputs: Vec<usize>,
        removable: bool,
    ) -> Self {
        assert_eq!(
            inputs.len(),
            kind.input_arity(),
            "The interaction type {} requires {} inputs, but {} were supplied.",
            kind.type_name(),
            kind.input_arity(),
            inputs.len()
        );
        assert_eq!(
            outputs.len(),
            kind.output_arity(),
            "The interaction type {} requires {} outputs, but {} were supplied.",
            kind.type_name(),
            kind.output_arity(),
            outputs.len()
        );
        Interaction {
            identifier: None,
            kind,
            removable,
            inputs,
            outputs,
        }
    }

    /// Returns the identifier of this `Interaction` if it was assigned one by
    /// a network.
    pub fn identifier(&self) -> Option<usize> {
        self.identifier
    }

    /// Returns the kind of this `Interaction`.
    pub fn kind(&self) -> &InteractionKind {
        &self.kind
    }

    /// Returns the name of this `Interaction`'s kind as used in rate tables.
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Returns `true` if the mutation engine may delete this `Interaction`.
    pub fn is_removable(&self) -> bool {
        self.removable
    }

    /// Returns the identifiers of the input nodes.
    pub fn inputs(&self) -> &[usize] {
        &self.inputs
    }

    /// Returns the identifiers of the output nodes.
    pub fn outputs(&self) -> &[usize] {
        &self.outputs
    }

    /// Redraws all kinetic parameters of this `Interaction` from the supplied
    /// registry.
    ///
    /// # Parameters
    ///
    /// * `ranges` - the registry to sample the parameters from
    /// * `random_source` - the source of randomness for the sampling
    pub fn resample_parameters<R: RandomSource + ?Sized>(
        &mut self,
        ranges: &RangeRegistry,
        random_source: &mut R,
    ) -> Result<(), UnknownParameterError> {
        self.kind.resample_parameters(ranges, random_source)
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
/// A `Node` is a single entity of the reaction network graph.
pub enum Node {
    /// A biochemical species.
    Species(Species),
    /// A typed reaction between species.
    Interaction(Interaction),
}

impl Node {
    /// Returns the identifier of this `Node` if it was assigned one by a
    /// network.
    pub fn identifier(&self) -> Option<usize> {
        match self {
            Node::Species(species) => species.identifier,
            Node::Interaction(interaction) => interaction.identifier,
        }
    }

    /// Returns the name of this `Node`'s type as used in rate tables.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Species(_) => TYPE_NAME_SPECIES,
            Node::Interaction(interaction) => interaction.type_name(),
        }
    }

    /// Returns the contained [`Species`] if this `Node` is a species.
    pub fn as_species(&self) -> Option<&Species> {
        match self {
            Node::Species(species) => Some(species),
            Node::Interaction(_) => None,
        }
    }

    /// Returns the contained [`Interaction`] if this `Node` is an interaction.
    pub fn as_interaction(&self) -> Option<&Interaction> {
        match self {
            Node::Species(_) => None,
            Node::Interaction(interaction) => Some(interaction),
        }
    }

    fn set_identifier(&mut self, identifier: usize) {
        match self {
            Node::Species(species) => species.identifier = Some(identifier),
            Node::Interaction(interaction) => interaction.identifier = Some(identifier),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
/// A `MutableNetwork` is a typed multigraph of [`Species`] and [`Interaction`]
/// nodes and the exclusive owner of their lifetime. Every mutating operation
/// checks the structural invariants of the graph synchronously, so no
/// operation can leave the network in an inconsistent state.
pub struct MutableNetwork {
    nodes: Vec<Node>,
    next_identifier: usize,
}

impl MutableNetwork {
    /// Creates an empty `MutableNetwork`.
    pub fn new() -> Self {
        MutableNetwork {
            nodes: Vec::new(),
            next_identifier: 0,
        }
    }

    /// Creates a `MutableNetwork` seeded with the specified number of input
    /// and output species.
    ///
    /// # Parameters
    ///
    /// * `inputs` - the number of input species to seed
    /// * `outputs` - the number of output species to seed
    pub fn seeded(inputs: usize, outputs: usize) -> Self {
        let mut network = MutableNetwork::new();
        for index in 0..inputs {
            network.new_species(vec![SpeciesTag::Input(index)]);
        }
        for index in 0..outputs {
            network.new_species(vec![SpeciesTag::Output(index)]);
        }
        network
    }

    /// Returns the number of nodes owned by this network.
    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns all nodes owned by this network in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the node registered under the specified identifier if any.
    ///
    /// # Parameters
    ///
    /// * `identifier` - the identifier of the node to look up
    pub fn node(&self, identifier: usize) -> Option<&Node> {
        self.position_of(identifier).map(|position| &self.nodes[position])
    }

    /// Returns `true` if a node is registered under the specified identifier.
    ///
    /// # Parameters
    ///
    /// * `identifier` - the identifier to check
    pub fn contains(&self, identifier: usize) -> bool {
        self.position_of(identifier).is_some()
    }

    /// Returns the identifiers of all species nodes in insertion order.
    pub fn species_identifiers(&self) -> Vec<usize> {
        self.nodes
            .iter()
            .filter(|node| node.as_species().is_some())
            .map(|node| Self::registered_identifier(node))
            .collect()
    }

    /// Returns the identifiers of all species acting as transcription factors
    /// in insertion order.
    pub fn transcription_factor_identifiers(&self) -> Vec<usize> {
        self.nodes
            .iter()
            .filter(|node| {
                node.as_species()
                    .map(|species| species.is_transcription_factor())
                    .unwrap_or(false)
            })
            .map(|node| Self::registered_identifier(node))
            .collect()
    }

    /// Returns the identifiers of all interactions of the specified type in
    /// insertion order.
    ///
    /// # Parameters
    ///
    /// * `type_name` - the name of the interaction type to filter for
    pub fn interactions_of_type(&self, type_name: &str) -> Vec<usize> {
        self.nodes
            .iter()
            .filter(|node| {
                node.as_interaction()
                    .map(|interaction| interaction.type_name() == type_name)
                    .unwrap_or(false)
            })
            .map(|node| Self::registered_identifier(node))
            .collect()
    }

    /// Creates and registers a species carrying the specified tags and returns
    /// its identifier.
    ///
    /// # Parameters
    ///
    /// * `tags` - the tags marking the roles of the species
    pub fn new_species(&mut self, tags: Vec<SpeciesTag>) -> usize {
        self.register(Node::Species(Species::new(tags)))
    }

    /// Registers an externally constructed node with this network, assigning
    /// an identifier if the node does not carry one. An error will be returned
    /// if the node is already registered or references nodes not owned by this
    /// network.
    ///
    /// # Parameters
    ///
    /// * `node` - the node to register
    pub fn add_node(&mut self, node: Node) -> Result<usize, NetworkError> {
        if let Some(identifier) = node.identifier() {
            if self.contains(identifier) {
                return Err(NetworkError::DuplicateNode(identifier));
            }
        }
        if let Node::Interaction(interaction) = &node {
            self.validate_references(interaction.inputs())?;
            self.validate_references(interaction.outputs())?;
        }
        match node.identifier() {
            Some(identifier) => {
                // Keep the preassigned identifier, but ensure newly assigned
                // identifiers cannot collide with it.
                self.next_identifier = self.next_identifier.max(identifier + 1);
                self.nodes.push(node);
                Ok(identifier)
            }
            None => Ok(self.register(node)),
        }
    }

    /// Constructs the named interaction variant with all parameters drawn from
    /// the supplied registry, wires it to the specified input and output nodes
    /// and registers it with this network. The created interaction is
    /// removable. An error will be returned if the type name is not part of
    /// the known catalog, a parameter key has no registered range or any
    /// endpoint is not owned by this network.
    ///
    /// # Parameters
    ///
    /// * `type_name` - the name of the interaction type to construct
    /// * `inputs` - the identifiers of the input nodes
    /// * `outputs` - the identifiers of the output nodes
    /// * `ranges` - the registry to sample the parameters from
    /// * `random_source` - the source of randomness for the sampling
    ///
    /// # Panics
    ///
    /// If the number of inputs or outputs does not match the arity of the
    /// named type.
    pub fn add_interaction<R: RandomSource + ?Sized>(
        &mut self,
        type_name: &str,
        inputs: Vec<usize>,
        outputs: Vec<usize>,
        ranges: &RangeRegistry,
        random_source: &mut R,
    ) -> Result<usize, NetworkError> {
        self.validate_references(&inputs)?;
        self.validate_references(&outputs)?;
        let kind = InteractionKind::random(type_name, ranges, random_source)?;
        let interaction = Interaction::new(kind, inputs, outputs, true);
        Ok(self.register(Node::Interaction(interaction)))
    }

    /// Removes the specified interaction and all of its incident edges,
    /// returning the removed interaction. Species connected to the interaction
    /// persist. An error will be returned if no interaction is registered
    /// under the identifier or the interaction is not flagged as removable.
    ///
    /// # Parameters
    ///
    /// * `identifier` - the identifier of the interaction to remove
    pub fn remove_interaction(&mut self, identifier: usize) -> Result<Interaction, NetworkError> {
        let position = self
            .position_of(identifier)
            .ok_or(NetworkError::DanglingReference(identifier))?;
        match &self.nodes[position] {
            // Species are never removable through the interaction removal
            // path.
            Node::Species(_) => return Err(NetworkError::NotRemovable(identifier)),
            Node::Interaction(interaction) => {
                if !interaction.is_removable() {
                    return Err(NetworkError::NotRemovable(identifier));
                }
            }
        }
        let removed = match self.nodes.remove(position) {
            Node::Interaction(interaction) => interaction,
            Node::Species(_) => unreachable!("The node was checked to be an interaction."),
        };
        // Detach all edges incident to the removed node.
        for node in &mut self.nodes {
            if let Node::Interaction(interaction) = node {
                interaction.inputs.retain(|&input| input != identifier);
                interaction.outputs.retain(|&output| output != identifier);
            }
        }
        Ok(removed)
    }

    /// Removes all species without incident edges and returns them.
    /// Input and output species are the external interface of the network and
    /// are always retained. This cleanup pass is never run implicitly by any
    /// other operation.
    pub fn remove_orphaned_species(&mut self) -> Vec<Species> {
        let mut referenced: Vec<usize> = Vec::new();
        for node in &self.nodes {
            if let Node::Interaction(interaction) = node {
                referenced.extend_from_slice(interaction.inputs());
                referenced.extend_from_slice(interaction.outputs());
            }
        }
        let mut removed = Vec::new();
        let mut retained = Vec::with_capacity(self.nodes.len());
        for node in self.nodes.drain(..) {
            let orphaned = match &node {
                Node::Interaction(_) => false,
                Node::Species(species) => {
                    !species.is_input()
                        && !species.is_output()
                        && !referenced.contains(&Self::registered_identifier(&node))
                }
            };
            if orphaned {
                if let Node::Species(species) = node {
                    removed.push(species);
                }
            } else {
                retained.push(node);
            }
        }
        self.nodes = retained;
        removed
    }

    /// Renumbers the identifiers of all owned nodes in insertion order,
    /// producing a gap free, deterministic assignment without modifying the
    /// topology of the graph. Calling `write_id` twice in a row yields the
    /// identical assignment.
    pub fn write_id(&mut self) {
        let mapping: HashMap<usize, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (Self::registered_identifier(node), position))
            .collect();
        for (new_identifier, node) in self.nodes.iter_mut().enumerate() {
            node.set_identifier(new_identifier);
            if let Node::Interaction(interaction) = node {
                for input in &mut interaction.inputs {
                    *input = *mapping
                        .get(input)
                        .expect("The ownership invariant guarantees all referenced nodes are renumbered.");
                }
                for output in &mut interaction.outputs {
                    *output = *mapping
                        .get(output)
                        .expect("The ownership invariant guarantees all referenced nodes are renumbered.");
                }
            }
        }
        self.next_identifier = self.nodes.len();
    }

    /// Redraws the parameters of the specified node from the supplied
    /// registry. An error will be returned if no node is registered under the
    /// identifier or a parameter key has no registered range.
    ///
    /// # Parameters
    ///
    /// * `identifier` - the identifier of the node to perturb
    /// * `ranges` - the registry to sample the parameters from
    /// * `random_source` - the source of randomness for the sampling
    pub fn resample_node_parameters<R: RandomSource + ?Sized>(
        &mut self,
        identifier: usize,
        ranges: &RangeRegistry,
        random_source: &mut R,
    ) -> Result<(), NetworkError> {
        let position = self
            .position_of(identifier)
            .ok_or(NetworkError::DanglingReference(identifier))?;
        match &mut self.nodes[position] {
            Node::Species(species) => species.resample_parameters(ranges, random_source)?,
            Node::Interaction(interaction) => {
                interaction.resample_parameters(ranges, random_source)?
            }
        }
        Ok(())
    }

    fn register(&mut self, mut node: Node) -> usize {
        let identifier = self.next_identifier;
        node.set_identifier(identifier);
        self.next_identifier += 1;
        self.nodes.push(node);
        identifier
    }

    fn position_of(&self, identifier: usize) -> Option<usize> {
        self.nodes
            .iter()
            .position(|node| node.identifier() == Some(identifier))
    }

    fn validate_references(&self, identifiers: &[usize]) -> Result<(), NetworkError> {
        for &identifier in identifiers {
            if !self.contains(identifier) {
                return Err(NetworkError::DanglingReference(identifier));
            }
        }
        Ok(())
    }

    fn registered_identifier(node: &Node) -> usize {
        node.identifier()
            .expect("Registered nodes always carry an identifier.")
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
/// A `NetworkError` is returned when an operation would corrupt a
/// [`MutableNetwork`] or reference state it does not own.
pub enum NetworkError {
    /// The requested interaction type is not part of the known catalog.
    UnknownType(String),
    /// The referenced node is not owned by the network.
    DanglingReference(usize),
    /// The node is already registered with the network.
    DuplicateNode(usize),
    /// The node is not flagged as removable.
    NotRemovable(usize),
    /// A parameter required for the operation has no registered sampling
    /// range.
    UnknownParameter(UnknownParameterError),
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::UnknownType(type_name) => write!(
                f,
                "The interaction type {} is not part of the known catalog.",
                type_name
            ),
            NetworkError::DanglingReference(identifier) => {
                write!(f, "The node {} is not owned by this network.", identifier)
            }
            NetworkError::DuplicateNode(identifier) => write!(
                f,
                "The node {} is already registered with this network.",
                identifier
            ),
            NetworkError::NotRemovable(identifier) => {
                write!(f, "The node {} is not removable.", identifier)
            }
            NetworkError::UnknownParameter(error) => write!(f, "{}", error),
        }
    }
}

impl Error for NetworkError {}

impl From<UnknownParameterError> for NetworkError {
    fn from(error: UnknownParameterError) -> Self {
        NetworkError::UnknownParameter(error)
    }
}

#[cfg(test)]
mod tests;
