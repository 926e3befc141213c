use std::collections::HashSet;

/// Compatibility token carried by one edge of a tile.
///
/// Connectors are identity tokens, not values: two connectors created with
/// the same label are distinct and incompatible unless explicitly paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connector(usize);

/// Registry owning every connector of a tile set and the compatibility
/// relation between them.
///
/// Pairing and stub construction update both sides of the relation here, in
/// one place, rather than having connectors mutate each other by reference.
#[derive(Debug, Default, Clone)]
pub struct ConnectorSet {
    labels: Vec<String>,
    compatible: Vec<HashSet<Connector>>,
}

impl ConnectorSet {
    pub fn new() -> Self {
        Default::default()
    }

    fn push(&mut self, label: String, compatible: HashSet<Connector>) -> Connector {
        self.labels.push(label);
        self.compatible.push(compatible);

        Connector(self.labels.len() - 1)
    }

    /// Creates a connector compatible with itself only.
    pub fn insert(&mut self, label: &str) -> Connector {
        let connector = Connector(self.labels.len());

        self.push(label.to_string(), HashSet::from([connector]))
    }

    /// Creates two connectors, each compatible with the other only.
    ///
    /// Neither connector is compatible with itself; this models polarised
    /// edges that must alternate.
    pub fn insert_pair(&mut self, label: &str) -> (Connector, Connector) {
        let positive = Connector(self.labels.len());
        let negative = Connector(self.labels.len() + 1);

        self.push(format!("{} (+)", label), HashSet::from([negative]));
        self.push(format!("{} (-)", label), HashSet::from([positive]));

        (positive, negative)
    }

    /// Creates a connector compatible with `main` but not with itself.
    ///
    /// `main` gains the stub in its own compatible set, so the relation stays
    /// symmetric; the stub models a one-sided dead-end edge.
    pub fn insert_stub(&mut self, main: Connector) -> Connector {
        let label = format!("{} (s)", self.labels[main.0]);
        let stub = self.push(label, HashSet::from([main]));

        self.compatible[main.0].insert(stub);

        stub
    }

    /// True iff a tile presenting `other` may sit against a tile presenting
    /// `connector` on the shared edge.
    pub fn compatible(&self, connector: Connector, other: Connector) -> bool {
        self.compatible[connector.0].contains(&other)
    }

    /// The set of connectors a neighbouring tile may present against
    /// `connector`.
    pub fn compatible_with(&self, connector: Connector) -> &HashSet<Connector> {
        &self.compatible[connector.0]
    }

    pub fn label(&self, connector: Connector) -> &str {
        &self.labels[connector.0]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
