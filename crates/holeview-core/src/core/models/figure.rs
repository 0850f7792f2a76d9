use super::error::GeometryError;

/// An unordered pair of vertex indices. The declared order is kept so that descriptions
/// round-trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Order-independent comparison.
    pub fn same_as(&self, other: &Edge) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// The edge set of a figure together with the size of the vertex table it indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureTopology {
    edges: Vec<Edge>,
    vertex_count: usize,
}

impl FigureTopology {
    pub fn new(edges: Vec<Edge>, vertex_count: usize) -> Result<Self, GeometryError> {
        for edge in &edges {
            for index in [edge.a, edge.b] {
                if index >= vertex_count {
                    return Err(GeometryError::IndexOutOfRange {
                        index,
                        len: vertex_count,
                    });
                }
            }
        }
        Ok(Self {
            edges,
            vertex_count,
        })
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_edges_within_vertex_table() {
        let topo = FigureTopology::new(vec![Edge::new(0, 1), Edge::new(1, 2)], 3).unwrap();
        assert_eq!(topo.edges().len(), 2);
        assert_eq!(topo.vertex_count(), 3);
    }

    #[test]
    fn new_rejects_index_equal_to_vertex_count() {
        let result = FigureTopology::new(vec![Edge::new(0, 3)], 3);
        assert_eq!(
            result,
            Err(GeometryError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn edge_comparison_ignores_orientation() {
        assert!(Edge::new(2, 5).same_as(&Edge::new(5, 2)));
        assert!(!Edge::new(2, 5).same_as(&Edge::new(2, 6)));
        assert_ne!(Edge::new(2, 5), Edge::new(5, 2));
    }
}
