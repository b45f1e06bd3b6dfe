use crate::{
    graph::Graph,
    id::NodeId,
    path::{Paths, PathsExt},
    tracing_support::info_span,
};

impl Graph {
    /// Finds the "bridge" edges in the component containing `root`. An edge
    /// is a bridge (also isthmus, cut-edge or cut arc) if removing it
    /// increases the number of connected components; equivalently, it lies
    /// on no cycle.
    ///
    /// ```text
    ///        a ← d
    ///      ↙   ↖
    /// e → b  →  c     Bridges (3): e → b, f → b, d → a
    ///     ↑
    ///     f
    ///
    /// a           e
    /// ↑ ⤡       ⤢ ↑
    /// |   c → d   |   Bridges (1): c → d
    /// ↓ ⤢       ⤡ ↓
    /// b           f
    /// ```
    ///
    /// The component is walked ignoring edge direction. For every visited
    /// node `n` and every neighbor `m` of `n`:
    ///
    /// 1. If `m` has a single record, the edge is a dangling leaf and the
    ///    path from `m` to its only neighbor (if any) is a bridge.
    /// 2. Otherwise each neighbor `p` of `m` without an outgoing path back
    ///    to `m` contributes the path from `m` to `p`.
    ///
    /// Bridges are returned as paths, deduplicated by their rendered labels.
    ///
    /// This is a heuristic. It is exact for trees, dangling edges leading
    /// into cycles, and cycles joined by a single directed edge, but it does
    /// not report a connection made only of links in both directions between
    /// two larger subgraphs.
    pub fn find_bridges(&self, root: NodeId) -> Paths {
        let _span = info_span!("find_bridges", %root).entered();
        let mut bridges = Paths::new();

        self.visit_all(root, |n| {
            for edge in self.edges(n) {
                let m = edge.target;
                let m_edges = self.edges(m);

                if m_edges.len() == 1 {
                    if let Some(path) = self.path_to(m, m_edges[0].target) {
                        if !bridges.contains_path(&path, self) {
                            bridges.push(path);
                        }
                    }
                    continue;
                }

                for p in m_edges.targets() {
                    if self.has_path(p, m) {
                        continue;
                    }
                    if let Some(path) = self.path_to(m, p) {
                        if !bridges.contains_path(&path, self) {
                            bridges.push(path);
                        }
                    }
                }
            }
        });

        bridges
    }
}
